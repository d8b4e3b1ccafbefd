use serde::{Deserialize, Serialize};

use super::{drop_blank, is_blank, FieldError, FieldValue, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub highlights: Vec<String>,
}

impl Record for Project {
    const STORAGE_KEY: &'static str = "portfolio-projects";

    fn defaults() -> Vec<Self> {
        vec![Project {
            id: 1,
            title: "IELTS".into(),
            description: "The International English Language Testing System (IELTS) is a globally recognized standardized test of English language proficiency for non-native English speakers. It is jointly managed by the British Council, IDP IELTS Australia, and Cambridge Assessment English. IELTS is widely accepted for academic, immigration, and professional purposes in many countries, including Australia, Canada, New Zealand, and the United Kingdom.".into(),
            tech_stack: ["Java", "Selenium WebDriver", "REST Assured", "TestNG"]
                .map(String::from)
                .to_vec(),
            highlights: [
                "Comprehensive test automation framework",
                "API and UI testing integration",
                "Cross-browser compatibility testing",
                "Continuous integration pipeline",
            ]
            .map(String::from)
            .to_vec(),
        }]
    }

    fn blank(next_id: u32) -> Self {
        Project {
            id: next_id,
            title: String::new(),
            description: String::new(),
            tech_stack: Vec::new(),
            highlights: Vec::new(),
        }
    }

    fn id(&self) -> Option<u32> {
        Some(self.id)
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            "title" => self.title = value.into_text(field)?,
            "description" => self.description = value.into_text(field)?,
            "techStack" => self.tech_stack = value.into_list(field)?,
            "highlights" => self.highlights = value.into_list(field)?,
            "id" => return Err(FieldError::ReadOnly(field.to_string())),
            _ => return Err(FieldError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    fn list_mut(&mut self, field: &str) -> Result<&mut Vec<String>, FieldError> {
        match field {
            "techStack" => Ok(&mut self.tech_stack),
            "highlights" => Ok(&mut self.highlights),
            _ => Err(FieldError::NotAList(field.to_string())),
        }
    }

    fn sanitize(self) -> Option<Self> {
        if is_blank(&self.title) {
            return None;
        }
        Some(Project {
            tech_stack: drop_blank(self.tech_stack),
            highlights: drop_blank(self.highlights),
            ..self
        })
    }
}
