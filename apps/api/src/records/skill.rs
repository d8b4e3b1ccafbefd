use serde::{Deserialize, Serialize};

use super::{is_blank, saturate_i32, FieldError, FieldValue, Record};

pub const MAX_LEVEL: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 1–100 once saved.
    pub level: i32,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

impl Record for Skill {
    const STORAGE_KEY: &'static str = "portfolio-skills";

    fn defaults() -> Vec<Self> {
        vec![
            Skill::new("Selenium", 95),
            Skill::new("REST Assured", 90),
            Skill::new("Java", 88),
            Skill::new("API Testing", 92),
            Skill::new("AWS", 85),
            Skill::new("Jira", 90),
            Skill::new("Confluence", 85),
            Skill::new("Agile Methodologies", 88),
        ]
    }

    fn blank(_next_id: u32) -> Self {
        Skill::new("", 0)
    }

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            "name" => self.name = value.into_text(field)?,
            "level" => self.level = saturate_i32(value.into_number(field, 0)?),
            _ => return Err(FieldError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    /// Over-range levels clamp to 100; a blank name or a level of zero or
    /// below drops the skill.
    fn sanitize(self) -> Option<Self> {
        if is_blank(&self.name) || self.level <= 0 {
            return None;
        }
        Some(Skill {
            level: self.level.min(MAX_LEVEL),
            ..self
        })
    }
}
