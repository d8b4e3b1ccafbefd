use serde::{Deserialize, Serialize};

use super::{is_blank, saturate_i32, FieldError, FieldValue, Record};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
const AVATAR_MAX_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: i32,
    /// Initials shown in the avatar bubble.
    pub avatar: String,
}

impl Record for Testimonial {
    const STORAGE_KEY: &'static str = "portfolio-testimonials";

    fn defaults() -> Vec<Self> {
        vec![
            Testimonial {
                id: 1,
                name: "Sarah Johnson".into(),
                role: "QA Manager".into(),
                company: "TechCorp Solutions".into(),
                content: "Syed's expertise in test automation transformed our QA process. His leadership in implementing comprehensive testing frameworks reduced our bug detection time by 60%.".into(),
                rating: 5,
                avatar: "SJ".into(),
            },
            Testimonial {
                id: 2,
                name: "Michael Chen".into(),
                role: "Product Manager".into(),
                company: "Innovation Labs".into(),
                content: "Working with Syed was exceptional. His attention to detail and systematic approach to testing ensured our product launches were always smooth and bug-free.".into(),
                rating: 5,
                avatar: "MC".into(),
            },
            Testimonial {
                id: 3,
                name: "Emily Rodriguez".into(),
                role: "Senior Developer".into(),
                company: "DevFlow Inc".into(),
                content: "Syed's API testing strategies using REST Assured were game-changing for our team. His mentorship helped elevate our entire testing approach.".into(),
                rating: 5,
                avatar: "ER".into(),
            },
        ]
    }

    fn blank(next_id: u32) -> Self {
        Testimonial {
            id: next_id,
            name: String::new(),
            role: String::new(),
            company: String::new(),
            content: String::new(),
            rating: MAX_RATING,
            avatar: String::new(),
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
            "name" => self.name = value.into_text(field)?,
            "role" => self.role = value.into_text(field)?,
            "company" => self.company = value.into_text(field)?,
            "content" => self.content = value.into_text(field)?,
            "avatar" => self.avatar = value.into_text(field)?,
            "rating" => {
                self.rating = saturate_i32(value.into_number(field, i64::from(MAX_RATING))?)
            }
            "id" => return Err(FieldError::ReadOnly(field.to_string())),
            _ => return Err(FieldError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    fn sanitize(self) -> Option<Self> {
        if is_blank(&self.name) || is_blank(&self.content) {
            return None;
        }
        let avatar: String = self.avatar.trim().chars().take(AVATAR_MAX_CHARS).collect();
        let avatar = if avatar.is_empty() {
            initials(&self.name)
        } else {
            avatar
        };
        Some(Testimonial {
            rating: self.rating.clamp(MIN_RATING, MAX_RATING),
            avatar,
            ..self
        })
    }
}

/// Uppercased first letters of the first two words of a name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
