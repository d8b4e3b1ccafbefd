use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{drop_blank, invalid, is_blank, FieldError, FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Current,
    Experience,
    Education,
}

impl TimelineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineKind::Current => "current",
            TimelineKind::Experience => "experience",
            TimelineKind::Education => "education",
        }
    }
}

impl fmt::Display for TimelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimelineKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "current" => Ok(TimelineKind::Current),
            "experience" => Ok(TimelineKind::Experience),
            "education" => Ok(TimelineKind::Education),
            _ => Err(invalid("type", "one of current, experience, education")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: u32,
    /// Period label, e.g. "2022-2024".
    pub year: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: TimelineKind,
    pub description: String,
    pub achievements: Vec<String>,
}

impl Record for TimelineEvent {
    const STORAGE_KEY: &'static str = "portfolio-timeline";

    fn defaults() -> Vec<Self> {
        vec![
            event(
                1,
                "2024",
                "Lead SDET",
                "Tech Innovation Corp",
                "Remote",
                TimelineKind::Current,
                "Leading a team of 8 SDETs, implementing advanced test automation frameworks, and establishing quality gates for CI/CD pipelines.",
                &[
                    "Reduced test execution time by 70%",
                    "Implemented API testing strategy covering 95% endpoints",
                    "Mentored 5 junior SDETs to senior level",
                ],
            ),
            event(
                2,
                "2022-2024",
                "Senior SDET",
                "Digital Solutions Ltd",
                "Bangalore, India",
                TimelineKind::Experience,
                "Designed and developed comprehensive test automation frameworks using Selenium and REST Assured for web and API testing.",
                &[
                    "Built scalable automation framework from scratch",
                    "Achieved 90% test automation coverage",
                    "Integrated testing with Jenkins CI/CD pipeline",
                ],
            ),
            event(
                3,
                "2020-2022",
                "Test Automation Engineer",
                "QualityFirst Systems",
                "Hyderabad, India",
                TimelineKind::Experience,
                "Specialized in developing automated test scripts and implementing quality assurance processes for multiple client projects.",
                &[
                    "Automated 200+ test cases across 5 projects",
                    "Reduced manual testing effort by 60%",
                    "Implemented data-driven testing approaches",
                ],
            ),
            event(
                4,
                "2018-2020",
                "Junior QA Engineer",
                "StartupTech Inc",
                "Chennai, India",
                TimelineKind::Experience,
                "Started career in manual testing and gradually transitioned to automation testing using Selenium WebDriver.",
                &[
                    "Executed 500+ manual test cases",
                    "Learned Selenium and Java programming",
                    "Contributed to agile development processes",
                ],
            ),
            event(
                5,
                "2018",
                "B.Tech in Computer Science",
                "University of Technology",
                "India",
                TimelineKind::Education,
                "Graduated with honors, focusing on software engineering and quality assurance principles.",
                &[
                    "CGPA: 8.5/10",
                    "Published research paper on automated testing",
                    "Led university coding club",
                ],
            ),
        ]
    }

    fn blank(next_id: u32) -> Self {
        TimelineEvent {
            id: next_id,
            year: String::new(),
            title: String::new(),
            company: String::new(),
            location: String::new(),
            kind: TimelineKind::Experience,
            description: String::new(),
            achievements: vec![String::new()],
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
            "year" => self.year = value.into_text(field)?,
            "title" => self.title = value.into_text(field)?,
            "company" => self.company = value.into_text(field)?,
            "location" => self.location = value.into_text(field)?,
            "description" => self.description = value.into_text(field)?,
            "type" => self.kind = value.into_text(field)?.parse()?,
            "achievements" => self.achievements = value.into_list(field)?,
            "id" => return Err(FieldError::ReadOnly(field.to_string())),
            _ => return Err(FieldError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    fn list_mut(&mut self, field: &str) -> Result<&mut Vec<String>, FieldError> {
        match field {
            "achievements" => Ok(&mut self.achievements),
            _ => Err(FieldError::NotAList(field.to_string())),
        }
    }

    fn sanitize(self) -> Option<Self> {
        if is_blank(&self.title) || is_blank(&self.company) {
            return None;
        }
        Some(TimelineEvent {
            achievements: drop_blank(self.achievements),
            ..self
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    year: &str,
    title: &str,
    company: &str,
    location: &str,
    kind: TimelineKind,
    description: &str,
    achievements: &[&str],
) -> TimelineEvent {
    TimelineEvent {
        id,
        year: year.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        kind,
        description: description.to_string(),
        achievements: achievements.iter().map(|a| a.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_order_and_kinds() {
        let defaults = TimelineEvent::defaults();
        assert_eq!(defaults.len(), 5);
        assert_eq!(defaults[0].kind, TimelineKind::Current);
        assert_eq!(defaults[4].kind, TimelineKind::Education);
    }

    #[test]
    fn test_blank_has_one_empty_achievement() {
        let e = TimelineEvent::blank(6);
        assert_eq!(e.id, 6);
        assert_eq!(e.kind, TimelineKind::Experience);
        assert_eq!(e.achievements, vec![String::new()]);
    }

    #[test]
    fn test_sanitize_filters_blank_achievements() {
        let mut e = TimelineEvent::defaults().remove(1);
        e.achievements.push("   ".into());
        e.achievements.insert(0, String::new());
        let saved = e.sanitize().unwrap();
        assert_eq!(saved.achievements.len(), 3);
    }

    #[test]
    fn test_sanitize_requires_title_and_company() {
        let mut e = TimelineEvent::blank(1);
        e.title = "QA".into();
        assert!(e.clone().sanitize().is_none());
        e.company = "Acme".into();
        assert!(e.sanitize().is_some());
    }

    #[test]
    fn test_set_type_parses_kind() {
        let mut e = TimelineEvent::blank(1);
        e.set_field("type", FieldValue::Text("education".into())).unwrap();
        assert_eq!(e.kind, TimelineKind::Education);
        assert!(e
            .set_field("type", FieldValue::Text("internship".into()))
            .is_err());
        assert_eq!(e.kind, TimelineKind::Education);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let json = serde_json::to_value(TimelineEvent::blank(1)).unwrap();
        assert_eq!(json["type"], "experience");
        assert!(json.get("kind").is_none());
    }
}
