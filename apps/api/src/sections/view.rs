//! Read-only section rendering.
//!
//! Views are built from committed records only; the editor's working copy is
//! never visible here.

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::content::{
    self, BlogPost, Certification, ContactChannel, NavItem, ABOUT_FEATURES, ABOUT_PARAGRAPHS,
    BLOG_POSTS, CERTIFICATIONS, CONTACT_INTRO, HERO_ACTIONS, NAV_ITEMS, PROFILE,
};
use crate::records::{Project, Record, Skill, Testimonial, TimelineEvent, TimelineKind};
use crate::sections::{Portfolio, SectionKind};

pub const RESUME_PATH: &str = "/api/v1/resume";

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    pub editable: bool,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Hero {
        name: &'static str,
        headline: &'static str,
        summary: &'static str,
        actions: &'static [NavItem],
    },
    About {
        paragraphs: &'static [&'static str],
        features: &'static [&'static str],
    },
    Skills(Vec<SkillCard>),
    Projects(Vec<Project>),
    Timeline(Vec<TimelineCard>),
    Testimonials(Vec<TestimonialCard>),
    Certifications {
        items: &'static [Certification],
        resume_url: &'static str,
    },
    Blog(&'static [BlogPost]),
    Contact {
        intro: &'static str,
        channels: [ContactChannel; 3],
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCard {
    pub name: String,
    pub level: i32,
    /// CSS width of the progress bar.
    pub width: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineCard {
    #[serde(flatten)]
    pub event: TimelineEvent,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialCard {
    #[serde(flatten)]
    pub testimonial: Testimonial,
    pub stars: String,
    pub byline: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub copyright: String,
    pub credits: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub brand: &'static str,
    pub nav: &'static [NavItem],
    pub sections: Vec<SectionView>,
    pub footer: Footer,
}

/// An editable record shape that knows how its section renders.
pub trait SectionRecord: Record {
    const KIND: SectionKind;

    fn body(records: &[Self]) -> SectionBody;
}

impl SectionRecord for Skill {
    const KIND: SectionKind = SectionKind::Skills;

    fn body(records: &[Self]) -> SectionBody {
        SectionBody::Skills(
            records
                .iter()
                .map(|s| SkillCard {
                    name: s.name.clone(),
                    level: s.level,
                    width: format!("{}%", s.level),
                })
                .collect(),
        )
    }
}

impl SectionRecord for Project {
    const KIND: SectionKind = SectionKind::Projects;

    fn body(records: &[Self]) -> SectionBody {
        SectionBody::Projects(records.to_vec())
    }
}

impl SectionRecord for TimelineEvent {
    const KIND: SectionKind = SectionKind::Timeline;

    fn body(records: &[Self]) -> SectionBody {
        SectionBody::Timeline(
            records
                .iter()
                .map(|event| TimelineCard {
                    icon: match event.kind {
                        TimelineKind::Education => "🎓",
                        _ => "💼",
                    },
                    badge: (event.kind == TimelineKind::Current).then_some("Current"),
                    event: event.clone(),
                })
                .collect(),
        )
    }
}

impl SectionRecord for Testimonial {
    const KIND: SectionKind = SectionKind::Testimonials;

    fn body(records: &[Self]) -> SectionBody {
        SectionBody::Testimonials(
            records
                .iter()
                .map(|t| TestimonialCard {
                    stars: "★".repeat(t.rating.max(0) as usize),
                    byline: byline(&t.role, &t.company),
                    testimonial: t.clone(),
                })
                .collect(),
        )
    }
}

fn byline(role: &str, company: &str) -> String {
    match (role.trim().is_empty(), company.trim().is_empty()) {
        (false, false) => format!("{role} at {company}"),
        (false, true) => role.to_string(),
        (true, false) => company.to_string(),
        (true, true) => String::new(),
    }
}

pub fn editable_view<R: SectionRecord>(records: &[R]) -> SectionView {
    let kind = R::KIND;
    SectionView {
        id: kind.id(),
        title: kind.title(),
        subtitle: kind.subtitle(),
        editable: true,
        body: R::body(records),
    }
}

fn fixed(
    id: &'static str,
    title: &'static str,
    subtitle: Option<&'static str>,
    body: SectionBody,
) -> SectionView {
    SectionView {
        id,
        title,
        subtitle,
        editable: false,
        body,
    }
}

pub fn hero() -> SectionView {
    fixed(
        "home",
        PROFILE.display_name,
        None,
        SectionBody::Hero {
            name: PROFILE.display_name,
            headline: PROFILE.headline,
            summary: PROFILE.summary,
            actions: HERO_ACTIONS,
        },
    )
}

pub fn about() -> SectionView {
    fixed(
        "about",
        "About Me",
        None,
        SectionBody::About {
            paragraphs: ABOUT_PARAGRAPHS,
            features: ABOUT_FEATURES,
        },
    )
}

pub fn certifications() -> SectionView {
    fixed(
        "certifications",
        "Certifications & Resume",
        Some("Professional certifications and achievements"),
        SectionBody::Certifications {
            items: CERTIFICATIONS,
            resume_url: RESUME_PATH,
        },
    )
}

pub fn blog() -> SectionView {
    fixed(
        "blog",
        "Latest Blog Posts",
        Some("Sharing insights on test automation and quality assurance"),
        SectionBody::Blog(BLOG_POSTS),
    )
}

pub fn contact() -> SectionView {
    fixed(
        "contact",
        "Get In Touch",
        Some("Ready to discuss your next project or explore collaboration opportunities? I'd love to hear from you!"),
        SectionBody::Contact {
            intro: CONTACT_INTRO,
            channels: content::contact_channels(),
        },
    )
}

/// Looks up any section, editable or not, by its page anchor.
pub fn section_by_id(portfolio: &Portfolio, id: &str) -> Option<SectionView> {
    if let Some(kind) = SectionKind::from_id(id) {
        return Some(portfolio.section(kind).view());
    }
    match id {
        "home" | "hero" => Some(hero()),
        "about" => Some(about()),
        "certifications" => Some(certifications()),
        "blog" => Some(blog()),
        "contact" => Some(contact()),
        _ => None,
    }
}

pub fn compose_page(portfolio: &Portfolio) -> PageView {
    let sections = vec![
        hero(),
        about(),
        portfolio.section(SectionKind::Skills).view(),
        portfolio.section(SectionKind::Projects).view(),
        portfolio.section(SectionKind::Timeline).view(),
        portfolio.section(SectionKind::Testimonials).view(),
        certifications(),
        blog(),
        contact(),
    ];

    PageView {
        brand: PROFILE.display_name,
        nav: NAV_ITEMS,
        sections,
        footer: Footer {
            copyright: format!(
                "© {} {}. All rights reserved.",
                Utc::now().year(),
                PROFILE.full_name
            ),
            credits: "Built with Rust, Axum, and Tokio",
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStore;

    fn portfolio() -> Portfolio {
        Portfolio::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_page_sections_in_navigation_order() {
        let page = compose_page(&portfolio());
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "home",
                "about",
                "skills",
                "projects",
                "timeline",
                "testimonials",
                "certifications",
                "blog",
                "contact"
            ]
        );
        // every nav anchor resolves to a rendered section
        for item in page.nav {
            assert!(ids.contains(&item.href.trim_start_matches('#')));
        }
    }

    #[test]
    fn test_only_record_sections_are_editable() {
        let page = compose_page(&portfolio());
        let editable: Vec<&str> = page
            .sections
            .iter()
            .filter(|s| s.editable)
            .map(|s| s.id)
            .collect();
        assert_eq!(editable, vec!["skills", "projects", "timeline", "testimonials"]);
    }

    #[test]
    fn test_skill_card_width() {
        let view = editable_view(&[Skill::new("Rust", 72)]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["body"]["kind"], "skills");
        assert_eq!(json["body"]["content"][0]["width"], "72%");
    }

    #[test]
    fn test_timeline_icons_and_badge() {
        let json = serde_json::to_value(editable_view(&TimelineEvent::defaults())).unwrap();
        let cards = json["body"]["content"].as_array().unwrap();
        assert_eq!(cards[0]["badge"], "Current");
        assert_eq!(cards[0]["icon"], "💼");
        assert!(cards[1].get("badge").is_none());
        assert_eq!(cards[4]["icon"], "🎓");
        assert_eq!(cards[4]["type"], "education");
    }

    #[test]
    fn test_testimonial_stars_and_byline() {
        let json = serde_json::to_value(editable_view(&Testimonial::defaults())).unwrap();
        let card = &json["body"]["content"][0];
        assert_eq!(card["stars"], "★★★★★");
        assert_eq!(card["byline"], "QA Manager at TechCorp Solutions");
        assert_eq!(card["name"], "Sarah Johnson");
    }

    #[test]
    fn test_byline_missing_parts() {
        assert_eq!(byline("CTO", ""), "CTO");
        assert_eq!(byline("", "Acme"), "Acme");
        assert_eq!(byline(" ", " "), "");
    }

    #[test]
    fn test_section_by_id() {
        let p = portfolio();
        assert!(section_by_id(&p, "skills").unwrap().editable);
        assert_eq!(section_by_id(&p, "hero").unwrap().id, "home");
        assert!(section_by_id(&p, "pricing").is_none());
    }

    #[test]
    fn test_footer_names_owner() {
        let page = compose_page(&portfolio());
        assert!(page.footer.copyright.contains("Syed Wilayath Khadari"));
    }
}
