//! Built-in page content for the sections the owner does not edit.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: &'static str,
    pub full_name: &'static str,
    pub headline: &'static str,
    pub short_title: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub linkedin_label: &'static str,
    pub linkedin_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    display_name: "Syed Wilayath",
    full_name: "Syed Wilayath Khadari",
    headline: "Lead SDET (Software Development Engineer in Test)",
    short_title: "Lead SDET | Test Automation Expert",
    summary: "A results-oriented Lead SDET with four years of comprehensive experience in crafting and executing robust automation strategies. Expert in API and UI automation with a strong command of AWS cloud services.",
    email: "syedwilayath2@gmail.com",
    phone: "+91 70755 69279",
    phone_href: "tel:+917075569279",
    linkedin_label: "linkedin.com/in/SyedWilayath",
    linkedin_url: "https://www.linkedin.com/in/SyedWilayath",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "#home", label: "Home" },
    NavItem { href: "#about", label: "About" },
    NavItem { href: "#skills", label: "Skills" },
    NavItem { href: "#projects", label: "Projects" },
    NavItem { href: "#timeline", label: "Journey" },
    NavItem { href: "#testimonials", label: "Testimonials" },
    NavItem { href: "#contact", label: "Contact" },
];

pub const HERO_ACTIONS: &[NavItem] = &[
    NavItem { href: "#contact", label: "Get In Touch" },
    NavItem { href: "#projects", label: "View Projects" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "A results-oriented Lead SDET with approximately four years of comprehensive experience in crafting and executing robust automation strategies. I specialize in building scalable testing solutions that ensure product quality and reliability.",
    "My expertise spans API test automation using REST Assured and UI automation with Selenium WebDriver, coupled with a strong command of AWS cloud services for scalable testing solutions.",
    "I effectively manage and mentor a team of junior SDETs, guiding them through code reviews, analyzing Jira stories to define test scope, and providing critical input on business requirements to ensure comprehensive test coverage and alignment with project goals.",
];

pub const ABOUT_FEATURES: &[&str] = &[
    "API Test Automation with REST Assured",
    "UI Automation with Selenium WebDriver",
    "AWS Cloud Services Integration",
    "Team Leadership & Mentoring",
    "Test Strategy & Planning",
];

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: u32,
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: &'static str,
    pub skills: &'static [&'static str],
    pub verified: bool,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        name: "ISTQB Advanced Level Test Manager",
        issuer: "International Software Testing Qualifications Board",
        date: "2023",
        credential_id: "ISTQB-ATM-2023-001",
        skills: &["Test Management", "Risk Assessment", "Quality Assurance"],
        verified: true,
    },
    Certification {
        id: 2,
        name: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        date: "2023",
        credential_id: "AWS-SA-2023-789",
        skills: &["Cloud Architecture", "DevOps", "Infrastructure"],
        verified: true,
    },
    Certification {
        id: 3,
        name: "Selenium WebDriver Certification",
        issuer: "Selenium Academy",
        date: "2022",
        credential_id: "SEL-WD-2022-456",
        skills: &["Test Automation", "Selenium", "Web Testing"],
        verified: true,
    },
    Certification {
        id: 4,
        name: "Agile Testing Certified Practitioner",
        issuer: "Agile Alliance",
        date: "2022",
        credential_id: "AA-ATP-2022-123",
        skills: &["Agile Methodologies", "Scrum", "Continuous Testing"],
        verified: true,
    },
];

/// Skill groups listed on the downloadable resume.
pub const RESUME_SKILLS: &[&str] = &[
    "Test Automation: Selenium, REST Assured, Java",
    "API Testing & Web Services",
    "CI/CD Integration & DevOps",
    "Agile Methodologies & Scrum",
    "Team Leadership & Mentoring",
    "Quality Assurance & Test Strategy",
];

pub const RESUME_SUMMARY: &str = "Experienced Lead SDET with expertise in test automation, API testing, and team leadership.\nSpecialized in Selenium, REST Assured, Java, and CI/CD implementation.";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub slug: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Advanced API Testing Strategies with REST Assured",
        excerpt: "Learn how to implement comprehensive API testing strategies using REST Assured framework for robust test automation.",
        date: "2024-01-15",
        read_time: "8 min read",
        category: "API Testing",
        slug: "advanced-api-testing-rest-assured",
    },
    BlogPost {
        id: 2,
        title: "Building Scalable Test Automation Frameworks",
        excerpt: "Best practices for designing and implementing test automation frameworks that scale with your team and product.",
        date: "2024-01-02",
        read_time: "12 min read",
        category: "Test Automation",
        slug: "scalable-test-automation-frameworks",
    },
    BlogPost {
        id: 3,
        title: "CI/CD Integration for Test Automation",
        excerpt: "Step-by-step guide to integrating your test automation suite with CI/CD pipelines for continuous quality assurance.",
        date: "2023-12-18",
        read_time: "10 min read",
        category: "DevOps",
        slug: "cicd-integration-test-automation",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    /// Opens in a new tab.
    pub external: bool,
}

pub fn contact_channels() -> [ContactChannel; 3] {
    [
        ContactChannel {
            label: "Email",
            value: PROFILE.email,
            href: "mailto:syedwilayath2@gmail.com",
            external: false,
        },
        ContactChannel {
            label: "Phone",
            value: PROFILE.phone,
            href: PROFILE.phone_href,
            external: false,
        },
        ContactChannel {
            label: "LinkedIn",
            value: PROFILE.linkedin_label,
            href: PROFILE.linkedin_url,
            external: true,
        },
    ]
}

pub const CONTACT_INTRO: &str = "Whether you have a project in mind, need consultation on test automation strategies, or just want to connect professionally, I'm always open to meaningful conversations.";
