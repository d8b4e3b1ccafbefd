//! Plain-text resume download assembled from the built-in profile.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::content::{
    Certification, Profile, CERTIFICATIONS, PROFILE, RESUME_SKILLS, RESUME_SUMMARY,
};
use crate::state::AppState;

pub fn render_resume(
    profile: &Profile,
    certifications: &[Certification],
    origin: &str,
) -> String {
    let mut text = String::new();
    text.push_str(&profile.full_name.to_uppercase());
    text.push('\n');
    text.push_str(profile.short_title);
    text.push_str("\n\nCONTACT\n");
    text.push_str(&format!("Email: {}\n", profile.email));
    text.push_str(&format!("Portfolio: {origin}\n"));
    text.push_str("\nSUMMARY\n");
    text.push_str(RESUME_SUMMARY);
    text.push_str("\n\nSKILLS\n");
    for skill in RESUME_SKILLS {
        text.push_str(&format!("• {skill}\n"));
    }
    text.push_str("\nCERTIFICATIONS\n");
    for cert in certifications {
        text.push_str(&format!("• {} ({})\n", cert.name, cert.date));
    }
    text.push_str(&format!("\nFor full details, visit my portfolio at {origin}\n"));
    text
}

/// "Syed Wilayath Khadari" → "Syed_Wilayath_Khadari_Resume.txt"
pub fn resume_filename(full_name: &str) -> String {
    let stem: Vec<String> = full_name
        .split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect();
    format!("{}_Resume.txt", stem.join("_"))
}

/// GET /api/v1/resume
pub async fn handle_resume_download(State(state): State<AppState>) -> Response {
    let body = render_resume(&PROFILE, CERTIFICATIONS, &state.config.public_origin);
    let filename = resume_filename(PROFILE.full_name);
    info!("Serving resume download {filename}");

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    (
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}
