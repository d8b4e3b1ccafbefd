use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::ContactFields;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("email API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Outbound email for contact submissions. Carried in `AppState` as
/// `Arc<dyn Mailer>`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, submission: &ContactFields) -> Result<(), MailError>;
}

#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct EmailApiError {
    message: String,
}

/// Sends through an HTTP email API (Resend-compatible JSON body).
/// Makes a single attempt; the visitor retries by resubmitting.
#[derive(Clone)]
pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
    to: String,
}

impl HttpMailer {
    pub fn new(
        api_url: String,
        api_key: String,
        from: String,
        to: String,
        timeout: Duration,
    ) -> Result<Self, MailError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
            from,
            to,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, submission: &ContactFields) -> Result<(), MailError> {
        let body = EmailRequest {
            from: &self.from,
            to: [self.to.as_str()],
            reply_to: submission.email.trim(),
            subject: format!("New portfolio message from {}", submission.name.trim()),
            text: render_email_text(submission),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<EmailApiError>(&raw)
                .map(|e| e.message)
                .unwrap_or(raw);
            warn!("Email API returned {status}: {message}");
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Email API accepted message from {}", submission.email.trim());
        Ok(())
    }
}

/// Logs submissions instead of sending them. Used when no email API key is
/// configured.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, submission: &ContactFields) -> Result<(), MailError> {
        info!(
            name = %submission.name,
            email = %submission.email,
            "Contact form submitted: {}",
            submission.message
        );
        Ok(())
    }
}

pub fn render_email_text(submission: &ContactFields) -> String {
    format!(
        "Name: {}\nEmail: {}\n\n{}\n",
        submission.name.trim(),
        submission.email.trim(),
        submission.message.trim_end()
    )
}
