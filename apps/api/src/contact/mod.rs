// Contact relay: validates a contact-form submission and forwards it to the
// email service. All outbound email goes through `mailer`.

pub mod form;
pub mod handlers;
pub mod mailer;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Every field is required and the address must look like one.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(format!("'{field}' is required"));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(format!("'{}' is not a valid email address", self.email.trim()));
        }
        Ok(())
    }
}

fn looks_like_email(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !address.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// The toast shown after a submission resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Message Sent!",
            description: "Thank you for your message. I'll get back to you soon!",
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: "Message Not Sent",
            description: "Something went wrong while sending your message. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert!(fields("Ana", "ana@example.com", "Hello").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let err = fields("  ", "ana@example.com", "Hello").validate().unwrap_err();
        assert!(err.contains("name"));
        assert!(fields("Ana", "ana@example.com", "\n").validate().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        for bad in ["ana", "ana@", "@example.com", "ana@example", "a b@example.com", "a@b@c.com"] {
            assert!(fields("Ana", bad, "Hi").validate().is_err(), "{bad}");
        }
    }
}
