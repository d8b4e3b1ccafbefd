use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::contact::form::{ContactForm, SubmitRejected};
use crate::contact::{ContactFields, Notification, NotificationKind};
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub notification: Notification,
    /// The form as it should be shown next: cleared after a send, untouched
    /// after a failure.
    pub fields: ContactFields,
}

impl From<SubmitRejected> for AppError {
    fn from(err: SubmitRejected) -> Self {
        match err {
            SubmitRejected::Invalid(msg) => AppError::Validation(msg),
            SubmitRejected::InFlight => AppError::Conflict(err.to_string()),
        }
    }
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    AppJson(req): AppJson<ContactFields>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let mut form = ContactForm::new(req, state.contact_gate.clone());
    let notification = form.submit(state.mailer.as_ref()).await?;

    let status = match notification.kind {
        NotificationKind::Success => StatusCode::OK,
        NotificationKind::Failure => StatusCode::BAD_GATEWAY,
    };
    Ok((
        status,
        Json(ContactResponse {
            notification,
            fields: form.fields().clone(),
        }),
    ))
}
