use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::contact::form::SubmitGate;
use crate::contact::mailer::Mailer;
use crate::sections::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Every editable section. Handlers hold the lock only for synchronous
    /// store and editor operations.
    pub portfolio: Arc<Mutex<Portfolio>>,
    /// Outbound email for the contact relay. `HttpMailer` when an API key is
    /// configured, `LogMailer` otherwise.
    pub mailer: Arc<dyn Mailer>,
    /// Raised while a contact submission is being sent; overlapping submits
    /// get a 409.
    pub contact_gate: SubmitGate,
    pub config: Config,
}

impl AppState {
    pub fn new(portfolio: Portfolio, mailer: Arc<dyn Mailer>, config: Config) -> Self {
        Self {
            portfolio: Arc::new(Mutex::new(portfolio)),
            mailer,
            contact_gate: SubmitGate::new(),
            config,
        }
    }
}
