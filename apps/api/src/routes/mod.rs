pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::resume;
use crate::sections::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page and section views
        .route("/api/v1/page", get(handlers::handle_get_page))
        .route("/api/v1/sections/:section", get(handlers::handle_get_section))
        // Section editors
        .route(
            "/api/v1/sections/:section/editor",
            post(handlers::handle_open_editor).get(handlers::handle_get_editor),
        )
        .route(
            "/api/v1/sections/:section/editor/records",
            post(handlers::handle_add_record),
        )
        .route(
            "/api/v1/sections/:section/editor/records/:index",
            patch(handlers::handle_update_field).delete(handlers::handle_remove_record),
        )
        .route(
            "/api/v1/sections/:section/editor/records/:index/lists/:field",
            post(handlers::handle_add_list_item),
        )
        .route(
            "/api/v1/sections/:section/editor/records/:index/lists/:field/:item",
            patch(handlers::handle_update_list_item).delete(handlers::handle_remove_list_item),
        )
        .route(
            "/api/v1/sections/:section/editor/save",
            post(handlers::handle_save),
        )
        .route(
            "/api/v1/sections/:section/editor/cancel",
            post(handlers::handle_cancel),
        )
        // Contact relay and resume export
        .route("/api/v1/contact", post(contact::handle_contact))
        .route("/api/v1/resume", get(resume::handle_resume_download))
        .with_state(state)
}
