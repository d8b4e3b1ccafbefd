use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::records::FieldValue;
use crate::sections::view::{compose_page, section_by_id, PageView, SectionView};
use crate::sections::{EditorView, SectionKind};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FieldUpdate {
    pub field: String,
    pub value: FieldValue,
}

#[derive(Deserialize)]
pub struct ItemUpdate {
    pub value: String,
}

#[derive(Serialize)]
pub struct Added {
    pub index: usize,
    pub editor: EditorView,
}

fn editable(section: &str) -> Result<SectionKind, AppError> {
    SectionKind::from_id(section)
        .ok_or_else(|| AppError::NotFound(format!("No editable section '{section}'")))
}

/// GET /api/v1/page
pub async fn handle_get_page(State(state): State<AppState>) -> Json<PageView> {
    let portfolio = state.portfolio.lock().await;
    Json(compose_page(&portfolio))
}

/// GET /api/v1/sections/:section
pub async fn handle_get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<SectionView>, AppError> {
    let portfolio = state.portfolio.lock().await;
    section_by_id(&portfolio, &section)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No section '{section}'")))
}

/// POST /api/v1/sections/:section/editor
pub async fn handle_open_editor(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<(StatusCode, Json<EditorView>), AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    let view = portfolio.section_mut(kind).open_editor()?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sections/:section/editor
pub async fn handle_get_editor(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<EditorView>, AppError> {
    let kind = editable(&section)?;
    let portfolio = state.portfolio.lock().await;
    Ok(Json(portfolio.section(kind).working_copy()?))
}

/// POST /api/v1/sections/:section/editor/records
pub async fn handle_add_record(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<(StatusCode, Json<Added>), AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    let ops = portfolio.section_mut(kind);
    let index = ops.add_record()?;
    Ok((
        StatusCode::CREATED,
        Json(Added {
            index,
            editor: ops.working_copy()?,
        }),
    ))
}

/// PATCH /api/v1/sections/:section/editor/records/:index
pub async fn handle_update_field(
    State(state): State<AppState>,
    Path((section, index)): Path<(String, usize)>,
    AppJson(req): AppJson<FieldUpdate>,
) -> Result<Json<EditorView>, AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    let ops = portfolio.section_mut(kind);
    ops.update_field(index, &req.field, req.value)?;
    Ok(Json(ops.working_copy()?))
}

/// DELETE /api/v1/sections/:section/editor/records/:index
pub async fn handle_remove_record(
    State(state): State<AppState>,
    Path((section, index)): Path<(String, usize)>,
) -> Result<Json<EditorView>, AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    let ops = portfolio.section_mut(kind);
    ops.remove_record(index)?;
    Ok(Json(ops.working_copy()?))
}

/// POST /api/v1/sections/:section/editor/records/:index/lists/:field
pub async fn handle_add_list_item(
    State(state): State<AppState>,
    Path((section, index, field)): Path<(String, usize, String)>,
) -> Result<(StatusCode, Json<Added>), AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    let ops = portfolio.section_mut(kind);
    let item = ops.add_list_item(index, &field)?;
    Ok((
        StatusCode::CREATED,
        Json(Added {
            index: item,
            editor: ops.working_copy()?,
        }),
    ))
}

/// PATCH /api/v1/sections/:section/editor/records/:index/lists/:field/:item
pub async fn handle_update_list_item(
    State(state): State<AppState>,
    Path((section, index, field, item)): Path<(String, usize, String, usize)>,
    AppJson(req): AppJson<ItemUpdate>,
) -> Result<Json<EditorView>, AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    let ops = portfolio.section_mut(kind);
    ops.update_list_item(index, &field, item, req.value)?;
    Ok(Json(ops.working_copy()?))
}

/// DELETE /api/v1/sections/:section/editor/records/:index/lists/:field/:item
pub async fn handle_remove_list_item(
    State(state): State<AppState>,
    Path((section, index, field, item)): Path<(String, usize, String, usize)>,
) -> Result<Json<EditorView>, AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    let ops = portfolio.section_mut(kind);
    ops.remove_list_item(index, &field, item)?;
    Ok(Json(ops.working_copy()?))
}

/// POST /api/v1/sections/:section/editor/save
/// Returns the re-rendered section.
pub async fn handle_save(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<SectionView>, AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    Ok(Json(portfolio.section_mut(kind).save()?))
}

/// POST /api/v1/sections/:section/editor/cancel
pub async fn handle_cancel(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<StatusCode, AppError> {
    let kind = editable(&section)?;
    let mut portfolio = state.portfolio.lock().await;
    portfolio.section_mut(kind).cancel();
    Ok(StatusCode::NO_CONTENT)
}
