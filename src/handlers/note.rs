// src/handlers/note.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{db::Repository, error::AppError, models::note::NoteRequest, utils::jwt::Claims};

/// List the current user's notes, newest first.
pub async fn list_my_notes(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    Ok(Json(repo.list_notes(user_id).await?))
}

pub async fn create_note(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<NoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let user_id = claims.user_id()?;

    let note = repo.create_note(user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// Replace title and content. Notes owned by other users are reported as 404.
pub async fn update_note(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
    Path(note_id): Path<i64>,
    Json(req): Json<NoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let user_id = claims.user_id()?;

    Ok(Json(repo.update_note(user_id, note_id, &req).await?))
}

pub async fn delete_note(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
    Path(note_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    repo.delete_note(user_id, note_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
