// src/handlers/course.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    db::Repository, error::AppError, models::course::UpdateProgressRequest, utils::jwt::Claims,
};

/// Lists the current user's enrollments with their progress.
pub async fn list_my_courses(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    Ok(Json(repo.list_user_courses(user_id).await?))
}

/// Enrolls the current user in a course at 0% progress.
/// Returns 409 Conflict when already enrolled.
pub async fn enroll(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let enrollment = repo.enroll_course(user_id, &course_id).await?;
    tracing::info!(user_id, course_id = %course_id, "Enrolled in course");

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Sets progress (0..=100) on an enrolled course.
/// A course counts as completed for placement once progress reaches 80.
pub async fn update_progress(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
    Path(course_id): Path<String>,
    Json(req): Json<UpdateProgressRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let user_id = claims.user_id()?;

    let enrollment = repo
        .update_course_progress(user_id, &course_id, req.progress)
        .await?;

    Ok(Json(enrollment))
}
