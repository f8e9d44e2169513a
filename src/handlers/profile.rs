use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    db::Repository, error::AppError, models::profile::UpdateProfileRequest, utils::jwt::Claims,
};

/// Sets the name the current user is shown under on the leaderboard.
pub async fn update_profile(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Length rules apply to what gets stored, so a blank name is rejected.
    let req = UpdateProfileRequest {
        display_name: req.display_name.trim().to_owned(),
    };
    req.validate()?;
    let user_id = claims.user_id()?;

    repo.upsert_profile(user_id, &req.display_name).await?;

    Ok(StatusCode::NO_CONTENT)
}
