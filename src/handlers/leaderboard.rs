// src/handlers/leaderboard.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::{
    db::Repository, engine::compute_leaderboard, error::AppError,
    models::leaderboard::LeaderboardResponse, utils::jwt::Claims,
};

/// Ranks every user with at least one test by average percentage.
///
/// Recomputed from all attempts and profiles on every call; nothing is cached.
pub async fn get_leaderboard(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let tests = repo.list_test_records().await?;
    let profiles = repo.list_profiles().await?;

    let board = compute_leaderboard(&tests, &profiles, user_id);

    Ok(Json(LeaderboardResponse::from(board)))
}
