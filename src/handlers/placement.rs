// src/handlers/placement.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::{
    db::Repository,
    engine::predict,
    error::AppError,
    models::placement::{ActivitySummary, PlacementResponse, PlacementStats},
    utils::jwt::Claims,
};

/// Predicts the current user's placement tier from their activity.
pub async fn get_placement(
    State(repo): State<Arc<dyn Repository>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let tests: Vec<_> = repo
        .list_user_tests(user_id)
        .await?
        .iter()
        .map(|t| t.record())
        .collect();
    let progress: Vec<i32> = repo
        .list_user_courses(user_id)
        .await?
        .iter()
        .map(|c| c.progress)
        .collect();
    let notes_count = repo.count_notes(user_id).await?;

    let summary = ActivitySummary::from_activity(&tests, &progress);
    let prediction = predict(&summary);

    tracing::info!(
        user_id,
        tier = prediction.tier.label(),
        score = prediction.performance_score,
        "Placement predicted"
    );

    Ok(Json(PlacementResponse {
        stats: PlacementStats {
            tests_completed: summary.tests_completed,
            average_score: summary.average_score_percent.round() as i64,
            courses_completed: summary.courses_completed,
            notes_count,
        },
        prediction,
    }))
}
