use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::lookup::load_names;
use crate::messages::NAME_SOURCE_UNAVAILABLE;
use crate::models::NameEntry;

/// `GET /api/heronames`
pub async fn list_hero_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<NameEntry>>, ApiError> {
    let names = load_names(&state.store).await.map_err(|e| {
        tracing::error!("Error loading hero data for names: {}", e);
        ApiError::Internal(NAME_SOURCE_UNAVAILABLE.to_string())
    })?;

    Ok(Json(names))
}
