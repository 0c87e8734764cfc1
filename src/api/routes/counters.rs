use axum::extract::{RawQuery, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::lookup::{load_counters, LookupError};
use crate::messages::{COUNTER_SOURCE_UNAVAILABLE, HERO_NOT_FOUND, MISSING_HERO_NAME};
use crate::models::CounterResult;

pub const HERO_NAME_PARAM: &str = "heroName";

/// First value of `key` in a raw query string. Later repeats are ignored.
pub fn first_query_value(query: Option<&str>, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// `GET /api/counters?heroName=<name>`
///
/// Responds 400 for a blank name, 500 when the dataset cannot be loaded,
/// 404 for an unknown hero and otherwise 200 with a possibly empty list.
pub async fn get_counters(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<CounterResult>>, ApiError> {
    let hero_name = first_query_value(query.as_deref(), HERO_NAME_PARAM);
    let target = hero_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest(MISSING_HERO_NAME.to_string()))?;

    match load_counters(&state.store, target).await {
        Ok(counters) => Ok(Json(counters)),
        Err(LookupError::TargetNotFound(name)) => {
            tracing::info!("No hero named {:?}", name);
            Err(ApiError::NotFound(HERO_NOT_FOUND.to_string()))
        }
        Err(LookupError::DataUnavailable(e)) => {
            tracing::error!("Error loading hero data for counters: {}", e);
            Err(ApiError::Internal(COUNTER_SOURCE_UNAVAILABLE.to_string()))
        }
    }
}
