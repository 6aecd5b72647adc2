//! Bioskop API Handlers
//!
//! Each handler validates its input, issues one statement through the
//! repository and maps the outcome to a JSON response.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use http::StatusCode;
use shared::error::{AppError, AppResult};
use shared::models::{Bioskop, BioskopDeleted, BioskopInput, BioskopUpdated};

use crate::state::AppState;

const RESOURCE: &str = "bioskop";

/// Path ids that are not integers cannot match any row.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::not_found(RESOURCE))
}

/// Unwrap the JSON body and apply trimming/non-empty rules.
fn parse_input(payload: Result<Json<BioskopInput>, JsonRejection>) -> AppResult<BioskopInput> {
    let Json(input) = payload.map_err(|rejection| AppError::invalid_body(rejection.body_text()))?;
    input.normalized()
}

/// POST /bioskop - create a cinema
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<BioskopInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Bioskop>)> {
    let input = parse_input(payload)?;
    let created = state
        .repo
        .create(&input)
        .await
        .map_err(|e| state.internal(e))?;

    tracing::debug!(id = created.id, "Bioskop created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /bioskop - list all cinemas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Bioskop>>> {
    let rows = state
        .repo
        .find_all()
        .await
        .map_err(|e| state.internal(e))?;
    Ok(Json(rows))
}

/// GET /bioskop/{id} - get one cinema
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Bioskop>> {
    let id = parse_id(&id)?;
    let row = state
        .repo
        .find_by_id(id)
        .await
        .map_err(|e| state.internal(e))?
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(row))
}

/// PUT /bioskop/{id} - overwrite a cinema
///
/// The confirmation echoes the submitted values without re-reading storage.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BioskopInput>, JsonRejection>,
) -> AppResult<Json<BioskopUpdated>> {
    let input = parse_input(payload)?;
    let id = parse_id(&id)?;

    let found = state
        .repo
        .update(id, &input)
        .await
        .map_err(|e| state.internal(e))?;
    if !found {
        return Err(AppError::not_found(RESOURCE));
    }

    Ok(Json(BioskopUpdated::new(Bioskop::from_input(id, input))))
}

/// DELETE /bioskop/{id} - remove a cinema
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BioskopDeleted>> {
    let id = parse_id(&id)?;
    let removed = state
        .repo
        .delete(id)
        .await
        .map_err(|e| state.internal(e))?;
    if !removed {
        return Err(AppError::not_found(RESOURCE));
    }

    Ok(Json(BioskopDeleted::new(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert_eq!(parse_id("abc").unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(
            parse_id("99999999999999999999").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
