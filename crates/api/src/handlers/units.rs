//! Handlers for unit-of-measure administration.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tally_db::models::unit::CreateUnit;
use tally_db::repositories::UnitRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /units — list the tenant's units of measure.
pub async fn list_units(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let units = UnitRepo::list_for_org(&state.pool, caller.org_id).await?;
    Ok(Json(DataResponse { data: units }))
}

/// POST /units — create a unit (admin only).
pub async fn create_unit(
    State(state): State<AppState>,
    RequireAdmin(caller): RequireAdmin,
    Json(input): Json<CreateUnit>,
) -> AppResult<impl IntoResponse> {
    if input.code.trim().is_empty() || input.label.trim().is_empty() {
        return Err(AppError::BadRequest(
            "code and label must not be empty".into(),
        ));
    }

    let unit = UnitRepo::create(&state.pool, caller.org_id, &input).await?;

    tracing::info!(
        unit_id = unit.id,
        org_id = caller.org_id,
        user_id = caller.user_id,
        "Unit created",
    );
    Ok(Json(DataResponse { data: unit }))
}
