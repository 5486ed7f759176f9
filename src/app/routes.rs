use crate::app::state::AppState;
use crate::core::RegistrationResult;
use crate::utils::error::CommuteError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub const GREETING: &str = "This is commute logger app!\n";

pub async fn greeting() -> &'static str {
    GREETING
}

pub async fn register(
    State(state): State<AppState>,
) -> Result<Json<RegistrationResult>, CommuteError> {
    let result = state.registration.register().await?;
    Ok(Json(result))
}

impl IntoResponse for CommuteError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
