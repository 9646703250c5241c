//! REST API endpoints for the weather service.
//!
//! Handlers validate input, call the query engine and the analysis
//! functions, and translate their results into JSON. Neither the engine
//! nor the analysis code knows about HTTP.
//!
//! ## Error Handling
//!
//! All endpoints return structured JSON errors via [`AppError`]. Invalid
//! input returns 400, an empty analysis returns 404, failed logins return
//! 401. A store that cannot be locked returns 503 so callers know a retry
//! may succeed; other store errors return 500.
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use weather_service::api;
//!
//! let app = api::router().with_state(state);
//! ```

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{info, warn};

use weather_analysis::analyze;
use weather_store::QueryMode;
use weather_types::{AnalysisReport, NewObservation, Observation};

use crate::state::AppState;
use crate::validate::{CityError, credentials_match, validate_city};

/// Create the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/weather/current", get(get_current_weather))
        .route("/api/weather/history/{city}", get(get_city_history))
        .route("/api/weather/analysis/{city}", get(get_weather_analysis))
        .route("/api/weather/admin/login", post(admin_login))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: OffsetDateTime::now_utc(),
    })
}

/// Successful response wrapping a payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Query parameters for current weather.
#[derive(Debug, Deserialize, Default)]
pub struct CurrentWeatherQuery {
    pub city: Option<String>,
}

/// A freshly produced observation and the id it was stored under.
#[derive(Debug, Serialize)]
pub struct CurrentWeather {
    /// Absent if the engine did not record the observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub observation: NewObservation,
}

/// Produce, record and return the current weather for a city.
///
/// # Errors
///
/// - Returns [`AppError::BadRequest`] if `city` is missing or malformed
/// - Returns [`AppError::Store`] if the engine fails
async fn get_current_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CurrentWeatherQuery>,
) -> Result<Json<DataResponse<CurrentWeather>>, AppError> {
    let city = validate_city(params.city.as_deref())?;

    let observation = state.source.observe(city);
    let mode = state.query_mode().await;
    let id = state.engine.insert(&observation, mode)?;

    match id {
        Some(id) => info!("Weather data saved for {} as {}", city, id),
        None => warn!("Weather data for {} was not recorded", city),
    }

    Ok(Json(DataResponse::new(CurrentWeather { id, observation })))
}

/// Query parameters for history.
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    /// Inclusive lower bound on `date_recorded`, compared as text.
    pub from: Option<String>,
}

/// Recorded observations for a city.
///
/// Uses the configured [`QueryMode`]. In raw mode `from` is placed into the
/// instruction text unmodified.
async fn get_city_history(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<DataResponse<Vec<Observation>>>, AppError> {
    let city = validate_city(Some(&city))?;

    let mode = state.query_mode().await;
    let rows = state.engine.history(city, params.from.as_deref(), mode)?;

    Ok(Json(DataResponse::new(rows)))
}

/// Analysis response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub city: String,
    pub data_points: usize,
    pub analysis: AnalysisReport,
}

/// Statistics and summary for a city.
///
/// Always selects with bound parameters.
///
/// # Errors
///
/// - Returns [`AppError::BadRequest`] if `city` is malformed
/// - Returns [`AppError::NotFound`] if no observations match
/// - Returns [`AppError::Store`] if the engine fails
async fn get_weather_analysis(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let city = validate_city(Some(&city))?;

    let rows = state.engine.history(city, None, QueryMode::Parameterized)?;
    if rows.is_empty() {
        return Err(AppError::NotFound("No data found for this city".to_string()));
    }

    Ok(Json(AnalysisResponse {
        success: true,
        city: city.to_string(),
        data_points: rows.len(),
        analysis: analyze(&rows),
    }))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Check the static admin credential.
async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let config = state.config.read().await;
    let security = &config.security;

    // Evaluate both so a wrong username costs the same as a wrong password.
    let username_ok = credentials_match(&security.admin_username, &request.username);
    let password_ok = credentials_match(&security.admin_password, &request.password);

    if username_ok && password_ok {
        info!("Admin login succeeded");
        Ok(Json(LoginResponse {
            success: true,
            token: security.token.clone(),
        }))
    } else {
        warn!("Admin login failed");
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Store(weather_store::Error),
}

impl From<weather_store::Error> for AppError {
    fn from(e: weather_store::Error) -> Self {
        AppError::Store(e)
    }
}

impl From<CityError> for AppError {
    fn from(e: CityError) -> Self {
        warn!("Rejected city parameter: {}", e);
        AppError::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Store(e) if e.is_retryable() => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
            AppError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = if status == StatusCode::UNAUTHORIZED {
            serde_json::json!({
                "success": false,
                "error": message,
            })
        } else {
            serde_json::json!({
                "error": message,
            })
        };

        (status, Json(body)).into_response()
    }
}
