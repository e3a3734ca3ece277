use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::comparison::{compare, ComparisonResult};
use crate::config::Config;
use crate::i18n::Locale;
use crate::school::{validate_pair, SchoolInput, SchoolSlot, SlotFieldError};
use crate::store::session::SessionImportError;
use crate::store::{SchoolSession, SqliteStore};
use crate::transfer::ExportDocument;

#[derive(Clone)]
struct ApiState {
    config: Config,
    db_path: PathBuf,
    locale: Locale,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(error: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CompareRequest {
    #[serde(default)]
    school1: SchoolInput,
    #[serde(default)]
    school2: SchoolInput,
    locale: Option<String>,
}

#[derive(Debug, Serialize)]
struct FieldErrorView {
    #[serde(flatten)]
    error: SlotFieldError,
    message: String,
}

#[derive(Debug, Serialize)]
struct CompareResponse {
    ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ComparisonResult>,
    errors: Vec<FieldErrorView>,
}

#[derive(Debug, Serialize)]
struct SchoolsResponse {
    school1: SchoolInput,
    school2: SchoolInput,
    comparison: CompareResponse,
}

pub async fn run_server(config: Config, bind: SocketAddr) -> Result<()> {
    let state = ApiState {
        db_path: config.resolved_db_path(),
        locale: config.locale()?,
        config,
    };

    info!(
        "serving comparisons from {} in {}",
        state.db_path.display(),
        state.locale.native_name()
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/v1/config", get(show_config))
        .route("/v1/compare", post(compare_schools))
        .route("/v1/schools", get(list_schools).delete(reset_schools))
        .route("/v1/schools/:slot", put(store_school))
        .route("/v1/export", get(export_schools))
        .route("/v1/import", post(import_schools))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("REST API listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse { status: "ok" })
}

async fn show_config(State(state): State<ApiState>) -> Json<ApiResponse<Config>> {
    ok(state.config)
}

/// Stateless: compares the two schools in the body without touching the store.
async fn compare_schools(
    State(state): State<ApiState>,
    Json(request): Json<CompareRequest>,
) -> ApiResult<CompareResponse> {
    let locale = resolve_locale(&state, request.locale.as_deref())?;
    Ok(ok(build_comparison(&request.school1, &request.school2, locale)))
}

async fn list_schools(
    State(state): State<ApiState>,
    Query(query): Query<LocaleQuery>,
) -> ApiResult<SchoolsResponse> {
    let locale = resolve_locale(&state, query.locale.as_deref())?;
    let session = open_session(&state)?;
    Ok(ok(schools_view(&session, locale)))
}

async fn store_school(
    State(state): State<ApiState>,
    Path(slot): Path<String>,
    Json(input): Json<SchoolInput>,
) -> ApiResult<SchoolInput> {
    let slot = SchoolSlot::from_str(&slot).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let mut session = open_session(&state)?;
    session.replace(slot, input).map_err(ApiError::internal)?;
    Ok(ok(session.school(slot).clone()))
}

async fn reset_schools(State(state): State<ApiState>) -> ApiResult<SchoolsResponse> {
    let mut session = open_session(&state)?;
    session.reset().map_err(ApiError::internal)?;
    Ok(ok(schools_view(&session, state.locale)))
}

async fn export_schools(State(state): State<ApiState>) -> ApiResult<ExportDocument> {
    let session = open_session(&state)?;
    Ok(ok(session.export(Utc::now())))
}

async fn import_schools(
    State(state): State<ApiState>,
    Json(document): Json<Value>,
) -> ApiResult<SchoolsResponse> {
    let mut session = open_session(&state)?;
    session.import(&document).map_err(|err| match err {
        SessionImportError::Rejected(reason) => {
            warn!("rejected import: {reason}");
            ApiError::bad_request(reason.to_string())
        }
        SessionImportError::Storage(err) => ApiError::internal(format!("{err:#}")),
    })?;
    Ok(ok(schools_view(&session, state.locale)))
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}

fn open_session(state: &ApiState) -> std::result::Result<SchoolSession<SqliteStore>, ApiError> {
    let store = SqliteStore::open(&state.db_path).map_err(ApiError::internal)?;
    Ok(SchoolSession::open(store))
}

fn resolve_locale(state: &ApiState, raw: Option<&str>) -> std::result::Result<Locale, ApiError> {
    match raw {
        Some(code) => Locale::from_str(code).map_err(|e| ApiError::bad_request(e.to_string())),
        None => Ok(state.locale),
    }
}

fn build_comparison(
    school1: &SchoolInput,
    school2: &SchoolInput,
    locale: Locale,
) -> CompareResponse {
    let result = compare(school1, school2, locale);
    let errors = validate_pair(school1, school2)
        .into_iter()
        .map(|error| FieldErrorView {
            message: error.error.render(locale),
            error,
        })
        .collect();
    CompareResponse {
        ready: result.is_some(),
        result,
        errors,
    }
}

fn schools_view(session: &SchoolSession<SqliteStore>, locale: Locale) -> SchoolsResponse {
    let (school1, school2) = session.schools();
    SchoolsResponse {
        school1: school1.clone(),
        school2: school2.clone(),
        comparison: build_comparison(school1, school2, locale),
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::Json;
    use serde_json::json;
    use tempfile::TempDir;
    use tokio_test::block_on;

    use super::{
        compare_schools, export_schools, import_schools, list_schools, reset_schools,
        store_school, ApiState, CompareRequest, LocaleQuery,
    };
    use crate::config::Config;
    use crate::i18n::Locale;
    use crate::recommendation::Winner;
    use crate::school::SchoolInput;

    fn test_state() -> (TempDir, ApiState) {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = ApiState {
            config: Config::default(),
            db_path: dir.path().join("evaluator.db"),
            locale: Locale::En,
        };
        (dir, state)
    }

    fn school(name: &str, tuition: f64, salary: f64) -> SchoolInput {
        SchoolInput {
            tuition,
            post_grad_salary: salary,
            ..SchoolInput::named(name)
        }
    }

    #[test]
    fn compare_reports_not_ready_with_errors() {
        let (_dir, state) = test_state();
        let request = CompareRequest {
            school1: SchoolInput::named("Pine"),
            ..CompareRequest::default()
        };
        let Json(response) =
            block_on(compare_schools(State(state), Json(request))).expect("compare");
        assert!(!response.data.ready);
        assert!(response.data.result.is_none());
        assert_eq!(response.data.errors.len(), 1);
        assert_eq!(response.data.errors[0].message, "School name is required");
    }

    #[test]
    fn compare_uses_requested_locale() {
        let (_dir, state) = test_state();
        let request = CompareRequest {
            school1: SchoolInput::named("Pine"),
            school2: SchoolInput::named("Cedar"),
            locale: Some("xx".to_string()),
        };
        let err = block_on(compare_schools(State(state), Json(request))).expect_err("bad locale");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn stored_schools_are_compared() {
        let (_dir, state) = test_state();
        block_on(store_school(
            State(state.clone()),
            Path("school1".to_string()),
            Json(school("Pine", 10_000.0, 80_000.0)),
        ))
        .expect("store school1");
        block_on(store_school(
            State(state.clone()),
            Path("2".to_string()),
            Json(school("Cedar", 40_000.0, 50_000.0)),
        ))
        .expect("store school2");

        let Json(response) =
            block_on(list_schools(State(state), Query(LocaleQuery::default()))).expect("list");
        let result = response.data.comparison.result.expect("ready");
        assert_eq!(result.recommendation.better_financially, Winner::School1);
        assert_eq!(response.data.school2.name, "Cedar");
    }

    #[test]
    fn unknown_slot_is_bad_request() {
        let (_dir, state) = test_state();
        let err = block_on(store_school(
            State(state),
            Path("school3".to_string()),
            Json(SchoolInput::named("Nope")),
        ))
        .expect_err("unknown slot");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn export_import_and_reset_cycle() {
        let (_dir, state) = test_state();
        let document = json!({
            "version": "1.0",
            "school1": {"name": "Pine", "tuition": 12000},
            "school2": {"name": "Cedar"}
        });
        let Json(imported) =
            block_on(import_schools(State(state.clone()), Json(document))).expect("import");
        assert!(imported.data.comparison.ready);

        let Json(exported) = block_on(export_schools(State(state.clone()))).expect("export");
        assert_eq!(exported.data.version, "1.0");
        assert_eq!(exported.data.school1.tuition, 12_000.0);

        let Json(reset) = block_on(reset_schools(State(state))).expect("reset");
        assert_eq!(reset.data.school1, SchoolInput::default());
        assert!(!reset.data.comparison.ready);
    }

    #[test]
    fn rejected_import_is_bad_request() {
        let (_dir, state) = test_state();
        let err = block_on(import_schools(
            State(state),
            Json(json!({"school1": {"name": "Pine"}})),
        ))
        .expect_err("school2 missing");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("School 2"));
    }
}
