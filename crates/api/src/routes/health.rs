//! `GET /health`: whether the registrar can serve its pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use registrar_db::RecordCounts;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the schema is migrated and every table answers, else `unavailable`.
    pub status: &'static str,
    pub version: &'static str,
    /// Newest applied migration, `null` when the database is unreachable.
    pub schema_version: Option<i64>,
    pub records: Option<RecordCounts>,
}

async fn report(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let version = env!("CARGO_PKG_VERSION");

    let snapshot = async {
        let schema_version = registrar_db::schema_version(&state.pool).await?;
        let records = registrar_db::record_counts(&state.pool).await?;
        Ok::<_, sqlx::Error>((schema_version, records))
    };

    match snapshot.await {
        Ok((schema_version, records)) => (
            StatusCode::OK,
            Json(HealthReport {
                status: "ok",
                version,
                schema_version,
                records: Some(records),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Registrar database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport {
                    status: "unavailable",
                    version,
                    schema_version: None,
                    records: None,
                }),
            )
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
