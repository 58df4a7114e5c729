use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{
                error::JobError,
                mutators::JobMutator,
                selectors::JobSelector,
                spec::{JobFilter, JobUpdate, NewJob},
            },
            auth::Claims,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

fn invalid(detail: String) -> StandardError {
    StandardError::new("ERR-JOB-003")
        .interpolate_err(detail)
        .code(StatusCode::BAD_REQUEST)
}

/// Unwraps a JSON body, turning malformed payloads and rule violations alike
/// into a 400.
fn validated<T: Validate>(payload: core::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    let Json(input) = payload.map_err(|e| invalid(e.body_text()))?;
    input.validate().map_err(|e| invalid(e.to_string()))?;
    Ok(input)
}

pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    payload: core::result::Result<Json<NewJob>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let input = validated(payload)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx)
        .create(&input)
        .await
        .map_err(JobError::into_standard)?;
    tx.commit().await?;
    tracing::info!("{} created job {}", &claims.username, job.id);
    Ok((StatusCode::CREATED, Json(json!({ "job": job }))))
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let jobs = JobSelector::new(&mut tx)
        .find_all(&filter)
        .await
        .map_err(JobError::into_standard)?;
    Ok(Json(json!({ "jobs": jobs })))
}

pub async fn retrieve(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobSelector::new(&mut tx)
        .get(id)
        .await
        .map_err(JobError::into_standard)?;
    Ok(Json(json!({ "job": job })))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Path(id): Path<i32>,
    payload: core::result::Result<Json<JobUpdate>, JsonRejection>,
) -> Result<Json<Value>> {
    let changes = validated(payload)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx)
        .update(id, &changes)
        .await
        .map_err(JobError::into_standard)?;
    tx.commit().await?;
    tracing::info!("{} updated job {}", &claims.username, id);
    Ok(Json(json!({ "job": job })))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(claims): Extension<Arc<Claims>>,
    Path(id): Path<i32>,
) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    JobMutator::new(&mut tx)
        .delete(id)
        .await
        .map_err(JobError::into_standard)?;
    tx.commit().await?;
    tracing::info!("{} deleted job {}", &claims.username, id);
    Ok(Json(json!({ "message": "deleted" })))
}
