//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
};
use shared::models::{
    CancelRequest, CancelResponse, CustomerReservationsResponse, DayQuery,
    DayReservationsResponse, ModifyRequest, ModifyResponse, ReserveRequest, ReserveResponse,
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Unwrap a JSON body, reporting malformed input as a 400
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|e| AppError::invalid_request(e.body_text()))
}

/// POST /api/reservations/reserve - 预订
pub async fn reserve(
    State(state): State<ServerState>,
    payload: Result<Json<ReserveRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ReserveResponse>)> {
    let req = body(payload)?;
    let reservation = state.reservations().reserve_table(req)?;
    Ok((
        StatusCode::CREATED,
        Json(ReserveResponse {
            message: "Reservation confirmed".to_string(),
            reservation,
        }),
    ))
}

/// GET /api/reservations/user/{email} - 按邮箱查询
pub async fn by_email(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<CustomerReservationsResponse>> {
    let reservations = state.reservations().reservations_by_email(&email)?;
    Ok(Json(CustomerReservationsResponse {
        message: "Reservations found".to_string(),
        reservations,
    }))
}

/// GET /api/reservations/all?date=YYYY-MM-DD - 按日期查询
pub async fn by_day(
    State(state): State<ServerState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> AppResult<Json<DayReservationsResponse>> {
    let Query(query) = query.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let reservations = state
        .reservations()
        .reservations_for_day(query.date.as_deref())?;
    Ok(Json(DayReservationsResponse {
        message: "Reservations retrieved successfully".to_string(),
        date: query.date.unwrap_or_default(),
        total_reservations: reservations.len(),
        reservations,
    }))
}

/// POST /api/reservations/cancel - 取消
pub async fn cancel(
    State(state): State<ServerState>,
    payload: Result<Json<CancelRequest>, JsonRejection>,
) -> AppResult<Json<CancelResponse>> {
    let req = body(payload)?;
    let cancelled_reservation = state.reservations().cancel_reservation(req)?;
    Ok(Json(CancelResponse {
        message: "Reservation cancelled successfully".to_string(),
        cancelled_reservation,
    }))
}

/// PUT /api/reservations/modify - 改期
pub async fn modify(
    State(state): State<ServerState>,
    payload: Result<Json<ModifyRequest>, JsonRejection>,
) -> AppResult<Json<ModifyResponse>> {
    let req = body(payload)?;
    let moved = state.reservations().modify_reservation_time(req)?;
    Ok(Json(ModifyResponse {
        message: "Reservation time modified successfully".to_string(),
        previous_reservation: moved.previous,
        new_reservation: moved.reservation,
    }))
}
