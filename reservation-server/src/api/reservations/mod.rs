//! Reservation API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/reservations/reserve | POST | 预订 |
//! | /api/reservations/user/{email} | GET | 按邮箱查询 |
//! | /api/reservations/all?date= | GET | 按日期查询 |
//! | /api/reservations/cancel | POST | 取消 |
//! | /api/reservations/modify | PUT | 改期 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/reserve", post(handler::reserve))
        .route("/user/{email}", get(handler::by_email))
        .route("/all", get(handler::by_day))
        .route("/cancel", post(handler::cancel))
        .route("/modify", put(handler::modify))
}
