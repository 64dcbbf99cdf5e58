//! Reservation Server - 餐厅订座服务
//!
//! # 架构概述
//!
//! A REST service that books tables from a fixed pool. Each reservation
//! holds its table for two hours; tables are assigned first-fit in pool
//! order.
//!
//! # 模块结构
//!
//! ```text
//! reservation-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── reservations/  # 预订规则、桌台分配、存储
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装和中间件栈
//! ├── middleware/    # 请求日志、panic 处理
//! └── utils/         # 日志、时间、校验
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod reservations;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use crate::reservations::{ReservationError, ReservationManager};
pub use crate::routes::build_app;
pub use crate::utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_from_env, init_logger_with_file};

/// 设置环境: 加载 .env，初始化日志
pub fn setup_environment() {
    match dotenvy::dotenv() {
        Ok(path) => {
            init_logger_from_env();
            tracing::info!("Loaded environment from {}", path.display());
        }
        Err(_) => init_logger_from_env(),
    }
}

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ________  ______   _____
  / /_/ / _ \/ ___/ _ \/ ___/ | / / _ \
 / _, _/  __(__  )  __/ /   | |/ /  __/
/_/ |_|\___/____/\___/_/    |___/\___/
    "#
    );
}
