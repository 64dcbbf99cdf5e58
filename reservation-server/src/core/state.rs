use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::reservations::{InMemoryStore, ReservationManager, SystemClock};

/// 服务器状态 - 持有所有服务的共享引用
///
/// Cloned into every handler; clones share the same manager.
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | reservations | Arc<ReservationManager> | 预订管理 |
/// | started_at | Instant | 启动时间 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub reservations: Arc<ReservationManager>,
    pub started_at: Instant,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// Seeds an in-memory store with the configured table pool.
    pub fn initialize(config: &Config) -> Self {
        let manager = ReservationManager::new(
            InMemoryStore::new(config.tables.clone()),
            Arc::new(SystemClock),
            config.timezone,
        );
        tracing::info!(
            tables = config.tables.len(),
            timezone = %config.timezone,
            "Reservation store initialized"
        );
        Self::with_manager(config.clone(), manager)
    }

    /// Build state around an existing manager
    pub fn with_manager(config: Config, manager: ReservationManager) -> Self {
        Self {
            config,
            reservations: Arc::new(manager),
            started_at: Instant::now(),
        }
    }

    pub fn reservations(&self) -> &ReservationManager {
        &self.reservations
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
