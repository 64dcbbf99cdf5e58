use chrono_tz::Tz;
use shared::error::{AppError, AppResult};
use shared::models::DiningTable;

use crate::utils::time::parse_timezone;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT / PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | BUSINESS_TIMEZONE | UTC | 业务时区 (IANA) |
/// | TABLE_POOL | 2,4,4,6,8 | 桌台容量，按分配顺序 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// Unparseable values are logged and replaced by the default.
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 BUSINESS_TIMEZONE=Europe/Madrid TABLE_POOL=2,2,4,10 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// Timezone for naive client times and day queries
    pub timezone: Tz,
    /// 桌台池 (ids 1..)
    pub tables: Vec<DiningTable>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            timezone: Tz::UTC,
            tables: DiningTable::default_pool(),
            request_timeout_ms: 30000,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_port = var("HTTP_PORT")
            .or_else(|| var("PORT"))
            .map(|p| {
                p.trim().parse().unwrap_or_else(|e| {
                    tracing::warn!("Invalid HTTP port '{}': {}, using {}", p, e, defaults.http_port);
                    defaults.http_port
                })
            })
            .unwrap_or(defaults.http_port);

        let timezone = var("BUSINESS_TIMEZONE")
            .map(|tz| parse_timezone(&tz))
            .unwrap_or(defaults.timezone);

        let tables = var("TABLE_POOL")
            .map(|pool| {
                parse_table_pool(&pool).unwrap_or_else(|e| {
                    tracing::warn!("Invalid TABLE_POOL '{}': {}, using default pool", pool, e);
                    DiningTable::default_pool()
                })
            })
            .unwrap_or(defaults.tables);

        let request_timeout_ms = var("REQUEST_TIMEOUT_MS")
            .and_then(|ms| ms.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.request_timeout_ms);

        Self {
            http_port,
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            timezone,
            tables,
            request_timeout_ms,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, timezone: Tz, tables: Vec<DiningTable>) -> Self {
        Self {
            http_port,
            timezone,
            tables,
            ..Self::default()
        }
    }

    /// Table capacities in pool order, e.g. `2,4,4,6,8`
    pub fn table_pool_summary(&self) -> String {
        self.tables
            .iter()
            .map(|t| t.capacity.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parse a comma-separated capacity list such as `2,4,4,6,8`
pub fn parse_table_pool(value: &str) -> AppResult<Vec<DiningTable>> {
    let capacities = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| AppError::config(format!("Invalid table capacity '{}'", part.trim())))
        })
        .collect::<AppResult<Vec<i32>>>()?;
    if capacities.is_empty() {
        return Err(AppError::config("Table pool must not be empty"));
    }
    DiningTable::pool_from_capacities(&capacities)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.timezone, Tz::UTC);
        assert_eq!(config.tables, DiningTable::default_pool());
        assert_eq!(config.request_timeout_ms, 30000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("HTTP_PORT", "8080"),
            ("ENVIRONMENT", "production"),
            ("BUSINESS_TIMEZONE", "Europe/Madrid"),
            ("TABLE_POOL", "2, 10"),
            ("REQUEST_TIMEOUT_MS", "5000"),
        ]));
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.environment, "production");
        assert_eq!(config.timezone, chrono_tz::Europe::Madrid);
        assert_eq!(config.tables.len(), 2);
        assert_eq!(config.tables[1].id, 2);
        assert_eq!(config.tables[1].capacity, 10);
        assert_eq!(config.request_timeout_ms, 5000);
    }

    #[test]
    fn test_port_fallback_variable() {
        let config = Config::from_lookup(lookup(&[("PORT", "4000")]));
        assert_eq!(config.http_port, 4000);

        let config = Config::from_lookup(lookup(&[("HTTP_PORT", "5000"), ("PORT", "4000")]));
        assert_eq!(config.http_port, 5000);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("HTTP_PORT", "eighty"),
            ("BUSINESS_TIMEZONE", "Nowhere/Land"),
            ("TABLE_POOL", "2,0,4"),
            ("REQUEST_TIMEOUT_MS", "0"),
        ]));
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.timezone, Tz::UTC);
        assert_eq!(config.tables, DiningTable::default_pool());
        assert_eq!(config.request_timeout_ms, 30000);
    }

    #[test]
    fn test_parse_table_pool() {
        let pool = parse_table_pool("4,2").unwrap();
        assert_eq!(pool[0].id, 1);
        assert_eq!(pool[0].capacity, 4);
        assert!(parse_table_pool("4,,2").is_err());
        assert!(parse_table_pool("four").is_err());
        assert_eq!(
            parse_table_pool(&Config::default().table_pool_summary()).unwrap(),
            DiningTable::default_pool()
        );
    }

    #[test]
    fn test_with_overrides() {
        let tables = parse_table_pool("6").unwrap();
        let config = Config::with_overrides(0, chrono_tz::Asia::Tokyo, tables.clone());
        assert_eq!(config.http_port, 0);
        assert_eq!(config.timezone, chrono_tz::Asia::Tokyo);
        assert_eq!(config.tables, tables);
    }
}
