/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Custom epoch: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;

/// Generate a Snowflake-style i64 for use as reservation ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
///
/// IDs created in later milliseconds always compare greater, so sorting by id
/// approximates creation order. Callers that need strict uniqueness check
/// the result against existing ids.
pub fn snowflake_id() -> i64 {
    snowflake_id_at(now_millis())
}

/// Same as [`snowflake_id`] for an explicit creation time.
pub fn snowflake_id_at(millis: i64) -> i64 {
    use rand::Rng;
    let ts = (millis - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_fits_js_safe_integer() {
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id < (1_i64 << 53));
    }

    #[test]
    fn test_snowflake_orders_by_time() {
        let earlier = snowflake_id_at(EPOCH_MS + 1_000);
        let later = snowflake_id_at(EPOCH_MS + 2_000);
        assert!(later > earlier);
    }
}
