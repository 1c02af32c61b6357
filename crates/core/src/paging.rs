//! Pagination clamps shared by listing endpoints.

/// Default number of rows returned by a listing endpoint.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of rows a caller may request per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit into `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(clamp_limit(None, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 20);
    }

    #[test]
    fn limit_is_capped_at_max() {
        assert_eq!(clamp_limit(Some(5_000), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 100);
    }

    #[test]
    fn limit_floor_is_one() {
        assert_eq!(clamp_limit(Some(0), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
        assert_eq!(clamp_limit(Some(-3), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
    }

    #[test]
    fn offset_never_negative() {
        assert_eq!(clamp_offset(Some(-1)), 0);
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
    }
}
