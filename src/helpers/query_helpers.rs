use serde::Deserialize;

pub const MAX_LIMIT: u32 = 100;

/// Raw `limit`/`offset` query parameters. Kept as strings so that garbage
/// falls back to the route default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageQuery {
    pub fn limit_or(&self, default: u32) -> u32 {
        coerce_limit(self.limit.as_deref(), default)
    }

    pub fn offset(&self) -> u32 {
        self.offset
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|offset| *offset > 0)
            .map(|offset| offset.min(u32::MAX as i64) as u32)
            .unwrap_or(0)
    }
}

/// Missing, unparsable, zero or negative values use `default`.
pub fn coerce_limit(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|limit| *limit > 0)
        .map(|limit| limit.min(MAX_LIMIT as i64) as u32)
        .unwrap_or(default)
}
