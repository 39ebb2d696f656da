pub mod query_helpers;
pub mod record_helpers;
pub mod thing_helpers;
