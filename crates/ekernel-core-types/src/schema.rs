//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between log producers and the
//! test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Input identifiers
pub const FIELD_PATH: &str = "path";

// Collection sizes
pub const FIELD_OPTION_COUNT: &str = "option_count";
pub const FIELD_ADDED_LEN: &str = "added_len";
pub const FIELD_REMOVED_LEN: &str = "removed_len";
pub const FIELD_CHANGED_LEN: &str = "changed_len";
pub const FIELD_UNCHANGED_COUNT: &str = "unchanged_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
