use serde::{Deserialize, Serialize};

/// Success envelope for mutation endpoints:
/// `{"status":"success","message":"..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Current server instant in the representations the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeResponse {
    /// RFC 3339 instant in UTC.
    pub iso: String,
    /// Local wall-clock time, human formatted.
    pub local: String,
    /// Time-zone name the process resolved, `"UTC"` when none is set.
    pub timezone: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Local offset from UTC in minutes, east-positive.
    pub offset: i32,
}
