//! Application-wide constants for validation, messages and timing
//!
//! Centralizes magic numbers and user-facing strings so tests and the UI
//! agree on the exact wording.

/// Minimum number of characters an email must have before it is sent for analysis.
pub const MIN_EMAIL_CHARS: usize = 10;

/// Default base URL of the email analysis service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5001";

/// Path of the analysis endpoint, relative to the service base URL.
pub const ANALYZE_PATH: &str = "/api/analyze-email";

/// Path of the health endpoint, relative to the service base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// Environment variable that overrides `service.base_url` from the config file.
pub const SERVICE_URL_ENV: &str = "SPARKREPLY_SERVICE_URL";

// === User-facing messages ===

pub const APP_TITLE: &str = "Spark.ai Email Assistant";

pub const MSG_EMPTY_EMAIL: &str = "Please paste an email to analyze";

pub const MSG_EMAIL_TOO_SHORT: &str = "Email text is too short. Please provide more content.";

/// Shown when the service fails without a usable error message.
pub const MSG_ANALYSIS_FAILED: &str = "Failed to analyze email. Please try again.";

pub const MSG_REPLY_COPIED: &str = "Reply copied to clipboard!";

pub const MSG_ANALYZING: &str = "Analyzing email and generating professional replies...";

/// Shown after a reset while the abandoned request is still running
pub const MSG_DISCARDING: &str = "Discarding previous analysis...";

// === UI timing ===

/// How long a transient notice (e.g. copy acknowledgment) stays visible.
pub const NOTICE_TTL_SECS: u64 = 3;

/// Spinner animation frame duration in milliseconds.
pub const SPINNER_FRAME_MS: u128 = 80;

/// Input poll timeout while a request is in flight (keeps the spinner moving).
pub const POLL_BUSY_MS: u64 = 50;

/// Input poll timeout when idle.
pub const POLL_IDLE_MS: u64 = 150;

/// Minimum height of the email input pane in lines (including borders).
pub const EMAIL_PANE_MIN_HEIGHT: u16 = 6;
