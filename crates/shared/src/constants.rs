pub const APP_NAME: &str = "Drift";

// Limits
pub const MAX_MESSAGE_LENGTH: usize = 4000;
pub const MAX_ROOM_NAME_LENGTH: usize = 100;
pub const MAX_SENDER_LENGTH: usize = 64;
pub const MAX_ATTACHMENT_NAME_LENGTH: usize = 255;

// Retention
pub const DEFAULT_RETENTION_WINDOW_SECS: u64 = 3_600;
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;
