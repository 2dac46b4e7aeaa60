/// Seconds field appended to times that arrive without one.
pub const DEFAULT_SECONDS_SUFFIX: &str = ":09";

pub const DEFAULT_LOGS_DIR: &str = "./logs";

pub const DEFAULT_LOG_FILTER: &str = "info,attendance_core=debug";

pub const LOG_FILE_NAME: &str = "attendance.log";
