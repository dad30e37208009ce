use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "heartstar_config.yaml";
pub const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(500);
pub const MAX_COMPUTER_MOVE_DELAY: Duration = Duration::from_secs(5);
