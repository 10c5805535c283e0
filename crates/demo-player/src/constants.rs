pub const MAX_LOG_LINES: usize = 1000;
pub const POLL_INTERVAL_MS: u64 = 50;
pub const PAGE_SCROLL: usize = 10;
pub const FILE_LIST_WIDTH_PERCENT: u16 = 30;
pub const OVERLAY_WIDTH_PERCENT: u16 = 80;
pub const OVERLAY_HEIGHT_PERCENT: u16 = 80;

pub mod defaults {
    pub const DOWNLOAD_DIR: &str = "rpc-demo-files";
    pub const LOG_DIR: &str = "logs";
    pub const SETTINGS_FILE: &str = "rpc-demo.json";
    pub const LOG_FILTER: &str = "demo_player=info,replay_core=info,demo_content=info";
}

pub mod env_keys {
    pub const SETTINGS: &str = "RPC_DEMO_SETTINGS";
    pub const DOWNLOAD_DIR: &str = "RPC_DEMO_DOWNLOAD_DIR";
    pub const OVERLAP: &str = "RPC_DEMO_OVERLAP";
    pub const SPEED: &str = "RPC_DEMO_SPEED";
    pub const SCRIPT: &str = "RPC_DEMO_SCRIPT";
    pub const LOG_DIR: &str = "RPC_DEMO_LOG_DIR";
}
