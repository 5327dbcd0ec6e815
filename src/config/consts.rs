// src/config/consts.rs

// Source
pub const DEFAULT_SOURCE: &str = "data/lots.csv";
pub const MAX_ROWS: usize = 1000; // ingestion safety cap

// Local store (logs + GUI preferences)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const GUI_CONFIG_FILE: &str = "gui.cfg";
pub const LOG_ENV: &str = "COMPLIANCE_HUB_LOG";

// Net
pub const USER_AGENT: &str = "compliance_hub/0.3";
pub const NET_TIMEOUT_SECS: u64 = 15;

// GUI
pub const APP_TITLE: &str = "Compliance Hub";
pub const BRAND: &str = "Canvas Organics";
pub const DEMO_ROWS: usize = 30;

// Type filter sentinel
pub const TYPE_ALL: &str = "all";
