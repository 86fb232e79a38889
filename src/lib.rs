pub mod bridge;
pub mod config;
pub mod i18n;
pub mod menu;
pub mod session;
pub mod status;
pub mod telemetry;
pub mod terminal_restore;
