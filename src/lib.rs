pub mod engine;
pub mod log;
pub mod session;
pub mod storage;
pub mod tui;
