pub mod config_io;
pub mod export;
pub mod lock;
pub mod state;
pub mod store;
