//! ethex - Terminal block explorer for EVM chains
//!
//! Talks plain JSON-RPC to a single endpoint and renders blocks, transactions
//! and addresses in the terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod explorer;
pub mod format;
pub mod rpc;
pub mod search;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use app::{App, Focus, Panel};
pub use config::{Config, Theme};
pub use error::ExplorerError;
pub use explorer::Explorer;
pub use search::SearchQuery;
