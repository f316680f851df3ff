pub mod api;
pub mod config;
pub mod models;
pub mod service;
pub mod store;

pub use config::AppConfig;
pub use service::ReceiptService;
pub use store::ReceiptStore;
