//! Configuration and domain models shared across the service

pub mod config;
pub mod models;

pub use config::AppConfig;
pub use models::{IncomingLead, Lead, OutboundLead, ProfileInfo};
