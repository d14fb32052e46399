pub mod client;
pub mod config;

pub use client::{ContractorClient, SubmitReceipt};
pub use config::SubmitConfig;
