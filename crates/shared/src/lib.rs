//! Shared errors and configuration for the denomination service.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use crate::config::{
    AppConfig, CorsConfig, DenominationConfig, LoggingConfig, RemainderPolicy, ServerConfig,
};
pub use crate::error::AppError;
