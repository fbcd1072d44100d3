//! iptracker - IP address and domain geolocation lookup
//!
//! This library provides the core functionality for iptracker: input
//! validation, the geolocation API client, and the CLI/TUI front ends.
//!
//! # Features
//! - **cli**: One-shot command-line lookups (default)
//! - **tui**: Interactive terminal UI with map view (default)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `services`: Input validation and geolocation lookup
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Execution modes
//! - `system`: Logging and panic handling

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod system;
