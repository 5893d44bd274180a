//! Mes Dépenses - local personal expense tracker
//!
//! This library provides the core of the Mes Dépenses expense tracker:
//! recording expenses, filtering and sorting them into views, comparing
//! spending against per-category budgets, and exporting to CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, budgets, categories, money)
//! - `storage`: Slot-based persistence layer
//! - `filter`: View selection, filtering and sorting
//! - `reports`: Aggregations (totals, monthly trend, budget progress)
//! - `services`: Business logic layer
//! - `export`: CSV export and full JSON/YAML backups
//! - `audit`: Audit logging system
//! - `display`: Terminal table formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use depenses::config::{DepensesPaths, Settings};
//! use depenses::storage::Storage;
//!
//! let paths = DepensesPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open_files(&paths, chrono::Local::now().date_naive())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod filter;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{DepensesError, DepensesResult};
