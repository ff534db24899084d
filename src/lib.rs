// Design Patterns Catalog
// Classic object-oriented patterns expressed with Rust traits and ownership.

//! # Design Patterns
//!
//! Runnable demonstrations of:
//!
//! ## Structural Patterns
//! - Adapter: format dispatch onto incompatible players ([`adapter`])
//! - Decorator: condiment chains around a base coffee ([`decorator`])
//! - Composite: files and folders as one tree ([`composite`])
//! - Proxy: lazily loaded images ([`proxy`])
//!
//! ## Creational Patterns
//! - Builder: fluent user construction ([`builder`])
//! - Prototype: documents copied through `Clone` ([`prototype`])
//!
//! ## Behavioral Patterns
//! - Observer: news agency and subscribers ([`observer`])
//! - Strategy: interchangeable payment methods ([`strategy`])
//! - Template Method: a fixed beverage recipe ([`template_method`])
//!
//! Every demo writes through a [`Console`], so tests can read back exactly
//! what would have been printed.
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin adapter_demo
//! cargo run --bin patterns -- decorator observer
//! ```

pub mod adapter;
pub mod builder;
pub mod catalog;
pub mod composite;
pub mod config;
pub mod console;
pub mod decorator;
pub mod error;
pub mod observer;
pub mod prototype;
pub mod proxy;
pub mod runner;
pub mod strategy;
pub mod telemetry;
pub mod template_method;

pub use config::Settings;
pub use console::Console;
pub use error::{PatternError, Result};
