//! Configuration module for TCG Catalog
//!
//! This module holds the storefront table, HTTP identity, crawl limits and the
//! output location. `Config::default()` is the built-in configuration; an
//! optional TOML file overrides any part of it.
//!
//! # Example
//!
//! ```no_run
//! use tcg_catalog::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("catalog.toml")).unwrap();
//! println!("Writing catalog to {}", config.output.catalog_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BoredGameConfig, Config, CrawlConfig, HttpConfig, OutputConfig, PokeVoltConfig,
    PokeVoltSection, TcgRepublicConfig, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
