//! Resume radar library

pub mod ai;
pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod history;

pub use config::Config;
pub use engine::Analyzer;
pub use error::{Error, Result};
