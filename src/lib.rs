//! Resume radar library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;
pub mod suggest;
pub mod taxonomy;

pub use config::Config;
pub use error::{ResumeRadarError, Result};
