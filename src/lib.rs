//! Resume builder library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod profile;
pub mod output;

pub use error::{Result, ResumeBuilderError};
pub use config::Config;
