//! Rendering and export of generated application packages

pub mod formatter;
pub mod portfolio;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use portfolio::PortfolioBundle;
