//! Resume checker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeCheckerError};
pub use processing::analyzer::ResumeAnalyzer;
pub use processing::faculty::Faculty;
pub use processing::issue::{Category, Issue, IssueSummary, Severity};
pub use processing::report::AnalysisResult;
