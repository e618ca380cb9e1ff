//! Resume analysis engine

pub mod analyzer;
pub mod document;
pub mod faculty;
pub mod features;
pub mod issue;
pub mod keyword_matcher;
pub mod lexicon;
pub mod report;
pub mod rules;
pub mod scoring;
