//! datalabel command-line front end
//!
//! Loads a serialized dataset file and runs labeling or dataset questions
//! through the SDK.

pub mod config;
pub mod loader;
pub mod output;
