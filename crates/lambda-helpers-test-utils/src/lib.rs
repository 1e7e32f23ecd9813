//! Test helpers shared across lambda-helpers crates.

pub mod config;
pub mod fixture;

pub use config::{minimal_config, sample_config};
pub use fixture::ConfigFixture;
