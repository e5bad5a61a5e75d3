//! Semantic version parsing and comparison.

pub mod error;
mod semver;

pub use error::SemVerError;
pub use semver::SemVer;
