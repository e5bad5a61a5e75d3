//! TUID (Torugo Unique Identifier) generation and validation.
//!
//! A TUID is a structured identifier in one of three fixed lengths (20, 26 or
//! 36 characters): hyphen-joined random alphanumeric segments, a 2-character
//! format tag (`TS`/`TM`/`TL`), and a trailing CDT time segment zero-padded
//! to 10 characters. The embedded CDT makes every identifier carry its own
//! creation instant.

pub mod error;
mod generator;
mod tuid;

pub use error::TuidError;
pub use generator::TuidGenerator;
pub use tuid::{Tuid, Variant};
