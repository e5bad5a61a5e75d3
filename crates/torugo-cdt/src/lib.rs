//! Compressed Date-Time (CDT) codec.
//!
//! A CDT packs a Unix instant with sub-second precision into a short
//! alphanumeric string: a base-36 encoding of the integer seconds followed by
//! a fixed 3-character base-36 fractional segment. The format is positional,
//! so decoding needs no separator.
//!
//! This crate is the time half of the identifier stack; `torugo-tuid` embeds
//! a zero-padded CDT inside its structured identifiers.

pub mod base36;
mod cdt;
mod clock;
pub mod error;

pub use cdt::{Cdt, MAX_SECONDS};
pub use clock::{Clock, SystemClock};
pub use error::CdtError;
