//! Random string, number and password generation.
//!
//! Everything draws from the thread-local RNG, so any number of threads may
//! generate concurrently without coordination.

pub mod error;
mod password;
mod random;

pub use error::RandError;
pub use password::{strength, PasswordGenerator, PasswordSettings, Strength};
pub use random::{Random, RandomSettings, ALPHA, NUMBERS, SYMBOLS};
