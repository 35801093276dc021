//! TMDB v3 client used as the upstream movie metadata provider.

pub mod client;
pub mod error;
pub mod types;

pub use client::TmdbClient;
pub use error::TmdbError;
