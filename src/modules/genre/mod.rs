//! Genre name resolution against the upstream genre table.

pub mod model;
pub mod service;

pub use model::GenreTable;
pub use service::GenreResolver;
