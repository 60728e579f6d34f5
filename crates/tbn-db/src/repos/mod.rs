//! Repository modules implementing the library operations.
//!
//! Each module adds methods to `LibraryService` via `impl LibraryService` blocks.

pub mod bulk;
pub mod collection;
pub mod import;
pub mod series;
pub mod volume;
