//! `sth-input` — record loading and batch hashing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`loader`] | `load_records_csv`, `load_records_reader`         |
//! | [`batch`]  | `hash_records`, `hash_csv_reader`                 |
//! | [`error`]  | `InputError`, `InputResult<T>`                    |
//!
//! The loader reads a neutral CSV shape; converting a particular provider's
//! export into it is left to the application.

pub mod batch;
pub mod error;
pub mod loader;


pub use batch::{hash_csv_reader, hash_records};
pub use error::{InputError, InputResult};
pub use loader::{load_records_csv, load_records_reader};
