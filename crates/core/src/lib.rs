//! Domain types shared by the storage, notification and HTTP crates.

pub mod error;
pub mod submission;
pub mod types;
