// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod sort;

pub use error::DomainError;
pub use note::{Note, NotePatch};
pub use sort::SortCriterion;
