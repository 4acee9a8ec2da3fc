// src/domain/mod.rs
pub mod card;
pub mod error;
pub mod store;

pub use card::Card;
pub use error::DomainError;
pub use store::{CardStore, Hardest};
