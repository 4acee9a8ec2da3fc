// src/ports/mod.rs
pub mod messages;

pub use messages::MessagePresenter;
