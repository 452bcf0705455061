//! Shared types and models for the offer administration panel
//!
//! This crate contains the wire models, the offer form and its validation,
//! shared between the admin client and the browser front end (via WASM).

pub mod form;
pub mod models;
pub mod types;
pub mod validation;

pub use form::*;
pub use models::*;
pub use types::*;
pub use validation::*;
