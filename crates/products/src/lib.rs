//! Products domain module.
//!
//! This crate contains the business rules for product creation, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage): draft
//! validation, the product factory, and the vocabulary behind randomized
//! generation.

pub mod factory;
mod generator;
pub mod price;
pub mod product;

pub use factory::ProductFactory;
pub use price::Price;
pub use product::{MIN_NAME_LEN, Product, ProductDraft};
