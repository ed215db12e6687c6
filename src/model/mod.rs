//! Format-agnostic data model.
//!
//! Readers turn raw BOM rows into [`Item`]s and the database loader turns
//! its records into [`Article`]s. Everything downstream of the readers works
//! only on these two types.

mod article;
mod item;

pub use article::Article;
pub use item::Item;
