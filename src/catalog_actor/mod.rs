//! Catalog resource: items with their extras, looked up by item id.

pub mod entity;
