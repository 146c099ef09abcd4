//! Favorites resource, keyed by the favorited item's id.

pub mod entity;
