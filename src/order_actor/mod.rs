//! Orders resource.

pub mod entity;
