//! Typed handles for the remote API resources.

#[macro_use]
mod macros;

pub mod catalog_client;
pub mod favorite_client;
pub mod order_client;

pub use catalog_client::*;
pub use favorite_client::*;
pub use order_client::*;
