//! Client-side state of the item detail screen.
//!
//! [`OrderState`] is the pure part: quantities, favorite flag and the derived
//! total. [`OrderComposer`] owns one state per open screen and talks to the
//! API clients for loading, favorites and order submission.

mod state;
mod screen;

pub use state::*;
pub use screen::*;
