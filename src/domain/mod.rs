pub mod item;
pub mod favorite;
pub mod order;

pub use item::*;
pub use favorite::*;
pub use order::*;
