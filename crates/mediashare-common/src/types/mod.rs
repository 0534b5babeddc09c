mod core;
mod tile;

pub use self::core::*;
pub use tile::*;
