mod objects;
mod warehouse;

pub use objects::{MapObject, MapObjectKind};
pub use warehouse::WarehouseArena;
