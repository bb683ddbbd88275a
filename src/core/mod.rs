//! Core-Domänentypen: Richtungen, Stationen, Linien, MetroMap.

pub mod direction;
pub mod line;
pub mod metro_map;
pub mod palette;
pub mod station;

pub use direction::{BendHalf, Direction};
pub use line::Line;
pub use metro_map::MetroMap;
pub use palette::color_for_line;
pub use station::Station;
