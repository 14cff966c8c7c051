pub mod color;
pub mod constants;
pub mod entity;
pub mod frame;
pub mod lifecycle;
pub mod palette;
pub mod render;
pub mod settings;

pub use color::*;
pub use entity::*;
pub use frame::*;
pub use lifecycle::*;
pub use palette::*;
pub use render::*;
pub use settings::*;
