pub mod navigate;
pub mod render;

pub use navigate::*;
pub use render::*;
