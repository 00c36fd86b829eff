pub mod display;
pub mod model;
pub mod node;
pub mod validate;

pub use display::*;
pub use model::*;
pub use node::*;
pub use validate::*;
