pub mod control;
pub mod stream;

pub use control::*;
pub use stream::*;
