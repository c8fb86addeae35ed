pub mod fleet;
pub mod intent;
pub mod interpreter;
pub mod normalize;

pub use fleet::Fleet;
pub use intent::{Command, Intent};
pub use interpreter::interpret;
pub use normalize::normalize;
