pub mod boost;
pub mod coins;
pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use boost::*;
pub use coins::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
