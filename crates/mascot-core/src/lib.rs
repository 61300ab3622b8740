pub mod clip;
pub mod constants;
pub mod director;
pub mod gimbal;
pub mod pose;
pub mod procedural;
pub mod registry;
pub mod section;
pub mod state;
pub mod tracker;

pub use clip::*;
pub use constants::*;
pub use director::*;
pub use gimbal::*;
pub use pose::*;
pub use procedural::*;
pub use registry::*;
pub use section::*;
pub use state::*;
pub use tracker::*;
