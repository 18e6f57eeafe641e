pub use actor::Actor;
pub use config::{ConfigError, Settings};
pub use interpolator::{PoseInterpolator, Progress, Transformable, DEFAULT_SPEED};
pub use spacecraft::Spacecraft;

pub mod actor;
pub mod config;
pub mod geometry;
pub mod input;
pub mod interpolator;
pub mod spacecraft;
