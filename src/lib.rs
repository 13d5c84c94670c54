//! Twisty Cube Model
//!
//! A discrete model of a 3x3x3 twisty cube: which colored cubelet sits in
//! which of the 27 slots, how textual notation becomes twists, and how slot
//! occupancy changes after every twist, partial ones included.

pub mod animator;
pub mod color;
pub mod cube;
pub mod cubelet;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod group;
pub mod presets;
pub mod queue;
pub mod scheduler;
pub mod slice;
pub mod solver;
pub mod twist;

use std::time::Duration;

pub use cube::{Cube, ShuffleMethod, Tick};
pub use error::TwistError;
pub use twist::{Notation, Twist};

/// Settings a cube is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeConfig {
    /// Animation time of a quarter turn.
    pub twist_duration: Duration,
    pub shuffle_method: ShuffleMethod,
    /// Fixes the shuffle sequence when set.
    pub seed: Option<u64>,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            twist_duration: Duration::from_secs(1),
            shuffle_method: ShuffleMethod::default(),
            seed: None,
        }
    }
}
