//! Identifier strategies implementing [`TaskIdGenerator`].
//!
//! [`TaskIdGenerator`]: crate::board::ports::TaskIdGenerator

mod collision_checked;
mod random;
mod sequential;

pub use collision_checked::{CollisionCheckedIdGenerator, DEFAULT_MAX_ATTEMPTS};
pub use random::RandomIdGenerator;
pub use sequential::SequentialIdGenerator;
