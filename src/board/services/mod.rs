//! Application services for board commands.

mod error;
mod factory;
mod move_engine;
mod session;

pub use error::{BoardSessionError, BoardSessionResult};
pub use factory::TaskFactory;
pub use move_engine::{MoveEngine, MoveResolution};
pub use session::BoardSession;
