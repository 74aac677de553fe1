mod tick;
mod world;

pub use tick::{Deadline, DeadlineStatus, FrameClock};
pub use world::{ArenaSimulation, TickSummary};
