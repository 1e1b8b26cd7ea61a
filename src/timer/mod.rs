//! Timer collaborator for the resolution window.
//!
//! - `Scheduler`: trait the host implements with its real timer
//! - `ManualScheduler`: fake clock for tests and headless hosts
//! - `ResolutionTicket`: what gets scheduled

pub mod scheduler;

pub use scheduler::{ManualScheduler, ResolutionTicket, Scheduler};
