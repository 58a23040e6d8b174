//! External renderer invocation: parameter synthesis and background
//! execution.

mod command;
mod trigger;

pub use command::RenderPlan;
pub use trigger::{RenderOutcome, spawn_render};
