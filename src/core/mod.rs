// Core utilities shared by engine and game code

pub mod math;
pub mod timer;

pub use timer::{CooldownTimer, Stopwatch};
