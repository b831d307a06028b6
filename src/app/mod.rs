pub mod runner;

pub use runner::{run, RunOutcome};
