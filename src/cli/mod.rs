pub mod orchestration;

pub use orchestration::{run, RunOptions};
