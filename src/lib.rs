mod board;
mod common;
mod config;
mod heatmap;
mod logging;
mod mask;
mod opponent;
mod sampler;

pub use board::*;
pub use common::*;
pub use config::*;
pub use heatmap::*;
pub use logging::init_logging;
pub use mask::{BitGrid, GridError, SetBits};
pub use opponent::*;
pub use sampler::*;
