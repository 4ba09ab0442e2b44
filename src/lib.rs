#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod coord;
mod engine;
mod field;
mod heatmap;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use common::*;
pub use config::*;
pub use coord::*;
pub use engine::*;
pub use field::*;
pub use heatmap::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
