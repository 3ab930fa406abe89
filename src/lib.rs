//! Smoke test harness for windowing and rendering based on Rust and Vulkan API.

pub use harness::{run, run_with, Outcome, Report};

pub mod config;
pub mod error;
pub mod harness;
pub mod video;

mod graphics;
