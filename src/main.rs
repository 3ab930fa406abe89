//! Smoke test harness for windowing and rendering based on Rust and Vulkan API

use std::error::Error;

use vidsmoke::config::{Config, HARNESS_NAME, HARNESS_VERSION};
use vidsmoke::run;

mod logger;

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let _handle = logger::init()?;
    log::info!("logger initialized successfully");

    let config = Config::new(
        HARNESS_NAME.to_string(),
        HARNESS_VERSION.clone(),
        cfg!(debug_assertions),
    );

    // Window and renderer failures are part of the report, so the exit
    // code stays 0 for them; only subsystem init failure aborts.
    let report = run(&config)?;
    print!("{}", report);
    Ok(())
}
