//! Configuration utilities for the smoke test harness.

use semver::Version;

use crate::video::{RendererBackend, WindowDescriptor};

/// Name of the harness itself, as reported to the video driver.
pub const HARNESS_NAME: &str = env!("CARGO_CRATE_NAME", "crate must be compiled by Cargo");

const HARNESS_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "crate must be compiled by Cargo");
lazy_static::lazy_static! {
    /// Semver version of the harness itself.
    pub static ref HARNESS_VERSION: Version = HARNESS_VERSION_STR.parse().unwrap();
}

/// This struct represents general configuration of a smoke test run.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    enable_validation: bool,
    window: WindowDescriptor,
    renderer_backend: Option<RendererBackend>,
}

impl Config {
    /// Creates new configuration with given name, version and validation usage.
    ///
    /// The window descriptor and renderer backend preference start out with
    /// their defaults and can be replaced with [`set_window`](Self::set_window)
    /// and [`set_renderer_backend`](Self::set_renderer_backend).
    ///
    pub fn new(name: String, version: Version, enable_validation: bool) -> Self {
        Self {
            name,
            version,
            enable_validation,
            window: WindowDescriptor::default(),
            renderer_backend: None,
        }
    }

    /// Name of the application driving the smoke test.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semver version of the application driving the smoke test.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// If the graphics driver will use validation (useful for debugging).
    pub fn enable_validation(&self) -> bool {
        self.enable_validation
    }

    /// Descriptor of the window requested from the subsystem.
    pub fn window(&self) -> &WindowDescriptor {
        &self.window
    }

    /// Replaces the window descriptor of this configuration.
    pub fn set_window(&mut self, window: WindowDescriptor) {
        self.window = window;
    }

    /// Renderer backend preference, `None` meaning the driver default.
    pub fn renderer_backend(&self) -> Option<RendererBackend> {
        self.renderer_backend
    }

    /// Replaces the renderer backend preference of this configuration.
    pub fn set_renderer_backend(&mut self, backend: Option<RendererBackend>) {
        self.renderer_backend = backend;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            HARNESS_NAME.to_string(),
            HARNESS_VERSION.clone(),
            cfg!(debug_assertions),
        )
    }
}
