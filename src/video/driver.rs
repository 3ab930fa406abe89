//! Seam between the subsystem lifecycle and the platform windowing stack.

use std::fmt;

use crate::error::DriverError;

use super::window::WindowDescriptor;
use super::SubsystemFlags;

/// Renderer backend preference for
/// [`create_renderer`](super::VideoSubsystem::create_renderer).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RendererBackend {
    /// Hardware accelerated rendering through the Vulkan API.
    Vulkan,
    /// Plain software rasterizer.
    Software,
}

impl fmt::Display for RendererBackend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Vulkan => "vulkan",
            Self::Software => "software",
        };
        write!(f, "{}", name)
    }
}

/// Platform driver which actually provides windows and renderers.
///
/// The production implementation lives in the graphics module of this
/// crate; tests substitute a scripted driver to exercise failure paths.
/// Driver resources are released by dropping them, so no explicit
/// destroy operations appear here.
///
pub trait Driver {
    /// Window resource owned by the driver.
    type Window;

    /// Renderer resource owned by the driver.
    type Renderer;

    /// Brings the driver up with the requested capabilities.
    fn init(&mut self, flags: SubsystemFlags) -> Result<(), DriverError>;

    /// Creates a window resource described by `descriptor`.
    fn create_window(&mut self, descriptor: &WindowDescriptor) -> Result<Self::Window, DriverError>;

    /// Creates a renderer resource drawing into `window`.
    ///
    /// A driver which cannot provide the preferred backend must fail
    /// instead of silently substituting another one.
    ///
    fn create_renderer(
        &mut self,
        window: &Self::Window,
        preference: Option<RendererBackend>,
    ) -> Result<Self::Renderer, DriverError>;

    /// Tears the driver down. Called exactly once, after every resource
    /// created by this driver has been dropped.
    fn quit(&mut self);
}
