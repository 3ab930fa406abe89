//! Window resource descriptor and handle.

use std::fmt;

use bitflags::bitflags;
use slotmap::{new_key_type, Key};

new_key_type! {
    pub(crate) struct WindowKey;
}

bitflags! {
    /// Creation flags of a window resource.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowFlags: u32 {
        /// Window starts out invisible.
        const HIDDEN = 1;
        /// Window can be resized by the user.
        const RESIZABLE = 1 << 1;
        /// Window is created without decorations.
        const BORDERLESS = 1 << 2;
    }
}

/// Everything the driver needs to know to create a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    title: String,
    width: u32,
    height: u32,
    flags: WindowFlags,
}

impl WindowDescriptor {
    /// Creates new window descriptor with given title, size in pixels
    /// and creation flags.
    pub fn new(title: String, width: u32, height: u32, flags: WindowFlags) -> Self {
        Self {
            title,
            width,
            height,
            flags,
        }
    }

    /// Title of the window.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Width of the window, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the window, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Creation flags of the window.
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self::new("Test".to_string(), 640, 480, WindowFlags::HIDDEN)
    }
}

/// Opaque handle of a live window resource.
///
/// Valid only while the owning [`VideoSubsystem`](super::VideoSubsystem)
/// keeps the window alive.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub(crate) WindowKey);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}", self.0.data().as_ffi())
    }
}
