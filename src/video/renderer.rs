//! Renderer resource handle.

use std::fmt;

use slotmap::{new_key_type, Key};

use super::window::WindowKey;

new_key_type! {
    pub(crate) struct RendererKey;
}

/// Opaque handle of a live renderer resource.
///
/// A renderer is bound to the window it was created for and never
/// outlives it.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RendererHandle(pub(crate) RendererKey);

impl fmt::Display for RendererHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}", self.0.data().as_ffi())
    }
}

/// Registry entry of a live renderer: the driver resource and the key
/// of the window it is bound to.
pub(crate) struct RendererRecord<R> {
    pub raw: R,
    pub window: WindowKey,
}
