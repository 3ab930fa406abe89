//! Video subsystem lifecycle and resource registry.
//!
//! The subsystem is process-wide state with an explicit init/teardown
//! lifecycle: it is acquired with [`init`] and released when the returned
//! guard is dropped, on every exit path. Windows and renderers are tracked
//! in keyed registries, so a handle can always be told apart from a stale
//! one.

use std::sync::atomic::{AtomicBool, Ordering};

use bitflags::bitflags;
use slotmap::SlotMap;

pub use driver::{Driver, RendererBackend};
pub use error::{DestroyError, InitError, RendererCreationError, WindowCreationError};
pub use renderer::RendererHandle;
pub use window::{WindowDescriptor, WindowFlags, WindowHandle};

use renderer::{RendererKey, RendererRecord};
use window::WindowKey;

pub mod driver;
pub mod error;

mod renderer;
mod window;

#[cfg(test)]
pub(crate) mod tests;

bitflags! {
    /// Capabilities requested from the video driver at initialization.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SubsystemFlags: u32 {
        /// Windowing and rendering support.
        const VIDEO = 1;
        /// Input event delivery support.
        const EVENTS = 1 << 1;
    }
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Acquires the unique [`VideoSubsystem`] instance of this process.
///
/// # Errors
///
/// An error is returned if another subsystem instance is still alive,
/// or if the driver fails to come up. Once the returned guard is dropped,
/// the subsystem can be initialized again.
///
pub fn init<D: Driver>(mut driver: D, flags: SubsystemFlags) -> Result<VideoSubsystem<D>, InitError> {
    if INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(InitError::AlreadyInitialized);
    }
    if let Err(error) = driver.init(flags) {
        INITIALIZED.store(false, Ordering::SeqCst);
        return Err(error.into());
    }
    log::info!("video subsystem initialized with {:?}", flags);
    Ok(VideoSubsystem {
        driver,
        flags,
        windows: SlotMap::with_key(),
        renderers: SlotMap::with_key(),
        last_error: None,
    })
}

/// Scoped guard around the process-wide video subsystem state.
///
/// Owns the platform driver and the registries of live windows and
/// renderers. Dropping the guard releases every resource that was not
/// explicitly destroyed, tears the driver down and allows a later
/// [`init`] call to succeed.
///
pub struct VideoSubsystem<D: Driver> {
    driver: D,
    flags: SubsystemFlags,
    windows: SlotMap<WindowKey, D::Window>,
    renderers: SlotMap<RendererKey, RendererRecord<D::Renderer>>,
    last_error: Option<String>,
}

impl<D: Driver> VideoSubsystem<D> {
    /// Capabilities this subsystem was initialized with.
    pub fn flags(&self) -> SubsystemFlags {
        self.flags
    }

    /// Last error string recorded by a failed subsystem operation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of live windows.
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Number of live renderers.
    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    /// Creates a window and returns its handle.
    ///
    /// # Errors
    ///
    /// An error is returned if the descriptor is not valid or the driver
    /// fails to create the window; the failure is also recorded as the
    /// last error string.
    ///
    pub fn create_window(
        &mut self,
        descriptor: &WindowDescriptor,
    ) -> Result<WindowHandle, WindowCreationError> {
        if descriptor.width() == 0 || descriptor.height() == 0 {
            let error = WindowCreationError::InvalidSize {
                width: descriptor.width(),
                height: descriptor.height(),
            };
            self.last_error = Some(error.to_string());
            return Err(error);
        }
        match self.driver.create_window(descriptor) {
            Ok(raw) => {
                let handle = WindowHandle(self.windows.insert(raw));
                log::info!("window {} created: {:?}", handle, descriptor.title());
                Ok(handle)
            }
            Err(error) => {
                self.last_error = Some(error.to_string());
                Err(error.into())
            }
        }
    }

    /// Creates a renderer bound to the window behind `window`.
    ///
    /// The binding is permanent: the renderer is destroyed together with
    /// its window at the latest.
    ///
    /// # Errors
    ///
    /// An error is returned if the window handle is stale or the driver
    /// fails to create the renderer; the failure is also recorded as the
    /// last error string.
    ///
    pub fn create_renderer(
        &mut self,
        window: WindowHandle,
        preference: Option<RendererBackend>,
    ) -> Result<RendererHandle, RendererCreationError> {
        let raw_window = match self.windows.get(window.0) {
            Some(raw_window) => raw_window,
            None => {
                let error = RendererCreationError::InvalidWindow;
                self.last_error = Some(error.to_string());
                return Err(error);
            }
        };
        match self.driver.create_renderer(raw_window, preference) {
            Ok(raw) => {
                let record = RendererRecord {
                    raw,
                    window: window.0,
                };
                let handle = RendererHandle(self.renderers.insert(record));
                log::info!("renderer {} created for window {}", handle, window);
                Ok(handle)
            }
            Err(error) => {
                self.last_error = Some(error.to_string());
                Err(error.into())
            }
        }
    }

    /// Handle of the window a live renderer is bound to.
    pub fn window_of(&self, renderer: RendererHandle) -> Option<WindowHandle> {
        self.renderers
            .get(renderer.0)
            .map(|record| WindowHandle(record.window))
    }

    /// Destroys a renderer before its window goes away.
    ///
    /// # Errors
    ///
    /// An error is returned if the handle is stale.
    ///
    pub fn destroy_renderer(&mut self, renderer: RendererHandle) -> Result<(), DestroyError> {
        match self.renderers.remove(renderer.0) {
            Some(_record) => {
                log::info!("renderer {} destroyed", renderer);
                Ok(())
            }
            None => Err(DestroyError::StaleRenderer),
        }
    }

    /// Destroys a window and every renderer still bound to it.
    ///
    /// # Errors
    ///
    /// An error is returned if the handle is stale.
    ///
    pub fn destroy_window(&mut self, window: WindowHandle) -> Result<(), DestroyError> {
        if !self.windows.contains_key(window.0) {
            return Err(DestroyError::StaleWindow);
        }
        let bound: Vec<_> = self
            .renderers
            .iter()
            .filter(|(_, record)| record.window == window.0)
            .map(|(key, _)| key)
            .collect();
        for key in bound {
            log::warn!(
                "renderer {} destroyed together with its window {}",
                RendererHandle(key),
                window,
            );
            self.renderers.remove(key);
        }
        self.windows.remove(window.0);
        log::info!("window {} destroyed", window);
        Ok(())
    }
}

impl<D: Driver> Drop for VideoSubsystem<D> {
    fn drop(&mut self) {
        if !self.renderers.is_empty() {
            log::warn!(
                "{} renderer(s) released in bulk teardown",
                self.renderers.len(),
            );
        }
        self.renderers.clear();
        if !self.windows.is_empty() {
            log::warn!("{} window(s) released in bulk teardown", self.windows.len());
        }
        self.windows.clear();
        self.driver.quit();
        INITIALIZED.store(false, Ordering::SeqCst);
        log::info!("video subsystem terminated");
    }
}
