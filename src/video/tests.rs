#![cfg(test)]

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::DriverError;

use super::*;

/// Serializes tests which touch the process-wide subsystem flag.
pub(crate) fn exclusive() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scripted driver: every operation succeeds unless told otherwise.
#[derive(Default)]
pub(crate) struct ScriptedDriver {
    pub fail_init: bool,
    pub fail_window: bool,
    pub fail_renderer: bool,
}

impl Driver for ScriptedDriver {
    type Window = ();
    type Renderer = ();

    fn init(&mut self, _flags: SubsystemFlags) -> Result<(), DriverError> {
        if self.fail_init {
            return Err(DriverError::from("no video driver available"));
        }
        Ok(())
    }

    fn create_window(&mut self, _descriptor: &WindowDescriptor) -> Result<(), DriverError> {
        if self.fail_window {
            return Err(DriverError::from("no display available"));
        }
        Ok(())
    }

    fn create_renderer(
        &mut self,
        _window: &(),
        preference: Option<RendererBackend>,
    ) -> Result<(), DriverError> {
        if self.fail_renderer {
            return Err(DriverError::from("no suitable renderer backend available"));
        }
        if let Some(RendererBackend::Software) = preference {
            return Err(DriverError::from(
                "software renderer backend is not provided by this driver",
            ));
        }
        Ok(())
    }

    fn quit(&mut self) {}
}

#[test]
fn test_init_is_exclusive() {
    let _guard = exclusive();

    let video = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();
    assert_eq!(video.flags(), SubsystemFlags::VIDEO);

    let second = init(ScriptedDriver::default(), SubsystemFlags::VIDEO);
    assert!(matches!(second, Err(InitError::AlreadyInitialized)));

    drop(video);
    let third = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();
    drop(third);
}

#[test]
fn test_failed_init_releases_subsystem() {
    let _guard = exclusive();

    let driver = ScriptedDriver {
        fail_init: true,
        ..ScriptedDriver::default()
    };
    let failed = init(driver, SubsystemFlags::VIDEO);
    assert!(matches!(failed, Err(InitError::Driver(_))));

    // The failed attempt must not keep the subsystem marked as live.
    let video = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();
    drop(video);
}

#[test]
fn test_window_lifecycle() {
    let _guard = exclusive();
    let mut video = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();

    let descriptor = WindowDescriptor::default();
    let window = video.create_window(&descriptor).unwrap();
    assert!(window.to_string().starts_with("0x"));
    assert_eq!(video.window_count(), 1);

    video.destroy_window(window).unwrap();
    assert_eq!(video.window_count(), 0);
    assert!(matches!(
        video.destroy_window(window),
        Err(DestroyError::StaleWindow),
    ));
}

#[test]
fn test_window_failure_records_error() {
    let _guard = exclusive();
    let driver = ScriptedDriver {
        fail_window: true,
        ..ScriptedDriver::default()
    };
    let mut video = init(driver, SubsystemFlags::VIDEO).unwrap();

    let result = video.create_window(&WindowDescriptor::default());
    assert!(matches!(result, Err(WindowCreationError::Driver(_))));
    let last_error = video.last_error().unwrap();
    assert!(last_error.contains("no display available"));
}

#[test]
fn test_zero_size_window_is_rejected() {
    let _guard = exclusive();
    let mut video = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();

    let descriptor = WindowDescriptor::new("Test".to_string(), 640, 0, WindowFlags::empty());
    let result = video.create_window(&descriptor);
    assert!(matches!(
        result,
        Err(WindowCreationError::InvalidSize {
            width: 640,
            height: 0,
        }),
    ));
    // The driver was never asked, yet the failure is still recorded.
    assert!(video.last_error().unwrap().contains("640x0"));
}

#[test]
fn test_renderer_binds_to_its_window() {
    let _guard = exclusive();
    let mut video = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();

    let first = video.create_window(&WindowDescriptor::default()).unwrap();
    let second = video.create_window(&WindowDescriptor::default()).unwrap();

    let renderer = video.create_renderer(second, None).unwrap();
    assert_eq!(video.window_of(renderer), Some(second));
    assert_ne!(video.window_of(renderer), Some(first));
}

#[test]
fn test_renderer_with_stale_window_fails() {
    let _guard = exclusive();
    let mut video = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();

    let window = video.create_window(&WindowDescriptor::default()).unwrap();
    video.destroy_window(window).unwrap();

    let result = video.create_renderer(window, None);
    assert!(matches!(result, Err(RendererCreationError::InvalidWindow)));
    assert!(video.last_error().is_some());
}

#[test]
fn test_destroy_window_cascades_to_renderers() {
    let _guard = exclusive();
    let mut video = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();

    let window = video.create_window(&WindowDescriptor::default()).unwrap();
    let renderer = video.create_renderer(window, None).unwrap();
    assert_eq!(video.renderer_count(), 1);

    video.destroy_window(window).unwrap();
    assert_eq!(video.renderer_count(), 0);
    assert!(matches!(
        video.destroy_renderer(renderer),
        Err(DestroyError::StaleRenderer),
    ));
}

#[test]
fn test_unavailable_backend_is_reported() {
    let _guard = exclusive();
    let mut video = init(ScriptedDriver::default(), SubsystemFlags::VIDEO).unwrap();

    let window = video.create_window(&WindowDescriptor::default()).unwrap();
    let result = video.create_renderer(window, Some(RendererBackend::Software));
    assert!(matches!(result, Err(RendererCreationError::Driver(_))));
    assert!(video.last_error().unwrap().contains("software"));
}
