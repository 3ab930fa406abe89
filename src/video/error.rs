//! Error types for the video subsystem lifecycle.

use thiserror::Error;

use crate::error::DriverError;

/// Error that can happen when initializing the video subsystem.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("cannot initialize more than one video subsystem at a time")]
    AlreadyInitialized,

    #[error("video driver initialization failure: {0}")]
    Driver(#[from] DriverError),
}

/// Error that can happen when creating a window.
#[derive(Debug, Error)]
pub enum WindowCreationError {
    #[error("window size {width}x{height} is not valid")]
    InvalidSize { width: u32, height: u32 },

    #[error("window creation failure: {0}")]
    Driver(#[from] DriverError),
}

/// Error that can happen when creating a renderer.
#[derive(Debug, Error)]
pub enum RendererCreationError {
    #[error("window handle is stale or belongs to no live window")]
    InvalidWindow,

    #[error("renderer creation failure: {0}")]
    Driver(#[from] DriverError),
}

/// Error that can happen when explicitly destroying a resource.
#[derive(Debug, Error)]
pub enum DestroyError {
    #[error("window handle is stale or already destroyed")]
    StaleWindow,

    #[error("renderer handle is stale or already destroyed")]
    StaleRenderer,
}
