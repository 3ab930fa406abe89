//! The smoke test flow: bring the video subsystem up, request a window
//! and a renderer bound to it, report what happened, tear everything down.

use std::fmt;

use crate::config::Config;
use crate::graphics::VulkanDriver;
use crate::video::{self, Driver, InitError, RendererHandle, SubsystemFlags, WindowHandle};

#[cfg(test)]
mod tests;

/// Outcome of a smoke test run: either a renderer came up, or the last
/// recorded error explains why not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

/// What a smoke test run observed.
///
/// Its `Display` implementation is the report contract of the harness:
/// a window line, a renderer line, then exactly one of the success or
/// error lines.
///
#[derive(Debug, Clone)]
pub struct Report {
    window: Option<WindowHandle>,
    renderer: Option<RendererHandle>,
    outcome: Outcome,
}

impl Report {
    /// Identity of the created window, if any.
    pub fn window(&self) -> Option<WindowHandle> {
        self.window
    }

    /// Identity of the created renderer, if any.
    pub fn renderer(&self) -> Option<RendererHandle> {
        self.renderer
    }

    /// Outcome of the run.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Whether the renderer came up.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.window {
            Some(window) => writeln!(f, "window = {}", window)?,
            None => writeln!(f, "window = null")?,
        }
        match self.renderer {
            Some(renderer) => writeln!(f, "renderer = {}", renderer)?,
            None => writeln!(f, "renderer = null")?,
        }
        match &self.outcome {
            Outcome::Success => writeln!(f, "Success!"),
            Outcome::Failure(message) => writeln!(f, "Error: {}", message),
        }
    }
}

/// Runs the smoke test against the production winit/Vulkan driver.
///
/// # Errors
///
/// An error is returned only if the video subsystem itself fails to come
/// up. Window and renderer failures are part of the [`Report`].
///
pub fn run(config: &Config) -> Result<Report, InitError> {
    run_with(config, VulkanDriver::new(config))
}

/// Runs the smoke test against any [`Driver`] implementation.
pub fn run_with<D: Driver>(config: &Config, driver: D) -> Result<Report, InitError> {
    let mut video = video::init(driver, SubsystemFlags::VIDEO)?;
    Ok(smoke(&mut video, config))
}

fn smoke<D: Driver>(video: &mut video::VideoSubsystem<D>, config: &Config) -> Report {
    log::info!("creating window {:?}...", config.window().title());
    let window = match video.create_window(config.window()) {
        Ok(window) => Some(window),
        Err(error) => {
            log::error!("{}", error);
            None
        }
    };

    let renderer = window.and_then(|window| {
        log::info!("creating renderer...");
        match video.create_renderer(window, config.renderer_backend()) {
            Ok(renderer) => Some(renderer),
            Err(error) => {
                log::error!("{}", error);
                None
            }
        }
    });

    let outcome = match renderer {
        Some(_) => Outcome::Success,
        None => {
            let message = video.last_error().unwrap_or("unknown video error");
            Outcome::Failure(message.to_string())
        }
    };

    // Fine-grained release before the subsystem guard tears down in bulk.
    if let Some(renderer) = renderer {
        if let Err(error) = video.destroy_renderer(renderer) {
            log::warn!("{}", error);
        }
    }
    if let Some(window) = window {
        if let Err(error) = video.destroy_window(window) {
            log::warn!("{}", error);
        }
    }

    Report {
        window,
        renderer,
        outcome,
    }
}
