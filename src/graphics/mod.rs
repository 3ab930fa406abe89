//! Production video driver based on winit windowing and the Vulkan API.

use std::iter;
use std::sync::Arc;

use semver::Version;
use vulkano::device::physical::PhysicalDevice;
use vulkano::device::{Device, DeviceExtensions, Features, Queue};
use vulkano::instance::Instance;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::config::Config;
use crate::error::DriverError;
use crate::video::{Driver, RendererBackend, SubsystemFlags, WindowDescriptor, WindowFlags};

mod utils;

/// Driver which creates winit windows and Vulkan rendering devices.
pub struct VulkanDriver {
    app_name: String,
    app_version: Version,
    enable_validation: bool,
    state: Option<State>,
}

struct State {
    event_loop: EventLoop<()>,
    instance: Arc<Instance>,
}

impl VulkanDriver {
    /// Creates the driver from the harness configuration.
    ///
    /// Nothing is brought up until [`Driver::init`] is called.
    ///
    pub fn new(config: &Config) -> Self {
        Self {
            app_name: config.name().to_string(),
            app_version: config.version().clone(),
            enable_validation: config.enable_validation(),
            state: None,
        }
    }
}

/// Renderer resource of [`VulkanDriver`]: a logical device with its
/// graphics queue. Dropping it releases the device.
#[allow(dead_code)]
pub struct VulkanRenderer {
    graphics_queue: Arc<Queue>,
    device: Arc<Device>,
}

impl Driver for VulkanDriver {
    type Window = winit::window::Window;
    type Renderer = VulkanRenderer;

    fn init(&mut self, flags: SubsystemFlags) -> Result<(), DriverError> {
        if !flags.contains(SubsystemFlags::VIDEO) {
            return Err(DriverError::from("this driver requires the VIDEO capability"));
        }
        let event_loop = EventLoop::new();
        let instance =
            utils::create_instance(&self.app_name, &self.app_version, self.enable_validation)?;
        log::info!(
            "max version of Vulkan instance is {}",
            instance.max_api_version(),
        );
        self.state = Some(State {
            event_loop,
            instance,
        });
        Ok(())
    }

    fn create_window(
        &mut self,
        descriptor: &WindowDescriptor,
    ) -> Result<winit::window::Window, DriverError> {
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| DriverError::from("video driver is not initialized"))?;

        let flags = descriptor.flags();
        let window = WindowBuilder::new()
            .with_title(descriptor.title())
            .with_inner_size(LogicalSize::new(descriptor.width(), descriptor.height()))
            .with_visible(!flags.contains(WindowFlags::HIDDEN))
            .with_resizable(flags.contains(WindowFlags::RESIZABLE))
            .with_decorations(!flags.contains(WindowFlags::BORDERLESS))
            .build(&state.event_loop)
            .map_err(|error| DriverError::new("window creation failure", error))?;
        Ok(window)
    }

    fn create_renderer(
        &mut self,
        _window: &winit::window::Window,
        preference: Option<RendererBackend>,
    ) -> Result<VulkanRenderer, DriverError> {
        if let Some(backend) = preference {
            if backend != RendererBackend::Vulkan {
                return Err(DriverError::from(format!(
                    "renderer backend {} is not provided by this driver",
                    backend,
                )));
            }
        }
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| DriverError::from("video driver is not initialized"))?;

        let physical_devices = PhysicalDevice::enumerate(&state.instance);
        log::info!("enumerated {} physical devices", physical_devices.len());

        let required_extensions = DeviceExtensions::none();
        let required_features = Features::none();
        let utils::SuitablePhysicalDevice {
            physical_device,
            graphics_family,
        } = utils::suitable_physical_device(
            physical_devices,
            &required_extensions,
            &required_features,
        )
        .ok_or_else(|| DriverError::from("no suitable physical device were found"))?;
        log::info!(
            r#"using device "{}" of type "{:?}" with Vulkan version {}"#,
            physical_device.properties().device_name,
            physical_device.properties().device_type,
            physical_device.api_version(),
        );

        let (device, mut queues) = {
            let required_extensions = physical_device
                .required_extensions()
                .union(&required_extensions);
            Device::new(
                physical_device,
                &required_features,
                &required_extensions,
                iter::once((graphics_family, 1.0)),
            )
            .map_err(|error| DriverError::new("device creation failure", error))?
        };
        let graphics_queue = queues
            .next()
            .ok_or_else(|| DriverError::from("device has no graphics queue"))?;

        Ok(VulkanRenderer {
            graphics_queue,
            device,
        })
    }

    fn quit(&mut self) {
        if self.state.take().is_some() {
            log::info!("video driver terminated");
        }
    }
}
