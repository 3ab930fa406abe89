//! General Vulkan utilities for the production video driver.

use std::sync::Arc;

use vulkano::device::physical::{PhysicalDevice, PhysicalDeviceType, QueueFamily};
use vulkano::device::{DeviceExtensions, Features};
use vulkano::instance::{ApplicationInfo, Instance, InstanceExtensions};

use crate::config::{HARNESS_NAME, HARNESS_VERSION};
use crate::error::DriverError;

/// Convert `semver` Version struct into `vulkano` Version struct.
#[inline]
const fn to_vk_version(version: &semver::Version) -> vulkano::Version {
    vulkano::Version {
        major: version.major as u32,
        minor: version.minor as u32,
        patch: version.patch as u32,
    }
}

/// Create instance of Vulkan (with low-level vkInstance handle).
///
/// Will enable the `VK_EXT_debug_utils` extension and the Khronos
/// validation layer if validation is requested.
///
pub fn create_instance(
    app_name: &str,
    app_version: &semver::Version,
    enable_validation: bool,
) -> Result<Arc<Instance>, DriverError> {
    let info = ApplicationInfo {
        application_name: Some(app_name.into()),
        application_version: Some(to_vk_version(app_version)),
        engine_name: Some(HARNESS_NAME.into()),
        engine_version: Some(to_vk_version(&*HARNESS_VERSION)),
    };
    let extensions = {
        let mut extensions = InstanceExtensions::none();
        if enable_validation {
            extensions.ext_debug_utils = true;
        }
        extensions
    };
    let layers = enable_validation.then(|| "VK_LAYER_KHRONOS_validation");

    let instance = Instance::new(Some(&info), vulkano::Version::V1_2, &extensions, layers)
        .map_err(|error| DriverError::new("instance creation failure", error))?;
    Ok(instance)
}

/// Suitable physical device with the queue family renderers are built on.
pub struct SuitablePhysicalDevice<'a> {
    pub physical_device: PhysicalDevice<'a>,
    pub graphics_family: QueueFamily<'a>,
}

/// Filter a suitable physical device from all of them.
///
/// Will check for provided extensions and features support and prefer
/// dedicated hardware over software implementations.
///
pub fn suitable_physical_device<'a>(
    physical_devices: impl ExactSizeIterator<Item = PhysicalDevice<'a>>,
    required_extensions: &DeviceExtensions,
    required_features: &Features,
) -> Option<SuitablePhysicalDevice<'a>> {
    physical_devices
        .filter(|physical_device| {
            let extensions = physical_device.supported_extensions();
            let features = physical_device.supported_features();
            extensions.is_superset_of(required_extensions)
                && features.is_superset_of(required_features)
        })
        .filter_map(|physical_device| {
            let graphics_family = physical_device
                .queue_families()
                .find(QueueFamily::supports_graphics)?;
            Some(SuitablePhysicalDevice {
                physical_device,
                graphics_family,
            })
        })
        .max_by_key(|suitable| score(&suitable.physical_device))
}

fn score(physical_device: &PhysicalDevice) -> u32 {
    match physical_device.properties().device_type {
        PhysicalDeviceType::DiscreteGpu => 4,
        PhysicalDeviceType::IntegratedGpu => 3,
        PhysicalDeviceType::VirtualGpu => 2,
        PhysicalDeviceType::Cpu => 1,
        _ => 0,
    }
}
