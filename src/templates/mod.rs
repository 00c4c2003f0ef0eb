use crate::codes::*;
use crate::controller::VirtualController;
use crate::device::{DEFAULT_SETTLE_DELAY, DeviceBuilder, VirtualDevice};
use crate::error::{Error, Result};
use crate::protocol::{AbsInfo, BusType, Capability, DeviceIdentity};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_DEVICE_NAME: &str = "pewinput-virtual-dev";
pub const DEFAULT_MOUSE_NAME: &str = "pewinput-virtual-mouse";
pub const DEFAULT_KEYBOARD_NAME: &str = "pewinput-virtual-keyboard";
pub const DEFAULT_GAMEPAD_NAME: &str = "pewinput-virtual-gamepad";

static DEVICE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// `prefix` followed by a process-wide device number, e.g. `pewinput-virtual-mouse3`.
///
/// Every call takes the next number, so devices created from the same
/// template still register under distinct names.
pub fn next_device_name(prefix: &str) -> String {
    format!("{}{}", prefix, DEVICE_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// An absolute axis and its range, as stored in a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsAxis {
    pub code: u16,
    #[serde(flatten)]
    pub info: AbsInfo,
}

/// Everything needed to create a device: identity plus declarations.
///
/// Profiles can be written by hand as JSON:
///
/// ```json
/// {
///   "identity": { "name": "macro-pad", "vendor_id": 4660 },
///   "capabilities": [
///     { "event_type": "key", "code": 30 },
///     { "event_type": "key", "code": 48 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub identity: DeviceIdentity,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub abs_axes: Vec<AbsAxis>,
    /// Settle delay override in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_ms: Option<u64>,
}

impl DeviceProfile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded profile from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject declarations the kernel can never accept
    pub fn validate(&self) -> Result<()> {
        if self.capabilities.is_empty() && self.abs_axes.is_empty() {
            return Err(Error::NoCapabilities);
        }
        if let Some(capability) = self
            .capabilities
            .iter()
            .find(|c| c.event_type.code_bit_request().is_none())
        {
            return Err(Error::UnsupportedEventType(capability.event_type.to_raw()));
        }
        crate::device::device_setup(&self.identity).map(drop)
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SETTLE_DELAY)
    }

    /// Declare everything on an already opened builder
    pub fn apply(&self, builder: &mut DeviceBuilder) -> Result<()> {
        builder.enable_capabilities(self.capabilities.iter().copied())?;
        for axis in &self.abs_axes {
            builder.enable_abs_axis(axis.code, axis.info)?;
        }
        builder.set_settle_delay(self.settle_delay());
        Ok(())
    }

    /// Open `/dev/uinput`, declare the profile and create the device
    pub fn create(&self) -> Result<VirtualDevice> {
        let mut builder = DeviceBuilder::open()?;
        self.apply(&mut builder)?;
        builder.create(&self.identity)
    }

    pub fn create_controller(&self) -> Result<VirtualController> {
        self.create().map(VirtualController::new)
    }
}

/// Pre-configured device profiles
pub struct DeviceTemplates;

impl DeviceTemplates {
    /// Full keyboard: every key code from ESC through the F-keys and the
    /// navigation block.
    pub fn keyboard() -> DeviceProfile {
        ProfileBuilder::numbered(DEFAULT_KEYBOARD_NAME)
            .capabilities((KEY_ESC.code..=KEY_DELETE.code).map(Capability::key))
            .build()
    }

    /// Three-button wheel mouse
    pub fn mouse() -> DeviceProfile {
        ProfileBuilder::numbered(DEFAULT_MOUSE_NAME)
            .mouse_buttons()
            .pointer_motion()
            .wheels()
            .build()
    }

    /// Gamepad with face, shoulder and menu buttons, two sticks and triggers
    pub fn gamepad() -> DeviceProfile {
        ProfileBuilder::numbered(DEFAULT_GAMEPAD_NAME)
            .face_buttons()
            .shoulder_buttons()
            .menu_buttons()
            .dual_analog_sticks()
            .analog_triggers()
            .build()
    }
}

/// Builder for custom profiles
pub struct ProfileBuilder {
    profile: DeviceProfile,
}

impl ProfileBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            profile: DeviceProfile {
                identity: DeviceIdentity::new(name),
                capabilities: Vec::new(),
                abs_axes: Vec::new(),
                settle_ms: None,
            },
        }
    }

    /// Start a profile named by [`next_device_name`]
    pub fn numbered(prefix: &str) -> Self {
        Self::new(next_device_name(prefix))
    }

    /// Set vendor and product IDs
    pub fn ids(mut self, vendor_id: u16, product_id: u16) -> Self {
        self.profile.identity.vendor_id = vendor_id;
        self.profile.identity.product_id = product_id;
        self
    }

    pub fn version(mut self, version: u16) -> Self {
        self.profile.identity.version = version;
        self
    }

    pub fn bustype(mut self, bustype: BusType) -> Self {
        self.profile.identity.bustype = bustype;
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.profile.settle_ms = Some(delay.as_millis() as u64);
        self
    }

    /// Add a capability; duplicates are ignored
    pub fn capability(mut self, capability: Capability) -> Self {
        if !self.profile.capabilities.contains(&capability) {
            self.profile.capabilities.push(capability);
        }
        self
    }

    pub fn capabilities(self, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        capabilities.into_iter().fold(self, Self::capability)
    }

    /// Add an absolute axis with a range
    pub fn axis(mut self, axis: Capability, min: i32, max: i32) -> Self {
        self.profile.abs_axes.push(AbsAxis {
            code: axis.code,
            info: AbsInfo::new(min, max),
        });
        self
    }

    pub fn build(self) -> DeviceProfile {
        self.profile
    }
}

/// Convenience methods for common capability sets
impl ProfileBuilder {
    pub fn mouse_buttons(self) -> Self {
        self.capabilities([BTN_LEFT, BTN_MIDDLE, BTN_RIGHT])
    }

    pub fn pointer_motion(self) -> Self {
        self.capabilities([REL_X, REL_Y])
    }

    pub fn wheels(self) -> Self {
        self.capabilities([REL_WHEEL, REL_HWHEEL])
    }

    /// Add standard face buttons (A, B, X, Y)
    pub fn face_buttons(self) -> Self {
        self.capabilities([BTN_SOUTH, BTN_EAST, BTN_NORTH, BTN_WEST])
    }

    /// Add shoulder buttons (L1, R1, L2, R2)
    pub fn shoulder_buttons(self) -> Self {
        self.capabilities([BTN_TL, BTN_TR, BTN_TL2, BTN_TR2])
    }

    /// Add standard menu buttons (Start, Select, Mode)
    pub fn menu_buttons(self) -> Self {
        self.capabilities([BTN_START, BTN_SELECT, BTN_MODE])
    }

    pub fn dual_analog_sticks(self) -> Self {
        self.axis(ABS_X, -32768, 32767)
            .axis(ABS_Y, -32768, 32767)
            .axis(ABS_RX, -32768, 32767)
            .axis(ABS_RY, -32768, 32767)
    }

    pub fn analog_triggers(self) -> Self {
        self.axis(ABS_Z, 0, 255).axis(ABS_RZ, 0, 255)
    }
}
