use crate::codes::{REL_HWHEEL, REL_WHEEL, REL_X, REL_Y};
use crate::device::{DestroyedDevice, VirtualDevice};
use crate::error::Result;
use crate::protocol::{Capability, EventType, InputEvent};

mod batch;

pub use batch::Frame;

/// High-level handle for sending input through a created device.
///
/// Every helper ends its frame with a sync marker, so each call is observed
/// as one complete input frame. Use [`VirtualController::frame`] to group
/// several changes into a single frame instead.
#[derive(Debug)]
pub struct VirtualController {
    device: VirtualDevice,
}

impl VirtualController {
    pub fn new(device: VirtualDevice) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &VirtualDevice {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut VirtualDevice {
        &mut self.device
    }

    pub fn into_device(self) -> VirtualDevice {
        self.device
    }

    /// Set `capability` to `value` in a frame of its own
    pub fn send(&mut self, capability: Capability, value: i32) -> Result<()> {
        self.device.emit(&[capability.event(value)])
    }

    /// Press or release a key or button
    pub fn key(&mut self, key: Capability, pressed: bool) -> Result<()> {
        self.send(key, i32::from(pressed))
    }

    pub fn press(&mut self, key: Capability) -> Result<()> {
        self.key(key, true)
    }

    pub fn release(&mut self, key: Capability) -> Result<()> {
        self.key(key, false)
    }

    /// Press and release in one frame
    pub fn click(&mut self, key: Capability) -> Result<()> {
        self.device.emit(&[key.event(1), key.event(0)])
    }

    /// Press all keys in one frame, then release them in the next
    pub fn click_combination(&mut self, keys: &[Capability]) -> Result<()> {
        let presses: Vec<InputEvent> = keys.iter().map(|key| key.event(1)).collect();
        let releases: Vec<InputEvent> = keys.iter().map(|key| key.event(0)).collect();
        self.device.emit(&presses)?;
        self.device.emit(&releases)
    }

    /// Relative pointer motion
    pub fn move_relative(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.device.emit(&[REL_X.event(dx), REL_Y.event(dy)])
    }

    pub fn move_wheel(&mut self, value: i32) -> Result<()> {
        self.send(REL_WHEEL, value)
    }

    pub fn move_hwheel(&mut self, value: i32) -> Result<()> {
        self.send(REL_HWHEEL, value)
    }

    /// Move an absolute axis
    pub fn axis(&mut self, code: u16, value: i32) -> Result<()> {
        self.send(Capability::new(EventType::Absolute, code), value)
    }

    /// Sends a sync (SYN_REPORT) event
    pub fn sync(&mut self) -> Result<()> {
        self.device.flush()
    }

    /// Start a frame grouping several changes
    pub fn frame(&mut self) -> Frame<'_> {
        Frame::new(&mut self.device)
    }

    pub fn destroy(self) -> Result<DestroyedDevice> {
        self.device.destroy()
    }

    /// Destroy the device and release its handle
    pub fn close(self) -> Result<()> {
        self.device.destroy()?.close()
    }
}

impl From<VirtualDevice> for VirtualController {
    fn from(device: VirtualDevice) -> Self {
        Self::new(device)
    }
}
