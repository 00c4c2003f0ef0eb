//! pewinput - virtual input devices for Linux
//!
//! This library creates devices through the kernel's uinput driver and writes
//! input events to them, which the rest of the system then sees exactly as
//! if they came from real hardware.
//!
//! ```no_run
//! use pewinput::codes::KEY_A;
//! use pewinput::{DeviceBuilder, DeviceIdentity, EventType};
//!
//! let mut builder = DeviceBuilder::open()?;
//! builder.enable_capability(KEY_A)?;
//! let mut device = builder.create(&DeviceIdentity::new("test-kbd"))?;
//!
//! device.send_event(EventType::Key, KEY_A.code, 1)?;
//! device.flush()?;
//! device.send_event(EventType::Key, KEY_A.code, 0)?;
//! device.flush()?;
//!
//! device.destroy()?.close()?;
//! # Ok::<(), pewinput::Error>(())
//! ```

pub mod codes;
pub mod controller;
pub mod device;
pub mod error;
pub mod handle;
pub mod protocol;
pub mod templates;
pub mod uinput;

// Re-export commonly used types
pub use protocol::{
    AbsInfo, BusType, Capability, DeviceIdentity, EV_ABS, EV_FF, EV_KEY, EV_LED, EV_MSC, EV_REL,
    EV_REP, EV_SND, EV_SW, EV_SYN, EventType, InputEvent, SYN_REPORT,
};

pub use controller::{Frame, VirtualController};
pub use device::{DEFAULT_SETTLE_DELAY, DestroyedDevice, DeviceBuilder, VirtualDevice};
pub use error::{Error, Result};
pub use handle::UinputHandle;
pub use templates::{DeviceProfile, DeviceTemplates, ProfileBuilder};
