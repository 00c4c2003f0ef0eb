// Uinput constants and structures
#![allow(non_camel_case_types)]

use std::mem::size_of;

/// Control node of the kernel's uinput driver.
pub const UINPUT_PATH: &str = "/dev/uinput";

/// Size of the name buffer in `uinput_setup`, terminator included.
pub const UINPUT_MAX_NAME_SIZE: usize = 80;

pub const UI_SET_EVBIT: u64 = 0x40045564;
pub const UI_SET_KEYBIT: u64 = 0x40045565;
pub const UI_SET_RELBIT: u64 = 0x40045566;
pub const UI_SET_ABSBIT: u64 = 0x40045567;
pub const UI_SET_MSCBIT: u64 = 0x40045568;
pub const UI_SET_LEDBIT: u64 = 0x40045569;
pub const UI_SET_SNDBIT: u64 = 0x4004556a;
pub const UI_SET_FFBIT: u64 = 0x4004556b;
pub const UI_SET_SWBIT: u64 = 0x4004556d;
pub const UI_DEV_SETUP: u64 = 0x405c5503;
pub const UI_ABS_SETUP: u64 = 0x401c5504;
pub const UI_DEV_CREATE: u64 = 0x5501;
pub const UI_DEV_DESTROY: u64 = 0x5502;
pub const UI_GET_VERSION: u64 = 0x8004552d;

// Get sysfs name for uinput device
pub fn ui_get_sysname(len: usize) -> u64 {
    // _IOC(_IOC_READ, 'U', 0x2c, len)
    0x80000000 | ((len as u64 & 0x1fff) << 16) | (b'U' as u64) << 8 | 0x2c
}

// Get a capability bitmask from an evdev node
pub fn eviocgbit(ev: u16, len: usize) -> u64 {
    // _IOC(_IOC_READ, 'E', 0x20 + ev, len)
    0x80000000 | ((len as u64 & 0x1fff) << 16) | (b'E' as u64) << 8 | (0x20 + ev as u64)
}

// Get the name of an evdev node
pub fn eviocgname(len: usize) -> u64 {
    // _IOC(_IOC_READ, 'E', 0x06, len)
    0x80000000 | ((len as u64 & 0x1fff) << 16) | (b'E' as u64) << 8 | 0x06
}

pub const BUS_USB: u16 = 0x03;
pub const BUS_BLUETOOTH: u16 = 0x05;
pub const BUS_VIRTUAL: u16 = 0x06;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct input_id {
    pub bustype: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

#[repr(C)]
#[derive(Debug)]
pub struct uinput_setup {
    pub id: input_id,
    pub name: [u8; UINPUT_MAX_NAME_SIZE],
    pub ff_effects_max: u32,
}

impl uinput_setup {
    pub fn zeroed() -> Self {
        Self {
            id: input_id::default(),
            name: [0; UINPUT_MAX_NAME_SIZE],
            ff_effects_max: 0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct input_absinfo {
    pub value: i32,
    pub minimum: i32,
    pub maximum: i32,
    pub fuzz: i32,
    pub flat: i32,
    pub resolution: i32,
}

#[repr(C)]
#[derive(Debug)]
pub struct uinput_abs_setup {
    pub code: u16,
    pub absinfo: input_absinfo,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct input_event {
    pub time: libc::timeval,
    pub type_: u16,
    pub code: u16,
    pub value: i32,
}

impl input_event {
    pub const SIZE: usize = size_of::<input_event>();

    /// An event record with a zeroed timestamp; the kernel stamps it on write.
    pub fn new(type_: u16, code: u16, value: i32) -> Self {
        Self {
            time: libc::timeval {
                tv_sec: 0,
                tv_usec: 0,
            },
            type_,
            code,
            value,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        // Safety: repr(C) plain-old-data, padding-free on every Linux target
        unsafe { std::slice::from_raw_parts((self as *const Self).cast::<u8>(), Self::SIZE) }
    }

    /// Decode one record as read back from an evdev node.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        // Safety: length checked above, read_unaligned copes with any alignment
        Some(unsafe { std::ptr::read_unaligned(bytes.as_ptr().cast::<Self>()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_layouts_match_kernel_abi() {
        assert_eq!(size_of::<input_id>(), 8);
        assert_eq!(size_of::<uinput_setup>(), 92);
        assert_eq!(size_of::<input_absinfo>(), 24);
        assert_eq!(size_of::<uinput_abs_setup>(), 28);
        assert_eq!(
            input_event::SIZE,
            size_of::<libc::timeval>() + 2 + 2 + 4
        );
    }

    #[test]
    fn sized_requests_encode_struct_size() {
        assert_eq!((UI_DEV_SETUP >> 16) & 0x1fff, size_of::<uinput_setup>() as u64);
        assert_eq!(
            (UI_ABS_SETUP >> 16) & 0x1fff,
            size_of::<uinput_abs_setup>() as u64
        );
        assert_eq!(ui_get_sysname(64), 0x8040552c);
        assert_eq!(eviocgbit(0, 4), 0x80044520);
        assert_eq!(eviocgbit(1, 96), 0x80604521);
        assert_eq!(eviocgname(256), 0x81004506);
    }

    #[test]
    fn new_events_carry_zero_timestamp() {
        let event = input_event::new(1, 30, 1);
        assert_eq!(event.time.tv_sec, 0);
        assert_eq!(event.time.tv_usec, 0);

        let decoded = input_event::from_bytes(event.as_bytes()).unwrap();
        assert_eq!((decoded.type_, decoded.code, decoded.value), (1, 30, 1));
        assert!(input_event::from_bytes(&[0u8; 4]).is_none());
    }
}
