use crate::uinput;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_REL: u16 = 0x02;
pub const EV_ABS: u16 = 0x03;
pub const EV_MSC: u16 = 0x04;
pub const EV_SW: u16 = 0x05;
pub const EV_LED: u16 = 0x11;
pub const EV_SND: u16 = 0x12;
pub const EV_REP: u16 = 0x14;
pub const EV_FF: u16 = 0x15;
pub const EV_PWR: u16 = 0x16;
pub const EV_FF_STATUS: u16 = 0x17;
pub const EV_MAX: u16 = 0x1f;

pub const SYN_REPORT: u16 = 0x00;

/// Event types of the Linux input ABI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Synchronization,
    Key,
    Relative,
    Absolute,
    Misc,
    Switch,
    Led,
    Sound,
    Repeat,
    ForceFeedback,
    Power,
    ForceFeedbackStatus,
}

/// Per-type capability namespace: `(event type, code-bit request)`.
///
/// Types without an entry cannot be declared on a uinput device.
const CODE_BIT_REQUESTS: [(EventType, u64); 8] = [
    (EventType::Key, uinput::UI_SET_KEYBIT),
    (EventType::Relative, uinput::UI_SET_RELBIT),
    (EventType::Absolute, uinput::UI_SET_ABSBIT),
    (EventType::Misc, uinput::UI_SET_MSCBIT),
    (EventType::Switch, uinput::UI_SET_SWBIT),
    (EventType::Led, uinput::UI_SET_LEDBIT),
    (EventType::Sound, uinput::UI_SET_SNDBIT),
    (EventType::ForceFeedback, uinput::UI_SET_FFBIT),
];

impl EventType {
    pub const ALL: [EventType; 12] = [
        EventType::Synchronization,
        EventType::Key,
        EventType::Relative,
        EventType::Absolute,
        EventType::Misc,
        EventType::Switch,
        EventType::Led,
        EventType::Sound,
        EventType::Repeat,
        EventType::ForceFeedback,
        EventType::Power,
        EventType::ForceFeedbackStatus,
    ];

    pub const fn to_raw(self) -> u16 {
        match self {
            EventType::Synchronization => EV_SYN,
            EventType::Key => EV_KEY,
            EventType::Relative => EV_REL,
            EventType::Absolute => EV_ABS,
            EventType::Misc => EV_MSC,
            EventType::Switch => EV_SW,
            EventType::Led => EV_LED,
            EventType::Sound => EV_SND,
            EventType::Repeat => EV_REP,
            EventType::ForceFeedback => EV_FF,
            EventType::Power => EV_PWR,
            EventType::ForceFeedbackStatus => EV_FF_STATUS,
        }
    }

    pub fn from_raw(raw: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.to_raw() == raw)
    }

    /// The control request that enables a code within this type's namespace
    pub fn code_bit_request(self) -> Option<u64> {
        CODE_BIT_REQUESTS
            .iter()
            .find(|(ty, _)| *ty == self)
            .map(|&(_, request)| request)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventType::Synchronization => "EV_SYN",
            EventType::Key => "EV_KEY",
            EventType::Relative => "EV_REL",
            EventType::Absolute => "EV_ABS",
            EventType::Misc => "EV_MSC",
            EventType::Switch => "EV_SW",
            EventType::Led => "EV_LED",
            EventType::Sound => "EV_SND",
            EventType::Repeat => "EV_REP",
            EventType::ForceFeedback => "EV_FF",
            EventType::Power => "EV_PWR",
            EventType::ForceFeedbackStatus => "EV_FF_STATUS",
        };
        f.write_str(name)
    }
}

/// A (type, code) pair a device can be declared to emit.
///
/// This does not carry a value like up/down or a coordinate; see [`InputEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub event_type: EventType,
    pub code: u16,
}

impl Capability {
    pub const fn new(event_type: EventType, code: u16) -> Self {
        Self { event_type, code }
    }

    pub const fn key(code: u16) -> Self {
        Self::new(EventType::Key, code)
    }

    /// An event for this capability carrying `value`
    pub const fn event(self, value: i32) -> InputEvent {
        InputEvent::new(self.event_type, self.code, value)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:#x}", self.event_type, self.code)
    }
}

/// One discrete signal written to a device.
///
/// No timestamp is carried: every record is written with a zero time and the
/// kernel assigns the real one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub event_type: EventType,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    /// The synchronization marker that closes one input frame
    pub const SYNC: InputEvent = InputEvent::new(EventType::Synchronization, SYN_REPORT, 0);

    pub const fn new(event_type: EventType, code: u16, value: i32) -> Self {
        Self {
            event_type,
            code,
            value,
        }
    }

    pub fn is_sync(&self) -> bool {
        self.event_type == EventType::Synchronization && self.code == SYN_REPORT
    }

    pub(crate) fn to_raw(self) -> uinput::input_event {
        uinput::input_event::new(self.event_type.to_raw(), self.code, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusType {
    #[default]
    Usb,
    Bluetooth,
    Virtual,
}

impl BusType {
    pub fn to_raw(self) -> u16 {
        match self {
            BusType::Usb => uinput::BUS_USB,
            BusType::Bluetooth => uinput::BUS_BLUETOOTH,
            BusType::Virtual => uinput::BUS_VIRTUAL,
        }
    }
}

/// Name and ids a device presents to the system when it is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub name: String,
    #[serde(default)]
    pub bustype: BusType,
    #[serde(default)]
    pub vendor_id: u16,
    #[serde(default)]
    pub product_id: u16,
    #[serde(default)]
    pub version: u16,
}

impl DeviceIdentity {
    /// A USB device with zero vendor and product ids
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bustype: BusType::Usb,
            vendor_id: 0,
            product_id: 0,
            version: 0,
        }
    }

    pub fn with_ids(mut self, vendor_id: u16, product_id: u16) -> Self {
        self.vendor_id = vendor_id;
        self.product_id = product_id;
        self
    }

    pub fn with_bustype(mut self, bustype: BusType) -> Self {
        self.bustype = bustype;
        self
    }

    pub fn with_version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub(crate) fn input_id(&self) -> uinput::input_id {
        uinput::input_id {
            bustype: self.bustype.to_raw(),
            vendor: self.vendor_id,
            product: self.product_id,
            version: self.version,
        }
    }
}

/// Range configuration of an absolute axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbsInfo {
    #[serde(default)]
    pub value: i32,
    pub min: i32,
    pub max: i32,
    #[serde(default)]
    pub fuzz: i32,
    #[serde(default)]
    pub flat: i32,
    #[serde(default)]
    pub resolution: i32,
}

impl AbsInfo {
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            ..Default::default()
        }
    }

    pub(crate) fn to_raw(self) -> uinput::input_absinfo {
        uinput::input_absinfo {
            value: self.value,
            minimum: self.min,
            maximum: self.max,
            fuzz: self.fuzz,
            flat: self.flat,
            resolution: self.resolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_types_round_trip_through_the_enumeration() {
        for ty in EventType::ALL {
            assert_eq!(EventType::from_raw(ty.to_raw()), Some(ty));
        }
        assert_eq!(EventType::from_raw(0x06), None);
        assert_eq!(EventType::from_raw(EV_MAX), None);
    }

    #[test]
    fn declarable_types_map_to_their_own_namespace() {
        assert_eq!(EventType::Key.code_bit_request(), Some(uinput::UI_SET_KEYBIT));
        assert_eq!(EventType::Relative.code_bit_request(), Some(uinput::UI_SET_RELBIT));
        assert_eq!(EventType::Absolute.code_bit_request(), Some(uinput::UI_SET_ABSBIT));
        assert_eq!(EventType::Misc.code_bit_request(), Some(uinput::UI_SET_MSCBIT));
        assert_eq!(EventType::Switch.code_bit_request(), Some(uinput::UI_SET_SWBIT));
        assert_eq!(EventType::Led.code_bit_request(), Some(uinput::UI_SET_LEDBIT));
        assert_eq!(EventType::Sound.code_bit_request(), Some(uinput::UI_SET_SNDBIT));
        assert_eq!(EventType::ForceFeedback.code_bit_request(), Some(uinput::UI_SET_FFBIT));
    }

    #[test]
    fn non_declarable_types_have_no_namespace() {
        assert_eq!(EventType::Synchronization.code_bit_request(), None);
        assert_eq!(EventType::Repeat.code_bit_request(), None);
        assert_eq!(EventType::Power.code_bit_request(), None);
        assert_eq!(EventType::ForceFeedbackStatus.code_bit_request(), None);
    }

    #[test]
    fn sync_marker_is_recognised() {
        assert!(InputEvent::SYNC.is_sync());
        assert!(!InputEvent::new(EventType::Key, 30, 1).is_sync());
        assert!(!InputEvent::new(EventType::Synchronization, 2, 0).is_sync());

        let raw = InputEvent::SYNC.to_raw();
        assert_eq!((raw.type_, raw.code, raw.value), (EV_SYN, SYN_REPORT, 0));
    }

    #[test]
    fn identity_defaults_to_usb_with_zero_ids() {
        let id = DeviceIdentity::new("test-kbd").input_id();
        assert_eq!(id.bustype, uinput::BUS_USB);
        assert_eq!((id.vendor, id.product, id.version), (0, 0, 0));
    }

    #[test]
    fn identity_deserializes_with_defaults() {
        let identity: DeviceIdentity = serde_json::from_str(r#"{"name":"pad"}"#).unwrap();
        assert_eq!(identity, DeviceIdentity::new("pad"));

        let identity: DeviceIdentity = serde_json::from_str(
            r#"{"name":"pad","bustype":"bluetooth","vendor_id":1118,"product_id":654}"#,
        )
        .unwrap();
        assert_eq!(identity.bustype, BusType::Bluetooth);
        assert_eq!(identity.vendor_id, 0x045e);
        assert_eq!(identity.product_id, 0x028e);
    }
}
