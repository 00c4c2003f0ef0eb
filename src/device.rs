//! Device lifecycle.
//!
//! Each lifecycle phase is its own type and every transition consumes the
//! previous one:
//!
//! ```text
//! DeviceBuilder --create--> VirtualDevice --destroy--> DestroyedDevice --close--> (released)
//! ```
//!
//! Capabilities can therefore only be declared before creation, events can
//! only be written to a created device, and a destroyed device cannot be
//! created again on the same handle. Any phase may be closed early; dropping
//! a phase releases the handle as well.

use crate::error::{Error, Result};
use crate::handle::UinputHandle;
use crate::protocol::{AbsInfo, Capability, DeviceIdentity, EventType, InputEvent};
use crate::uinput::{self, UINPUT_MAX_NAME_SIZE, UINPUT_PATH};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Pause after creation before the device is reliably visible to other
/// processes. The kernel offers no readiness signal for this.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

const SYSFS_INPUT_PATH: &str = "/sys/devices/virtual/input";
const SYSNAME_BUF_LEN: usize = 64;

/// An opened uinput handle collecting capability declarations
#[derive(Debug)]
pub struct DeviceBuilder {
    handle: UinputHandle,
    event_types: BTreeSet<EventType>,
    capabilities: BTreeSet<Capability>,
    abs_axes: BTreeMap<u16, AbsInfo>,
    settle_delay: Duration,
}

impl DeviceBuilder {
    /// Open `/dev/uinput`
    pub fn open() -> Result<Self> {
        Self::open_path(UINPUT_PATH)
    }

    /// Open a uinput node at a non-default location
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let builder = Self::from_handle(UinputHandle::open(path)?);

        match builder.kernel_version() {
            Ok(version) => debug!(
                "Opened {}; uinput version {:#x}",
                builder.handle.path().display(),
                version
            ),
            Err(e) => debug!(
                "Opened {}; uinput version unknown: {}",
                builder.handle.path().display(),
                e
            ),
        }

        Ok(builder)
    }

    pub fn from_handle(handle: UinputHandle) -> Self {
        Self {
            handle,
            event_types: BTreeSet::new(),
            capabilities: BTreeSet::new(),
            abs_axes: BTreeMap::new(),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    /// Version of the kernel's uinput interface
    pub fn kernel_version(&self) -> Result<u32> {
        let mut version: libc::c_uint = 0;
        self.handle
            .ioctl_read(uinput::UI_GET_VERSION, &mut version)
            .map_err(Error::Introspection)?;
        Ok(version)
    }

    /// Set the pause taken after creation. Zero disables it.
    pub fn set_settle_delay(&mut self, delay: Duration) {
        self.settle_delay = delay;
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.set_settle_delay(delay);
        self
    }

    /// Declare that the device will emit `capability`.
    ///
    /// The event type bit is enabled the first time one of its codes is
    /// declared. Declaring a key also enables key repeat, once per device.
    pub fn enable_capability(&mut self, capability: Capability) -> Result<()> {
        let event_type = capability.event_type;
        let request = event_type
            .code_bit_request()
            .ok_or(Error::UnsupportedEventType(event_type.to_raw()))?;

        let rejected = |source| Error::CapabilityRejected { capability, source };

        if event_type == EventType::Key {
            self.enable_type(EventType::Repeat).map_err(rejected)?;
        }
        self.enable_type(event_type).map_err(rejected)?;
        self.handle
            .ioctl_int(request, capability.code.into())
            .map_err(rejected)?;

        if self.capabilities.insert(capability) {
            trace!("Enabled {}", capability);
        }
        Ok(())
    }

    /// Declare a raw `(type, code)` pair
    pub fn enable_raw(&mut self, event_type: u16, code: u16) -> Result<()> {
        let event_type =
            EventType::from_raw(event_type).ok_or(Error::UnsupportedEventType(event_type))?;
        self.enable_capability(Capability::new(event_type, code))
    }

    pub fn enable_capabilities(
        &mut self,
        capabilities: impl IntoIterator<Item = Capability>,
    ) -> Result<()> {
        capabilities
            .into_iter()
            .try_for_each(|capability| self.enable_capability(capability))
    }

    /// Declare an absolute axis together with its range
    pub fn enable_abs_axis(&mut self, code: u16, info: AbsInfo) -> Result<()> {
        let capability = Capability::new(EventType::Absolute, code);
        self.enable_capability(capability)?;

        let setup = uinput::uinput_abs_setup {
            code,
            absinfo: info.to_raw(),
        };
        self.handle
            .ioctl_ptr(uinput::UI_ABS_SETUP, &setup)
            .map_err(|source| Error::CapabilityRejected { capability, source })?;

        trace!("Axis {:#x} range [{}, {}]", code, info.min, info.max);
        self.abs_axes.insert(code, info);
        Ok(())
    }

    pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter()
    }

    pub fn has_key_repeat(&self) -> bool {
        self.event_types.contains(&EventType::Repeat)
    }

    /// Register the device with the kernel.
    ///
    /// The name is checked against the kernel's buffer and the declaration set
    /// must not be empty; both checks happen before any control call. On
    /// failure the handle is released.
    pub fn create(self, identity: &DeviceIdentity) -> Result<VirtualDevice> {
        let setup = device_setup(identity)?;
        if self.capabilities.is_empty() {
            return Err(Error::NoCapabilities);
        }

        self.handle
            .ioctl_ptr(uinput::UI_DEV_SETUP, &setup)
            .map_err(Error::DeviceCreationFailed)?;
        self.handle
            .ioctl_none(uinput::UI_DEV_CREATE)
            .map_err(Error::DeviceCreationFailed)?;

        info!(
            "Created device \"{}\" with {} capabilities",
            identity.name,
            self.capabilities.len()
        );

        if !self.settle_delay.is_zero() {
            debug!("Waiting {:?} for the device to settle", self.settle_delay);
            std::thread::sleep(self.settle_delay);
        }

        Ok(VirtualDevice {
            handle: self.handle,
            identity: identity.clone(),
            capabilities: self.capabilities,
            abs_axes: self.abs_axes,
        })
    }

    /// Release the handle without creating a device
    pub fn close(self) -> Result<()> {
        self.handle.close()
    }

    fn enable_type(&mut self, event_type: EventType) -> std::io::Result<()> {
        if self.event_types.contains(&event_type) {
            return Ok(());
        }
        self.handle
            .ioctl_int(uinput::UI_SET_EVBIT, event_type.to_raw().into())?;
        self.event_types.insert(event_type);
        trace!("Enabled event type {}", event_type);
        Ok(())
    }
}

/// Build the setup record, refusing names that do not fit the kernel buffer
pub(crate) fn device_setup(identity: &DeviceIdentity) -> Result<uinput::uinput_setup> {
    let name = identity.name.as_bytes();
    if name.contains(&0) {
        return Err(Error::InvalidName);
    }
    // One byte stays reserved for the terminator
    if name.len() >= UINPUT_MAX_NAME_SIZE {
        return Err(Error::NameTooLong {
            len: name.len(),
            max: UINPUT_MAX_NAME_SIZE - 1,
        });
    }

    let mut setup = uinput::uinput_setup::zeroed();
    setup.id = identity.input_id();
    setup.name[..name.len()].copy_from_slice(name);
    Ok(setup)
}

/// A device registered with the kernel
#[derive(Debug)]
pub struct VirtualDevice {
    handle: UinputHandle,
    identity: DeviceIdentity,
    capabilities: BTreeSet<Capability>,
    abs_axes: BTreeMap<u16, AbsInfo>,
}

impl VirtualDevice {
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter()
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn abs_info(&self, code: u16) -> Option<&AbsInfo> {
        self.abs_axes.get(&code)
    }

    /// Write one event. It stays buffered by the kernel until [`flush`](Self::flush).
    pub fn send_event(&mut self, event_type: EventType, code: u16, value: i32) -> Result<()> {
        self.send_raw(event_type.to_raw(), code, value)
    }

    pub fn send(&mut self, event: InputEvent) -> Result<()> {
        self.send_event(event.event_type, event.code, event.value)
    }

    /// Write an event without interpreting its type
    pub fn send_raw(&mut self, event_type: u16, code: u16, value: i32) -> Result<()> {
        let event = uinput::input_event::new(event_type, code, value);
        trace!("Event type={} code={} value={}", event_type, code, value);
        self.handle
            .write_all(event.as_bytes())
            .map_err(Error::EventWriteFailed)
    }

    /// Close the current frame with a sync marker
    pub fn flush(&mut self) -> Result<()> {
        self.send(InputEvent::SYNC)
    }

    /// Write `events` as one frame in a single write.
    ///
    /// A sync marker is appended unless the slice already ends with one.
    pub fn emit(&mut self, events: &[InputEvent]) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }

        let data = encode_frame(events);
        trace!("Emitting {} bytes for {} events", data.len(), events.len());
        self.handle.write_all(&data).map_err(Error::EventWriteFailed)
    }

    /// Kernel name of the device, e.g. `input42`
    pub fn sysname(&self) -> Result<String> {
        let mut buf = [0u8; SYSNAME_BUF_LEN];
        self.handle
            .ioctl_read(uinput::ui_get_sysname(buf.len()), &mut buf)
            .map_err(Error::Introspection)?;

        let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Ok(String::from_utf8_lossy(&buf[..len]).into_owned())
    }

    /// sysfs directory of the device
    pub fn sys_path(&self) -> Result<PathBuf> {
        Ok(Path::new(SYSFS_INPUT_PATH).join(self.sysname()?))
    }

    /// Event nodes the device surfaced as, e.g. `/dev/input/event7`
    pub fn event_nodes(&self) -> Result<Vec<PathBuf>> {
        let sys_path = self.sys_path()?;
        let mut nodes = Vec::new();

        for entry in std::fs::read_dir(&sys_path).map_err(Error::Introspection)? {
            let entry = entry.map_err(Error::Introspection)?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with("event") {
                nodes.push(Path::new("/dev/input").join(name));
            }
        }

        nodes.sort();
        Ok(nodes)
    }

    /// Unregister the device. On failure the handle is still released.
    pub fn destroy(self) -> Result<DestroyedDevice> {
        self.handle
            .ioctl_none(uinput::UI_DEV_DESTROY)
            .map_err(Error::DeviceTeardownFailed)?;

        info!("Destroyed device \"{}\"", self.identity.name);
        Ok(DestroyedDevice {
            handle: self.handle,
        })
    }

    /// Release the handle without destroying first; the kernel tears the
    /// device down when its handle goes away.
    pub fn close(self) -> Result<()> {
        debug!("Closing device \"{}\" without destroy", self.identity.name);
        self.handle.close()
    }
}

/// A device that was unregistered but whose handle is still open
#[derive(Debug)]
pub struct DestroyedDevice {
    handle: UinputHandle,
}

impl DestroyedDevice {
    pub fn close(self) -> Result<()> {
        self.handle.close()
    }
}

pub(crate) fn encode_frame(events: &[InputEvent]) -> Vec<u8> {
    let needs_sync = !events.last().is_some_and(InputEvent::is_sync);
    let count = events.len() + usize::from(needs_sync);

    let mut data = Vec::with_capacity(count * uinput::input_event::SIZE);
    let tail = needs_sync.then_some(InputEvent::SYNC);
    for event in events.iter().copied().chain(tail) {
        data.extend_from_slice(event.to_raw().as_bytes());
    }
    data
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A "device" backed by a plain file, recording every record written to it
    pub(crate) struct RecordingDevice {
        path: PathBuf,
    }

    impl RecordingDevice {
        pub(crate) fn new(tag: &str) -> Self {
            let path =
                std::env::temp_dir().join(format!("pewinput-rec-{}-{}", tag, std::process::id()));
            std::fs::write(&path, b"").unwrap();
            Self { path }
        }

        pub(crate) fn device(&self) -> VirtualDevice {
            device_at(&self.path)
        }

        pub(crate) fn path(&self) -> &Path {
            &self.path
        }

        pub(crate) fn events(&self) -> Vec<(u16, u16, i32)> {
            std::fs::read(&self.path)
                .unwrap()
                .chunks(uinput::input_event::SIZE)
                .map(|chunk| {
                    let event = uinput::input_event::from_bytes(chunk).unwrap();
                    (event.type_, event.code, event.value)
                })
                .collect()
        }
    }

    /// A created device whose handle points at an arbitrary node
    pub(crate) fn device_at(path: &Path) -> VirtualDevice {
        VirtualDevice {
            handle: UinputHandle::open(path).unwrap(),
            identity: DeviceIdentity::new("recording"),
            capabilities: BTreeSet::new(),
            abs_axes: BTreeMap::new(),
        }
    }

    impl Drop for RecordingDevice {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{RecordingDevice, device_at};
    use super::*;
    use crate::codes::{KEY_A, REL_X, REL_Y};
    use crate::protocol::{EV_KEY, EV_SYN, SYN_REPORT};

    fn decode(data: &[u8]) -> Vec<(u16, u16, i32)> {
        data.chunks(uinput::input_event::SIZE)
            .map(|chunk| {
                let event = uinput::input_event::from_bytes(chunk).unwrap();
                assert_eq!(event.time.tv_sec, 0);
                assert_eq!(event.time.tv_usec, 0);
                (event.type_, event.code, event.value)
            })
            .collect()
    }

    fn temp_builder(tag: &str) -> (DeviceBuilder, PathBuf) {
        let path = std::env::temp_dir().join(format!("pewinput-{}-{}", tag, std::process::id()));
        std::fs::write(&path, b"").unwrap();
        let builder = DeviceBuilder::open_path(&path).unwrap();
        (builder, path)
    }

    #[test]
    fn setup_copies_name_and_ids() {
        let identity = DeviceIdentity::new("test-kbd").with_ids(0x1234, 0x5678);
        let setup = device_setup(&identity).unwrap();

        assert_eq!(&setup.name[..8], b"test-kbd");
        assert!(setup.name[8..].iter().all(|&b| b == 0));
        assert_eq!(setup.id.bustype, uinput::BUS_USB);
        assert_eq!(setup.id.vendor, 0x1234);
        assert_eq!(setup.id.product, 0x5678);
        assert_eq!(setup.ff_effects_max, 0);
    }

    #[test]
    fn setup_accepts_the_longest_name_that_fits() {
        let name = "n".repeat(UINPUT_MAX_NAME_SIZE - 1);
        let setup = device_setup(&DeviceIdentity::new(name)).unwrap();
        assert_eq!(setup.name[UINPUT_MAX_NAME_SIZE - 1], 0);
    }

    #[test]
    fn setup_rejects_overlong_names() {
        let name = "n".repeat(UINPUT_MAX_NAME_SIZE);
        match device_setup(&DeviceIdentity::new(name)) {
            Err(Error::NameTooLong { len, max }) => {
                assert_eq!(len, UINPUT_MAX_NAME_SIZE);
                assert_eq!(max, UINPUT_MAX_NAME_SIZE - 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn setup_rejects_interior_nul() {
        assert!(matches!(
            device_setup(&DeviceIdentity::new("bad\0name")),
            Err(Error::InvalidName)
        ));
    }

    #[test]
    fn frame_gets_a_trailing_sync() {
        let data = encode_frame(&[REL_X.event(5), REL_Y.event(-3)]);
        assert_eq!(
            decode(&data),
            vec![(0x02, 0x00, 5), (0x02, 0x01, -3), (EV_SYN, SYN_REPORT, 0)]
        );
    }

    #[test]
    fn frame_ending_in_sync_is_left_alone() {
        let data = encode_frame(&[KEY_A.event(1), InputEvent::SYNC]);
        assert_eq!(decode(&data), vec![(EV_KEY, 30, 1), (EV_SYN, SYN_REPORT, 0)]);
    }

    #[test]
    fn send_and_flush_write_zero_stamped_records() {
        let recording = RecordingDevice::new("send");
        let mut device = recording.device();

        device.send_event(EventType::Key, 30, 1).unwrap();
        device.flush().unwrap();
        device.send_raw(0x1f, 7, -2).unwrap();
        device.close().unwrap();

        assert_eq!(
            recording.events(),
            vec![(EV_KEY, 30, 1), (EV_SYN, SYN_REPORT, 0), (0x1f, 7, -2)]
        );
        let bytes = std::fs::read(recording.path()).unwrap();
        decode(&bytes);
    }

    #[test]
    fn emit_of_nothing_writes_nothing() {
        let recording = RecordingDevice::new("emit-empty");
        let mut device = recording.device();
        device.emit(&[]).unwrap();
        assert!(recording.events().is_empty());
    }

    #[test]
    fn failed_writes_are_reported() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        let mut device = device_at(full);

        let err = device.flush().unwrap_err();
        assert!(matches!(err, Error::EventWriteFailed(_)), "got {err}");
        assert!(!err.is_would_block());
        assert!(matches!(
            device.send_event(EventType::Key, 30, 1),
            Err(Error::EventWriteFailed(_))
        ));
        assert!(matches!(
            device.emit(&[KEY_A.event(1)]),
            Err(Error::EventWriteFailed(_))
        ));
        device.close().unwrap();
    }

    #[test]
    fn failed_teardown_is_reported() {
        let recording = RecordingDevice::new("destroy");
        let err = recording.device().destroy().unwrap_err();
        match err {
            Error::DeviceTeardownFailed(source) => {
                assert_eq!(source.raw_os_error(), Some(libc::ENOTTY))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn create_without_capabilities_fails_before_the_kernel_is_asked() {
        let (builder, path) = temp_builder("nocaps");
        let err = builder.create(&DeviceIdentity::new("empty")).unwrap_err();
        assert!(matches!(err, Error::NoCapabilities));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unsupported_types_are_rejected_without_a_control_call() {
        let (mut builder, path) = temp_builder("unsupported");

        assert!(matches!(
            builder.enable_raw(0x06, 0),
            Err(Error::UnsupportedEventType(0x06))
        ));
        assert!(matches!(
            builder.enable_capability(Capability::new(EventType::Synchronization, 0)),
            Err(Error::UnsupportedEventType(0x00))
        ));
        assert!(matches!(
            builder.enable_capability(Capability::new(EventType::Repeat, 0)),
            Err(Error::UnsupportedEventType(0x14))
        ));
        assert_eq!(builder.capabilities().count(), 0);

        builder.close().unwrap();
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejected_declarations_surface_as_capability_errors() {
        let (mut builder, path) = temp_builder("rejected");

        match builder.enable_capability(KEY_A) {
            Err(Error::CapabilityRejected { capability, .. }) => assert_eq!(capability, KEY_A),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!builder.has_key_repeat());

        builder.close().unwrap();
        std::fs::remove_file(&path).unwrap();
    }
}
