//! Tests against the real uinput driver.
//!
//! They need a writable `/dev/uinput` and readable `/dev/input/event*` nodes
//! (usually root), so they are ignored by default:
//!
//! ```text
//! PEWINPUT_REQUIRE_UINPUT=1 cargo test --test uinput_device -- --ignored
//! ```
//!
//! Without `PEWINPUT_REQUIRE_UINPUT` a missing node makes a test return early
//! with a note on stderr. With it set, a missing node fails the test.

use pewinput::codes::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, KEY_A, KEY_P, KEY_Q, MSC_SCAN, REL_HWHEEL, REL_WHEEL, REL_X,
    REL_Y,
};
use pewinput::uinput::{eviocgbit, eviocgname, input_event};
use pewinput::{
    Capability, DeviceBuilder, DeviceIdentity, EV_ABS, EV_KEY, EV_MSC, EV_REL, EV_REP, EV_SYN, Error,
    EventType, SYN_REPORT, VirtualController, VirtualDevice,
};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::{Duration, Instant};

const READ_TIMEOUT: Duration = Duration::from_secs(2);
const REQUIRE_ENV: &str = "PEWINPUT_REQUIRE_UINPUT";

fn skip(test: &str, reason: std::fmt::Arguments<'_>) {
    if std::env::var_os(REQUIRE_ENV).is_some() {
        panic!("{test}: {reason} ({REQUIRE_ENV} is set)");
    }
    eprintln!("{test}: SKIPPED, {reason}");
}

fn open_or_skip(test: &str) -> Option<DeviceBuilder> {
    match DeviceBuilder::open() {
        Ok(builder) => Some(builder.settle_delay(Duration::from_millis(200))),
        Err(Error::DeviceUnavailable { path, source }) => {
            skip(test, format_args!("{} unavailable: {source}", path.display()));
            None
        }
        Err(e) => panic!("{test}: unexpected open error: {e}"),
    }
}

/// Open the device's evdev node for reading
fn event_reader(device: &VirtualDevice, test: &str) -> Option<File> {
    let node = device.event_nodes().unwrap().into_iter().next()?;
    let deadline = Instant::now() + READ_TIMEOUT;
    loop {
        match OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(&node)
        {
            Ok(file) => return Some(file),
            Err(e) if e.kind() == ErrorKind::NotFound && Instant::now() < deadline => {
                sleep(Duration::from_millis(10));
            }
            Err(e) => {
                skip(test, format_args!("cannot read {}: {e}", node.display()));
                return None;
            }
        }
    }
}

fn read_events(reader: &mut File, count: usize) -> Vec<input_event> {
    let mut events = Vec::new();
    let mut buf = [0u8; input_event::SIZE * 16];
    let deadline = Instant::now() + READ_TIMEOUT;

    while events.len() < count && Instant::now() < deadline {
        match reader.read(&mut buf) {
            Ok(n) => events.extend(
                buf[..n]
                    .chunks_exact(input_event::SIZE)
                    .filter_map(input_event::from_bytes),
            ),
            Err(e) if e.kind() == ErrorKind::WouldBlock => sleep(Duration::from_millis(5)),
            Err(e) => panic!("reading events failed: {e}"),
        }
    }
    events
}

fn fields(events: &[input_event]) -> Vec<(u16, u16, i32)> {
    events.iter().map(|e| (e.type_, e.code, e.value)).collect()
}

fn capability_bits(reader: &File, event_type: u16, len: usize) -> Vec<u8> {
    let mut bits = vec![0u8; len];
    let ret = unsafe {
        libc::ioctl(
            reader.as_raw_fd(),
            eviocgbit(event_type, len) as _,
            bits.as_mut_ptr(),
        )
    };
    assert!(ret >= 0, "EVIOCGBIT failed: {}", std::io::Error::last_os_error());
    bits
}

fn has_bit(bits: &[u8], bit: u16) -> bool {
    bits[bit as usize / 8] & (1 << (bit % 8)) != 0
}

fn device_name(reader: &File) -> String {
    let mut buf = [0u8; 256];
    let ret = unsafe {
        libc::ioctl(
            reader.as_raw_fd(),
            eviocgname(buf.len()) as _,
            buf.as_mut_ptr(),
        )
    };
    assert!(ret >= 0, "EVIOCGNAME failed: {}", std::io::Error::last_os_error());
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

fn wait_until_gone(path: &Path) -> bool {
    let deadline = Instant::now() + READ_TIMEOUT;
    while path.exists() {
        if Instant::now() >= deadline {
            return false;
        }
        sleep(Duration::from_millis(10));
    }
    true
}

#[test]
#[ignore = "needs a writable /dev/uinput"]
fn key_press_and_release_arrive_as_separate_frames() {
    let Some(mut builder) = open_or_skip("end_to_end") else {
        return;
    };
    builder.enable_raw(EV_KEY, 30).unwrap();
    let mut device = builder.create(&DeviceIdentity::new("test-kbd")).unwrap();

    let Some(mut reader) = event_reader(&device, "end_to_end") else {
        return;
    };
    assert_eq!(device_name(&reader), "test-kbd");

    device.send_event(EventType::Key, 30, 1).unwrap();
    device.flush().unwrap();
    device.send_event(EventType::Key, 30, 0).unwrap();
    device.flush().unwrap();

    let events = read_events(&mut reader, 4);
    assert_eq!(
        fields(&events),
        vec![
            (EV_KEY, 30, 1),
            (EV_SYN, SYN_REPORT, 0),
            (EV_KEY, 30, 0),
            (EV_SYN, SYN_REPORT, 0),
        ]
    );

    // The kernel stamps every record, never passing on the zero we wrote
    let stamps: Vec<(i64, i64)> = events
        .iter()
        .map(|e| (e.time.tv_sec as i64, e.time.tv_usec as i64))
        .collect();
    assert!(stamps.iter().all(|&stamp| stamp != (0, 0)));
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));

    device.destroy().unwrap().close().unwrap();
}

#[test]
#[ignore = "needs a writable /dev/uinput"]
fn declared_capabilities_are_present_after_creation() {
    let Some(mut builder) = open_or_skip("capabilities") else {
        return;
    };
    builder
        .enable_capabilities([BTN_LEFT, BTN_RIGHT, REL_X, REL_Y, REL_WHEEL])
        .unwrap();
    builder.enable_capability(MSC_SCAN).unwrap();
    let device = builder
        .create(&DeviceIdentity::new("pewinput-test-caps"))
        .unwrap();

    for capability in [BTN_LEFT, BTN_RIGHT, REL_X, REL_Y, REL_WHEEL, MSC_SCAN] {
        assert!(device.has_capability(capability));
    }

    let Some(reader) = event_reader(&device, "capabilities") else {
        return;
    };

    let types = capability_bits(&reader, 0, 4);
    for ty in [EV_SYN, EV_KEY, EV_REL, EV_MSC, EV_REP] {
        assert!(has_bit(&types, ty), "event type {ty:#x} missing");
    }
    assert!(!has_bit(&types, EV_ABS));

    let keys = capability_bits(&reader, EV_KEY, 96);
    assert!(has_bit(&keys, BTN_LEFT.code));
    assert!(has_bit(&keys, BTN_RIGHT.code));
    assert!(!has_bit(&keys, BTN_MIDDLE.code));

    let rel = capability_bits(&reader, EV_REL, 2);
    assert!(has_bit(&rel, REL_X.code));
    assert!(has_bit(&rel, REL_Y.code));
    assert!(has_bit(&rel, REL_WHEEL.code));
    assert!(!has_bit(&rel, REL_HWHEEL.code));

    device.destroy().unwrap().close().unwrap();
}

#[test]
#[ignore = "needs a writable /dev/uinput"]
fn key_repeat_is_enabled_once_for_many_keys() {
    let Some(mut builder) = open_or_skip("key_repeat") else {
        return;
    };
    assert!(!builder.has_key_repeat());

    for code in KEY_Q.code..=KEY_P.code {
        builder.enable_capability(Capability::key(code)).unwrap();
        assert!(builder.has_key_repeat());
    }
    // Declaring the same key twice is not an error either
    builder.enable_capability(KEY_Q).unwrap();
    assert_eq!(builder.capabilities().count(), 10);

    let device = builder
        .create(&DeviceIdentity::new("pewinput-test-repeat"))
        .unwrap();
    if let Some(reader) = event_reader(&device, "key_repeat") {
        let types = capability_bits(&reader, 0, 4);
        assert!(has_bit(&types, EV_REP));
    }
    device.destroy().unwrap().close().unwrap();
}

#[test]
#[ignore = "needs a writable /dev/uinput"]
fn creating_without_capabilities_always_fails() {
    for _ in 0..2 {
        let Some(builder) = open_or_skip("no_capabilities") else {
            return;
        };
        let err = builder
            .create(&DeviceIdentity::new("pewinput-test-empty"))
            .unwrap_err();
        assert!(matches!(err, Error::NoCapabilities), "got {err}");
    }
}

#[test]
#[ignore = "needs a writable /dev/uinput"]
fn overlong_name_is_refused() {
    let Some(mut builder) = open_or_skip("long_name") else {
        return;
    };
    builder.enable_capability(KEY_A).unwrap();
    let err = builder
        .create(&DeviceIdentity::new("x".repeat(200)))
        .unwrap_err();
    assert!(matches!(err, Error::NameTooLong { len: 200, max: 79 }));
}

#[test]
#[ignore = "needs a writable /dev/uinput"]
fn frame_is_delivered_whole() {
    let Some(mut builder) = open_or_skip("frame") else {
        return;
    };
    builder.enable_capabilities([BTN_LEFT, REL_X, REL_Y]).unwrap();
    let device = builder
        .create(&DeviceIdentity::new("pewinput-test-frame"))
        .unwrap();

    let Some(mut reader) = event_reader(&device, "frame") else {
        return;
    };

    let mut controller = VirtualController::new(device);
    let mut frame = controller.frame();
    frame.set(REL_X, 5).set(REL_Y, 7).press(BTN_LEFT);
    frame.commit().unwrap();

    let events = read_events(&mut reader, 4);
    assert_eq!(
        fields(&events),
        vec![
            (EV_REL, REL_X.code, 5),
            (EV_REL, REL_Y.code, 7),
            (EV_KEY, BTN_LEFT.code, 1),
            (EV_SYN, SYN_REPORT, 0),
        ]
    );

    controller.close().unwrap();
}

#[test]
#[ignore = "needs a writable /dev/uinput"]
fn close_after_destroy_succeeds() {
    let Some(mut builder) = open_or_skip("close_after_destroy") else {
        return;
    };
    builder.enable_capability(KEY_A).unwrap();
    let device = builder
        .create(&DeviceIdentity::new("pewinput-test-destroy"))
        .unwrap();
    let sys_path = device.sys_path().unwrap();
    assert!(sys_path.exists());

    let destroyed = device.destroy().unwrap();
    assert!(wait_until_gone(&sys_path));
    destroyed.close().unwrap();
}

#[test]
#[ignore = "needs a writable /dev/uinput"]
fn close_without_destroy_still_removes_the_device() {
    let Some(mut builder) = open_or_skip("close_without_destroy") else {
        return;
    };
    builder.enable_capability(KEY_A).unwrap();
    let device = builder
        .create(&DeviceIdentity::new("pewinput-test-leak"))
        .unwrap();
    let sys_path: PathBuf = device.sys_path().unwrap();

    device.close().unwrap();
    assert!(wait_until_gone(&sys_path));
}
