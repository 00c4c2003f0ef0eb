use crate::protocol::Capability;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The uinput node is missing or not writable by this process
    #[error("cannot open {}: {source}", path.display())]
    DeviceUnavailable { path: PathBuf, source: io::Error },

    #[error("kernel rejected capability {capability}: {source}")]
    CapabilityRejected {
        capability: Capability,
        source: io::Error,
    },

    #[error("event type {0:#04x} has no capability namespace")]
    UnsupportedEventType(u16),

    #[error("device name is {len} bytes, at most {max} fit")]
    NameTooLong { len: usize, max: usize },

    #[error("device name contains a NUL byte")]
    InvalidName,

    /// Creation was attempted before any capability was declared
    #[error("no capabilities declared")]
    NoCapabilities,

    #[error("device creation failed: {0}")]
    DeviceCreationFailed(#[source] io::Error),

    #[error("event write failed: {0}")]
    EventWriteFailed(#[source] io::Error),

    #[error("device teardown failed: {0}")]
    DeviceTeardownFailed(#[source] io::Error),

    #[error("closing uinput handle failed: {0}")]
    HandleCloseFailed(#[source] io::Error),

    #[error("device lookup failed: {0}")]
    Introspection(#[source] io::Error),

    #[error("cannot read profile {}: {source}", path.display())]
    ProfileRead { path: PathBuf, source: io::Error },

    #[error("malformed device profile: {0}")]
    ProfileFormat(#[from] serde_json::Error),
}

impl Error {
    /// True for a write that failed only because the kernel buffer was full
    pub fn is_would_block(&self) -> bool {
        matches!(self, Error::EventWriteFailed(e) if e.kind() == io::ErrorKind::WouldBlock)
    }
}
