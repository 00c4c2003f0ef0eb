use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, IntoRawFd, RawFd};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Exclusively owned, open uinput control node.
///
/// The descriptor is released exactly once: by [`UinputHandle::close`], or on
/// drop if the owner never closed it.
#[derive(Debug)]
pub struct UinputHandle {
    fd: RawFd,
    path: PathBuf,
}

impl UinputHandle {
    /// Open the node write-only and non-blocking
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(&path)
            .map_err(|source| Error::DeviceUnavailable {
                path: path.clone(),
                source,
            })?;
        let fd = file.into_raw_fd();

        trace!("Opened {} as fd {}", path.display(), fd);
        Ok(Self { fd, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Control call carrying an integer argument
    pub(crate) fn ioctl_int(&self, request: u64, arg: u32) -> io::Result<()> {
        let ret = unsafe { libc::ioctl(self.fd, request as _, arg as libc::c_ulong) };
        check(ret).map(drop)
    }

    /// Control call without an argument
    pub(crate) fn ioctl_none(&self, request: u64) -> io::Result<()> {
        let ret = unsafe { libc::ioctl(self.fd, request as _) };
        check(ret).map(drop)
    }

    /// Control call passing a struct to the kernel
    pub(crate) fn ioctl_ptr<T>(&self, request: u64, arg: &T) -> io::Result<()> {
        let ret = unsafe { libc::ioctl(self.fd, request as _, arg as *const T) };
        check(ret).map(drop)
    }

    /// Control call letting the kernel fill a buffer; returns the call's result
    pub(crate) fn ioctl_read<T>(&self, request: u64, out: &mut T) -> io::Result<libc::c_int> {
        let ret = unsafe { libc::ioctl(self.fd, request as _, out as *mut T) };
        check(ret)
    }

    /// Write `bytes` with a single write call.
    ///
    /// A partial write is reported as an error: the caller's records would be
    /// split across frames otherwise.
    pub(crate) fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let written = unsafe { libc::write(self.fd, bytes.as_ptr().cast(), bytes.len()) };
        if written < 0 {
            return Err(io::Error::last_os_error());
        }
        if written as usize != bytes.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {} of {} bytes", written, bytes.len()),
            ));
        }
        Ok(())
    }

    /// Release the descriptor, reporting a failing close
    pub fn close(mut self) -> Result<()> {
        let fd = std::mem::replace(&mut self.fd, -1);
        close_fd(fd).map_err(Error::HandleCloseFailed)?;
        trace!("Closed fd {}", fd);
        Ok(())
    }
}

impl AsRawFd for UinputHandle {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for UinputHandle {
    fn drop(&mut self) {
        if self.fd < 0 {
            return;
        }
        if let Err(e) = close_fd(self.fd) {
            warn!("Failed to close {} (fd {}): {}", self.path.display(), self.fd, e);
        }
    }
}

fn close_fd(fd: RawFd) -> io::Result<()> {
    if unsafe { libc::close(fd) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

fn check(ret: libc::c_int) -> io::Result<libc::c_int> {
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_node_is_unavailable() {
        let err = UinputHandle::open("/nonexistent/uinput").unwrap_err();
        match err {
            Error::DeviceUnavailable { path, source } => {
                assert_eq!(path, Path::new("/nonexistent/uinput"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn writes_and_closes_a_plain_file() {
        let path = std::env::temp_dir().join(format!("pewinput-handle-{}", std::process::id()));
        std::fs::write(&path, b"").unwrap();

        let handle = UinputHandle::open(&path).unwrap();
        handle.write_all(b"abcd").unwrap();
        handle.close().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"abcd");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn control_calls_on_a_plain_file_fail() {
        let path = std::env::temp_dir().join(format!("pewinput-ioctl-{}", std::process::id()));
        std::fs::write(&path, b"").unwrap();

        let handle = UinputHandle::open(&path).unwrap();
        assert!(handle.ioctl_none(crate::uinput::UI_DEV_CREATE).is_err());
        drop(handle);

        std::fs::remove_file(&path).unwrap();
    }
}
