use crate::error::DecoderError;
use ::nix::fcntl::OFlag;
use ::std::fs::{File, OpenOptions};
use ::std::io::{self, Read};
use ::std::os::unix::fs::OpenOptionsExt;
use ::std::os::unix::io::AsRawFd;
use ::std::path::{Path, PathBuf};
use ::tracing::{debug, warn};

mod ioctl {
    // EVIOCGRAB, see linux/input.h
    ::nix::ioctl_write_int!(eviocgrab, b'E', 0x90);
}

/// A digitizer character device opened for non-blocking reads.
#[derive(Debug)]
pub struct Device {
    file: File,
    path: PathBuf,
    grabbed: bool,
}

impl Device {
    /// Opens `path` read-only and non-blocking. With `grab` set, no other client
    /// receives the device's events until this handle is dropped.
    pub fn open(path: &Path, grab: bool) -> Result<Device, DecoderError> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(OFlag::O_NONBLOCK.bits())
            .open(path)
            .map_err(|source| DecoderError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        if grab {
            let result = unsafe { ioctl::eviocgrab(file.as_raw_fd(), 1) };
            result.map_err(|source| DecoderError::Grab {
                path: path.to_path_buf(),
                source,
            })?;
        }
        debug!(path = %path.display(), grab, "opened input device");
        Ok(Device {
            file,
            path: path.to_path_buf(),
            grabbed: grab,
        })
    }
}

impl Read for Device {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.file.read(buffer)
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        if self.grabbed {
            if let Err(error) = unsafe { ioctl::eviocgrab(self.file.as_raw_fd(), 0) } {
                warn!(path = %self.path.display(), %error, "can't release input device grab");
            }
        }
        // closing happens when `file` is dropped, errors from close(2) are ignored there
        debug!(path = %self.path.display(), "released input device");
    }
}
