use ::std::io;
use ::std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    /// The device could not be opened.
    #[error("can't open input device {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The device was opened but exclusive access was refused.
    #[error("can't grab input device {}", .path.display())]
    Grab {
        path: PathBuf,
        #[source]
        source: ::nix::errno::Errno,
    },
    /// Reading from the device failed for a reason other than "no data available".
    #[error("reading input events failed")]
    Read(#[source] io::Error),
}

impl DecoderError {
    /// The underlying system error code, if there is one.
    pub fn errno(&self) -> Option<i32> {
        match self {
            DecoderError::Open { source, .. } => source.raw_os_error(),
            DecoderError::Grab { source, .. } => Some(*source as i32),
            DecoderError::Read(source) => source.raw_os_error(),
        }
    }
}
