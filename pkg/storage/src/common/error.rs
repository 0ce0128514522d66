use core::fmt;

/// Failures of the underlying block device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    NotFound,
    PermissionDenied,
    ReadError,
    InvalidOffset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbrError {
    /// The source bytes could not be obtained at all.
    InputUnavailable(DeviceError),
    /// Fewer bytes than a full sector were available.
    MalformedInput { expected: usize, len: usize },
}

impl From<DeviceError> for MbrError {
    fn from(err: DeviceError) -> MbrError {
        MbrError::InputUnavailable(err)
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DeviceError::NotFound => "no such file or device",
            DeviceError::PermissionDenied => "permission denied",
            DeviceError::ReadError => "read error",
            DeviceError::InvalidOffset => "block offset out of range",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for MbrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MbrError::InputUnavailable(err) => write!(f, "input unavailable: {}", err),
            MbrError::MalformedInput { expected, len } => {
                write!(f, "malformed input: expected {} bytes, got {}", expected, len)
            }
        }
    }
}

impl core::error::Error for MbrError {}

pub type MbrResult<T = ()> = Result<T, MbrError>;
