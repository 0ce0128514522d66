//! Disk images on the host filesystem.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use storage::*;

/// A regular file or device node read as a sequence of 512-byte blocks.
pub struct FileDrive {
    path: PathBuf,
    file: File,
    len: u64,
}

impl FileDrive {
    pub fn open(path: impl AsRef<Path>) -> MbrResult<Self> {
        let path = path.as_ref();
        trace!("Opening image {}...", path.display());

        let file = File::open(path).map_err(|err| device_error(&err))?;
        let len = image_len(&file)?;

        let drive = Self {
            path: path.to_path_buf(),
            file,
            len,
        };
        info!("Drive {} opened", drive);
        Ok(drive)
    }

    pub fn byte_len(&self) -> u64 {
        self.len
    }
}

impl BlockDevice<Block512> for FileDrive {
    fn block_count(&self) -> MbrResult<usize> {
        usize::try_from(self.byte_len() / Block512::size() as u64)
            .map_err(|_| DeviceError::InvalidOffset.into())
    }

    fn read_block(&self, offset: usize, block: &mut Block512) -> MbrResult {
        let start = (offset as u64)
            .checked_mul(Block512::size() as u64)
            .ok_or(DeviceError::InvalidOffset)?;

        let mut file = &self.file;
        file.seek(SeekFrom::Start(start))
            .map_err(|err| device_error(&err))?;

        let mut buf = Vec::with_capacity(Block512::size());
        file.take(Block512::size() as u64)
            .read_to_end(&mut buf)
            .map_err(|err| device_error(&err))?;

        trace!("Read {} bytes at block {}", buf.len(), offset);
        *block = Block512::from_slice(&buf)?;
        Ok(())
    }
}

impl fmt::Display for FileDrive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (size, unit) = humanized_size(self.len);
        write!(f, "{} ({:.1} {})", self.path.display(), size, unit)
    }
}

/// Size of the image in bytes.
///
/// Block device nodes report a zero length in their metadata, so the end
/// offset is asked for first.
fn image_len(file: &File) -> MbrResult<u64> {
    let mut file = file;
    match file.seek(SeekFrom::End(0)) {
        Ok(len) => Ok(len),
        Err(err) => {
            debug!("Seek to end failed ({}), using metadata", err);
            Ok(file.metadata().map_err(|err| device_error(&err))?.len())
        }
    }
}

fn device_error(err: &io::Error) -> MbrError {
    warn!("I/O error: {}", err);

    let kind = match err.kind() {
        io::ErrorKind::NotFound => DeviceError::NotFound,
        io::ErrorKind::PermissionDenied => DeviceError::PermissionDenied,
        _ => DeviceError::ReadError,
    };
    MbrError::InputUnavailable(kind)
}
