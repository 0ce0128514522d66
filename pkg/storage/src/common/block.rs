//! Fixed-size sector buffers.

use crate::*;
use core::fmt;

pub const BLOCK_SIZE: usize = 512;

/// An owned buffer holding exactly one block of `SIZE` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Block<const SIZE: usize> {
    contents: [u8; SIZE],
}

pub type Block512 = Block<BLOCK_SIZE>;

impl<const SIZE: usize> Block<SIZE> {
    pub fn new(data: &[u8; SIZE]) -> Self {
        Self { contents: *data }
    }

    /// Copy the first `SIZE` bytes of `data` into a new block.
    ///
    /// A shorter slice is rejected; it is never zero-filled.
    pub fn from_slice(data: &[u8]) -> MbrResult<Self> {
        let contents = data
            .get(..SIZE)
            .and_then(|head| <[u8; SIZE]>::try_from(head).ok())
            .ok_or(MbrError::MalformedInput {
                expected: SIZE,
                len: data.len(),
            })?;

        Ok(Self { contents })
    }

    pub const fn size() -> usize {
        SIZE
    }
}

impl<const SIZE: usize> Default for Block<SIZE> {
    fn default() -> Self {
        Self {
            contents: [0; SIZE],
        }
    }
}

impl<const SIZE: usize> AsRef<[u8]> for Block<SIZE> {
    fn as_ref(&self) -> &[u8] {
        &self.contents
    }
}

impl<const SIZE: usize> AsMut<[u8]> for Block<SIZE> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.contents
    }
}

impl<const SIZE: usize> fmt::Debug for Block<SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block<{}> {{", SIZE)?;
        for (row, chunk) in self.contents.chunks(16).enumerate() {
            write!(f, "    {:04x}:", row * 16)?;
            for byte in chunk {
                write!(f, " {:02x}", byte)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
