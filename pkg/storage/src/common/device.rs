use crate::*;

/// A read-only source of fixed-size blocks.
pub trait BlockDevice<B>
where
    B: AsRef<[u8]> + AsMut<[u8]> + Default,
{
    /// Number of complete blocks the device holds.
    fn block_count(&self) -> MbrResult<usize>;

    /// Read the block at `offset` (in blocks) into `block`.
    ///
    /// A block that is only partly backed by data fails with
    /// [`MbrError::MalformedInput`] and leaves `block` untouched.
    fn read_block(&self, offset: usize, block: &mut B) -> MbrResult;
}

/// An in-memory image, e.g. a buffer already read by the caller.
impl<const SIZE: usize> BlockDevice<Block<SIZE>> for [u8] {
    fn block_count(&self) -> MbrResult<usize> {
        Ok(self.len() / SIZE)
    }

    fn read_block(&self, offset: usize, block: &mut Block<SIZE>) -> MbrResult {
        let start = offset
            .checked_mul(SIZE)
            .ok_or(DeviceError::InvalidOffset)?;
        let data = self.get(start..).ok_or(DeviceError::InvalidOffset)?;

        *block = Block::from_slice(data)?;
        Ok(())
    }
}
