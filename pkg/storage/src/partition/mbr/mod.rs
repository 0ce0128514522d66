//! Master Boot Record
//!
//! reference: <https://wiki.osdev.org/MBR_(x86)>
//! reference: <https://en.wikipedia.org/wiki/Master_boot_record>

mod entry;
mod kind;

use crate::*;
pub use entry::*;
pub use kind::*;

/// Byte offsets of the fields an MBR sector is decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MbrLayout {
    pub sector_size: usize,
    pub identifier_offset: usize,
    pub table_offset: usize,
    pub signature_offset: usize,
}

impl MbrLayout {
    /// The classic DOS disklabel.
    pub const DOS: MbrLayout = MbrLayout {
        sector_size: BLOCK_SIZE,
        identifier_offset: 0x1B8,
        table_offset: 0x1BE,
        signature_offset: 0x1FE,
    };
}

impl Default for MbrLayout {
    fn default() -> Self {
        Self::DOS
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MbrTable {
    disk_identifier: u32,
    signature: u16,
    partitions: [MbrPartition; MbrTable::ENTRIES],
}

impl MbrTable {
    pub const ENTRIES: usize = 4;

    /// `0x55 0xAA` read as a little-endian word.
    pub const SIGNATURE: u16 = 0xAA55;

    /// Read block 0 of `inner` and decode it with the DOS layout.
    pub fn parse<T>(inner: &T) -> MbrResult<Self>
    where
        T: BlockDevice<Block512> + ?Sized,
    {
        let mut block = Block512::default();
        inner.read_block(0, &mut block)?;

        Self::parse_block(&block, &MbrLayout::DOS)
    }

    /// Decode a caller-supplied buffer. Only bytes `[0, 512)` are consulted.
    pub fn parse_bytes(buf: &[u8]) -> MbrResult<Self> {
        let block = Block512::from_slice(buf)?;
        Self::parse_block(&block, &MbrLayout::DOS)
    }

    /// Decode `block` with `layout`. A layout for any sector size other
    /// than the block's is rejected before any field is read.
    pub fn parse_block(block: &Block512, layout: &MbrLayout) -> MbrResult<Self> {
        let buffer = block.as_ref();

        if layout.sector_size != Block512::size() {
            return Err(MbrError::MalformedInput {
                expected: layout.sector_size,
                len: buffer.len(),
            });
        }

        let disk_identifier = u32::from_le_bytes(field(buffer, layout.identifier_offset)?);
        let signature = u16::from_le_bytes(field(buffer, layout.signature_offset)?);

        let mut partitions = [MbrPartition::default(); Self::ENTRIES];
        for (i, partition) in partitions.iter_mut().enumerate() {
            let offset = layout.table_offset + i * MbrPartition::LEN;
            *partition = MbrPartition::parse(&field(buffer, offset)?);
            trace!("Partition {}: {:#?}", i, partition);
        }

        debug!(
            "Parsed MBR: identifier 0x{:08X}, signature 0x{:04X}",
            disk_identifier, signature
        );

        Ok(Self {
            disk_identifier,
            signature,
            partitions,
        })
    }

    pub fn disk_identifier(&self) -> u32 {
        self.disk_identifier
    }

    pub fn signature(&self) -> u16 {
        self.signature
    }

    pub fn has_valid_signature(&self) -> bool {
        self.signature == Self::SIGNATURE
    }

    pub fn partitions(&self) -> &[MbrPartition; MbrTable::ENTRIES] {
        &self.partitions
    }

    pub fn partition(&self, index: usize) -> Option<&MbrPartition> {
        self.partitions.get(index)
    }
}

/// Copy `N` bytes starting at `offset` out of `buffer`.
fn field<const N: usize>(buffer: &[u8], offset: usize) -> MbrResult<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| buffer.get(offset..end))
        .and_then(|bytes| <[u8; N]>::try_from(bytes).ok())
        .ok_or(MbrError::MalformedInput {
            expected: offset.saturating_add(N),
            len: buffer.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two primary partitions: a bootable NTFS one and a Linux one.
    fn sample_sector() -> [u8; 512] {
        let mut sector = [0u8; 512];
        sector[0x1B8..0x1BC].copy_from_slice(&hex_literal::hex!("12 34 56 78"));
        sector[0x1BE..0x1DE].copy_from_slice(&hex_literal::hex!(
            "80 20 21 00 07 fe ff ff 00 08 00 00 00 20 03 00"
            "00 fe ff ff 83 fe ff ff 00 28 03 00 00 00 10 00"
        ));
        sector[0x1FE..].copy_from_slice(&hex_literal::hex!("55 aa"));
        sector
    }

    #[test]
    fn mbr_test() {
        let sector = sample_sector();
        let mbr = MbrTable::parse_bytes(&sector).unwrap();

        println!("{:#?}", mbr);

        assert_eq!(mbr.disk_identifier(), 0x78563412);
        assert!(mbr.has_valid_signature());

        let first = mbr.partition(0).unwrap();
        assert!(first.is_active());
        assert_eq!(first.kind(), PartitionType::Ntfs);
        assert_eq!(first.begin_lba(), 2048);
        assert_eq!(first.end_lba(), Some(206847));

        let second = mbr.partition(1).unwrap();
        assert!(!second.is_active());
        assert_eq!(second.kind(), PartitionType::Linux);
        assert_eq!(second.begin_lba(), 206848);
        assert_eq!(second.total_lba(), 1048576);

        // unused slots are still decoded
        assert_eq!(mbr.partitions().len(), 4);
        assert_eq!(mbr.partition(2).unwrap().kind(), PartitionType::Empty);
        assert_eq!(mbr.partition(3).unwrap().end_lba(), None);
        assert!(mbr.partition(4).is_none());
    }

    #[test]
    fn decoding_is_repeatable() {
        let sector = sample_sector();

        assert_eq!(
            MbrTable::parse_bytes(&sector),
            MbrTable::parse_bytes(&sector)
        );
        assert_eq!(
            MbrTable::parse(&sector[..]),
            MbrTable::parse_bytes(&sector)
        );
    }

    #[test]
    fn short_buffer_is_rejected() {
        let sector = sample_sector();

        assert_eq!(
            MbrTable::parse_bytes(&sector[..511]),
            Err(MbrError::MalformedInput {
                expected: 512,
                len: 511
            })
        );
        assert_eq!(
            MbrTable::parse_bytes(&[]),
            Err(MbrError::MalformedInput {
                expected: 512,
                len: 0
            })
        );
    }

    #[test]
    fn bytes_past_the_sector_are_ignored() {
        let mut image = [0xffu8; 1024];
        image[..512].copy_from_slice(&sample_sector());

        assert_eq!(
            MbrTable::parse_bytes(&image),
            MbrTable::parse_bytes(&sample_sector())
        );
    }

    #[test]
    fn garbage_entries_pass_through() {
        let mut sector = [0u8; 512];
        sector[0x1CE..0x1DE].copy_from_slice(&hex_literal::hex!(
            "01 ff ff ff ff ff ff ff ff ff ff ff 00 00 00 00"
        ));

        let mbr = MbrTable::parse_bytes(&sector).unwrap();
        let entry = mbr.partition(1).unwrap();

        assert!(!mbr.has_valid_signature());
        assert!(!entry.is_active());
        assert_eq!(entry.kind(), PartitionType::Unknown(0xFF));
        assert_eq!(entry.begin_lba(), u32::MAX);
        assert_eq!(entry.end_lba(), None);
    }

    #[test]
    fn layout_outside_block_is_malformed() {
        let layout = MbrLayout {
            table_offset: 0x1C2,
            ..MbrLayout::DOS
        };
        let block = Block512::new(&sample_sector());

        assert_eq!(
            MbrTable::parse_block(&block, &layout),
            Err(MbrError::MalformedInput {
                expected: 0x1C2 + 64,
                len: 512
            })
        );
    }

    #[test]
    fn layout_for_other_sector_size_is_rejected() {
        let layout = MbrLayout {
            sector_size: 4096,
            ..MbrLayout::DOS
        };
        let block = Block512::new(&sample_sector());

        assert_eq!(
            MbrTable::parse_block(&block, &layout),
            Err(MbrError::MalformedInput {
                expected: 4096,
                len: 512
            })
        );
        assert!(MbrTable::parse_block(&block, &MbrLayout::DOS).is_ok());
    }
}
