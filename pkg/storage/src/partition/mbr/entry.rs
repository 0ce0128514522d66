//! Partition Metadata
//!
//! This struct represents one 16-byte entry of the MBR partition table.

use super::*;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct MbrPartition {
    data: [u8; MbrPartition::LEN],
}

impl MbrPartition {
    pub const LEN: usize = 16;

    /// Status byte of a bootable ("active") partition.
    pub const ACTIVE: u8 = 0x80;

    /// Parse a partition entry from the given data.
    pub fn parse(data: &[u8; MbrPartition::LEN]) -> MbrPartition {
        MbrPartition { data: *data }
    }

    define_field!(u8, 0x00, status);
    define_field!(u8, 0x01, begin_head);
    define_field!(u8, 0x04, partition_type);
    define_field!(u8, 0x05, end_head);
    define_field!(u32, 0x08, begin_lba);
    define_field!(u32, 0x0C, total_lba);
    define_field!([u8; 3], 0x01, begin_chs);
    define_field!([u8; 3], 0x05, end_chs);

    pub fn is_active(&self) -> bool {
        self.status() == Self::ACTIVE
    }

    pub fn kind(&self) -> PartitionType {
        PartitionType::from(self.partition_type())
    }

    /// Last LBA covered by the partition, or `None` when it has no sectors.
    pub fn end_lba(&self) -> Option<u64> {
        match self.total_lba() {
            0 => None,
            total => Some(self.begin_lba() as u64 + total as u64 - 1),
        }
    }

    // sector: bits 0-5, cylinder: bits 6-7 as the high bits, then one byte
    pub fn begin_sector(&self) -> u8 {
        self.data[0x02] & 0x3f
    }

    pub fn begin_cylinder(&self) -> u16 {
        ((self.data[0x02] as u16 & 0xc0) << 2) | (self.data[0x03] as u16)
    }

    pub fn end_sector(&self) -> u8 {
        self.data[0x06] & 0x3f
    }

    pub fn end_cylinder(&self) -> u16 {
        ((self.data[0x06] as u16 & 0xc0) << 2) | (self.data[0x07] as u16)
    }
}

impl core::fmt::Debug for MbrPartition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Partition Meta Data")
            .field("Active", &self.is_active())
            .field("Begin Head", &format_args!("0x{:02x}", self.begin_head()))
            .field("Begin Sector", &format_args!("0x{:04x}", self.begin_sector()))
            .field(
                "Begin Cylinder",
                &format_args!("0x{:04x}", self.begin_cylinder()),
            )
            .field(
                "Partition Type",
                &format_args!("0x{:02x} ({})", self.partition_type(), self.kind()),
            )
            .field("End Head", &format_args!("0x{:02x}", self.end_head()))
            .field("End Sector", &format_args!("0x{:04x}", self.end_sector()))
            .field("End Cylinder", &format_args!("0x{:04x}", self.end_cylinder()))
            .field("Begin LBA", &format_args!("0x{:08x}", self.begin_lba()))
            .field("Total LBA", &format_args!("0x{:08x}", self.total_lba()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_test() {
        let data = hex_literal::hex!("80 01 01 00 0b fe bf fc 3f 00 00 00 7e 86 bb 00");

        let meta = MbrPartition::parse(&data);

        println!("{:#?}", meta);

        assert!(meta.is_active());
        assert_eq!(meta.begin_head(), 1);
        assert_eq!(meta.begin_sector(), 1);
        assert_eq!(meta.begin_cylinder(), 0);
        assert_eq!(meta.begin_chs(), &[0x01, 0x01, 0x00]);
        assert_eq!(meta.partition_type(), 0x0b);
        assert_eq!(meta.kind(), PartitionType::Fat32);
        assert_eq!(meta.end_head(), 254);
        assert_eq!(meta.end_sector(), 63);
        assert_eq!(meta.end_cylinder(), 764);
        assert_eq!(meta.end_chs(), &[0xfe, 0xbf, 0xfc]);
        assert_eq!(meta.begin_lba(), 63);
        assert_eq!(meta.total_lba(), 12289662);
        assert_eq!(meta.end_lba(), Some(12289724));
    }

    #[test]
    fn boot_flag_only_accepts_0x80() {
        for (status, active) in [(0x80, true), (0x00, false), (0x01, false), (0x81, false)] {
            let mut data = [0u8; 16];
            data[0] = status;
            assert_eq!(MbrPartition::parse(&data).is_active(), active);
        }
    }

    #[test]
    fn end_lba_spans_the_sector_count() {
        let data = hex_literal::hex!("00 00 00 00 07 00 00 00 00 08 00 00 00 20 03 00");
        let meta = MbrPartition::parse(&data);

        assert_eq!(meta.begin_lba(), 2048);
        assert_eq!(meta.total_lba(), 204800);
        assert_eq!(meta.end_lba(), Some(206847));
    }

    #[test]
    fn zero_length_partition_has_no_end() {
        let data = hex_literal::hex!("00 00 00 00 83 00 00 00 00 00 00 00 00 00 00 00");
        assert_eq!(MbrPartition::parse(&data).end_lba(), None);

        // a zero-length entry at a non-zero start must not report start - 1
        let data = hex_literal::hex!("00 00 00 00 83 00 00 00 00 08 00 00 00 00 00 00");
        assert_eq!(MbrPartition::parse(&data).end_lba(), None);
    }

    #[test]
    fn end_lba_does_not_wrap_at_u32() {
        let data = hex_literal::hex!("00 00 00 00 83 00 00 00 ff ff ff ff ff ff ff ff");
        let meta = MbrPartition::parse(&data);

        assert_eq!(meta.end_lba(), Some(u32::MAX as u64 * 2 - 1));
    }
}
