//! Partition type codes
//!
//! reference: <https://en.wikipedia.org/wiki/Partition_type>

use core::fmt;
use num_enum::FromPrimitive;

/// The 8-bit system ID stored at offset 4 of a partition entry.
///
/// Codes without a variant land in `Unknown`, so a lookup never fails.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum PartitionType {
    Empty = 0x00,
    Fat12 = 0x01,
    Fat16Small = 0x04,
    Extended = 0x05,
    Fat16 = 0x06,
    Ntfs = 0x07,
    Fat32 = 0x0B,
    Fat32Lba = 0x0C,
    Fat16Lba = 0x0E,
    ExtendedLba = 0x0F,
    LinuxSwap = 0x82,
    Linux = 0x83,
    LinuxLvm = 0x8E,
    FreeBsd = 0xA5,
    GptProtective = 0xEE,
    EfiSystem = 0xEF,
    LinuxRaid = 0xFD,

    #[num_enum(catch_all)]
    Unknown(u8),
}

impl PartitionType {
    pub fn name(&self) -> &'static str {
        match self {
            PartitionType::Empty => "Empty",
            PartitionType::Fat12 => "FAT12",
            PartitionType::Fat16Small => "FAT16 <32M",
            PartitionType::Extended => "Extended",
            PartitionType::Fat16 => "FAT16",
            PartitionType::Ntfs => "HPFS/NTFS/exFAT",
            PartitionType::Fat32 => "W95 FAT32",
            PartitionType::Fat32Lba => "W95 FAT32 (LBA)",
            PartitionType::Fat16Lba => "W95 FAT16 (LBA)",
            PartitionType::ExtendedLba => "W95 Ext'd (LBA)",
            PartitionType::LinuxSwap => "Linux swap / Solaris",
            PartitionType::Linux => "Linux",
            PartitionType::LinuxLvm => "Linux LVM",
            PartitionType::FreeBsd => "FreeBSD",
            PartitionType::GptProtective => "GPT",
            PartitionType::EfiSystem => "EFI (FAT-12/16/32)",
            PartitionType::LinuxRaid => "Linux raid autodetect",
            PartitionType::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for PartitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
