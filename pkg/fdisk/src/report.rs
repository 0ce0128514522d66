//! `fdisk -l` style rendering of a decoded MBR.

use std::io::{self, Write};
use storage::mbr::{MbrPartition, MbrTable};
use storage::HumanSize;

pub const HEADER: &str = "Device     Boot  Start       End   Sectors   Size Id Type";

/// Everything the report needs besides the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions<'a> {
    pub device: &'a str,
    pub disk_sectors: u64,
    pub sector_size: u64,
    /// Table entries to list, at most `MbrTable::ENTRIES`.
    pub partitions: usize,
}

pub fn boot_marker(partition: &MbrPartition) -> char {
    if partition.is_active() { '*' } else { ' ' }
}

pub fn partition_line(
    device: &str,
    index: usize,
    partition: &MbrPartition,
    sector_size: u64,
) -> String {
    let end = match partition.end_lba() {
        Some(end) => end.to_string(),
        None => "-".into(),
    };
    let size = HumanSize::from_sectors(partition.total_lba() as u64, sector_size);

    format!(
        "{}{}  {}  {:>10}  {:>10}  {:>10}  {}  0x{:02X}  {}",
        device,
        index,
        boot_marker(partition),
        partition.begin_lba(),
        end,
        partition.total_lba(),
        size,
        partition.partition_type(),
        partition.kind(),
    )
}

pub fn disk_summary(
    device: &str,
    disk_sectors: u64,
    disk_identifier: u32,
    sector_size: u64,
) -> Vec<String> {
    let size = HumanSize::from_sectors(disk_sectors, sector_size);

    vec![
        format!(
            "Disk {}: {}, {} bytes, {} sectors",
            device,
            size,
            size.bytes(),
            disk_sectors
        ),
        format!("Units: sectors of 1 * {} = {} bytes", sector_size, sector_size),
        format!(
            "Sector size (logical/physical): {} bytes / {} bytes",
            sector_size, sector_size
        ),
        format!(
            "I/O size (minimum/optimal): {} bytes / {} bytes",
            sector_size, sector_size
        ),
        "Disklabel type: dos".into(),
        format!("Disk identifier: 0x{:08X}", disk_identifier),
        String::new(),
    ]
}

/// The whole report, one entry per output line.
pub fn render(table: &MbrTable, options: &ReportOptions) -> Vec<String> {
    let mut lines = disk_summary(
        options.device,
        options.disk_sectors,
        table.disk_identifier(),
        options.sector_size,
    );
    lines.push(HEADER.into());

    let shown = options.partitions.min(MbrTable::ENTRIES);
    for (i, partition) in table.partitions().iter().take(shown).enumerate() {
        lines.push(partition_line(
            options.device,
            i + 1,
            partition,
            options.sector_size,
        ));
    }

    lines
}

/// Write `lines` to `out`, one per line.
///
/// A reader that goes away early (`mbrls img | head`) ends the report
/// quietly; any other write error is returned.
pub fn write_report<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    let result = lines
        .iter()
        .try_for_each(|line| writeln!(out, "{}", line))
        .and_then(|_| out.flush());

    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed early, stopping the report");
            Ok(())
        }
        other => other,
    }
}
