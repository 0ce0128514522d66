//! mbrls: print the DOS partition table of a raw disk image.

#[macro_use]
extern crate log;

mod config;
mod device;
mod logger;
mod report;

use config::{Config, DiskSectors};
use device::FileDrive;
use report::ReportOptions;
use std::io;
use std::process::ExitCode;
use storage::mbr::{MbrLayout, MbrTable};
use storage::*;

fn main() -> ExitCode {
    logger::init();

    let config = Config::from_env();
    logger::set_level(config.log_level);
    debug!("Config: {:#?}", config);

    let args: Vec<String> = std::env::args().collect();
    let [_, path] = args.as_slice() else {
        let program = args.first().map_or("mbrls", String::as_str);
        eprintln!("Usage: {} <mbr-image>", program);
        return ExitCode::FAILURE;
    };

    match run(path, &config) {
        Ok(lines) => match report::write_report(&mut io::stdout().lock(), &lines) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("Failed to write report: {}", err);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            error!("Failed to list {}: {}", path, err);
            eprintln!("mbrls: {}: {}", path, err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, config: &Config) -> MbrResult<Vec<String>> {
    let drive = FileDrive::open(path)?;
    let table = MbrTable::parse(&drive)?;

    if !table.has_valid_signature() {
        warn!("Invalid MBR signature: 0x{:04X}", table.signature());
    }

    let disk_sectors = match config.disk_sectors {
        DiskSectors::Fixed(sectors) => sectors,
        DiskSectors::Auto => drive.block_count()? as u64,
    };
    let sector_size = MbrLayout::DOS.sector_size as u64;
    let (size, unit) = humanized_size(disk_sectors.saturating_mul(sector_size));
    info!("Reporting {} sectors ({:.1} {})", disk_sectors, size, unit);

    let options = ReportOptions {
        device: &config.device,
        disk_sectors,
        sector_size,
        partitions: config.partitions,
    };
    Ok(report::render(&table, &options))
}
