//! Runtime configuration, read from `MBRLS_*` environment variables.

use crate::logger::parse_log_level;
use log::LevelFilter;
use storage::mbr::MbrTable;

const ENV_PREFIX: &str = "MBRLS_";

pub const DEFAULT_DEVICE: &str = "/dev/sda";
pub const DEFAULT_DISK_SECTORS: u64 = 16_777_216;
pub const DEFAULT_PARTITIONS: usize = 2;

/// Where the reported disk size comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskSectors {
    /// A fixed sector count, independent of the input.
    Fixed(u64),
    /// The number of whole sectors in the input.
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    /// Base device name; partitions are `<device><index>`.
    pub device: String,
    pub disk_sectors: DiskSectors,
    /// Number of table entries shown, 1 to 4.
    pub partitions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            device: DEFAULT_DEVICE.into(),
            disk_sectors: DiskSectors::Fixed(DEFAULT_DISK_SECTORS),
            partitions: DEFAULT_PARTITIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            if let Some(key) = key.strip_prefix(ENV_PREFIX) {
                config.process(&key.to_ascii_lowercase(), value.trim());
            }
        }

        config
    }

    fn process(&mut self, key: &str, value: &str) {
        match key {
            "log_level" => self.log_level = parse_log_level(value),
            "device" => {
                if value.is_empty() {
                    warn!("Empty device name, keeping '{}'", self.device);
                } else {
                    self.device = value.into();
                }
            }
            "disk_sectors" => {
                if value.eq_ignore_ascii_case("auto") {
                    self.disk_sectors = DiskSectors::Auto;
                } else {
                    match value.parse() {
                        Ok(sectors) => self.disk_sectors = DiskSectors::Fixed(sectors),
                        Err(err) => warn!("Invalid disk_sectors '{}': {}", value, err),
                    }
                }
            }
            "partitions" => match value.parse::<usize>() {
                Ok(count) => self.partitions = count.clamp(1, MbrTable::ENTRIES),
                Err(err) => warn!("Invalid partitions '{}': {}", value, err),
            },
            _ => warn!("Undefined config key: {}", key),
        }
    }
}
