//! Binary-scaled (1024-based) size rendering.

use core::fmt;

const SHORT_UNITS: [&str; 4] = ["B", "K", "M", "G"];
const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

pub fn humanized_size(size: u64) -> (f32, &'static str) {
    humanized_size_impl(size, false)
}

pub fn humanized_size_short(size: u64) -> (f32, &'static str) {
    humanized_size_impl(size, true)
}

#[inline]
pub fn humanized_size_impl(size: u64, short: bool) -> (f32, &'static str) {
    let units = if short { &SHORT_UNITS } else { &UNITS };

    let mut unit = 0;
    let mut bytes = size as f32;

    while bytes >= 1024f32 && unit < units.len() - 1 {
        bytes /= 1024f32;
        unit += 1;
    }

    (bytes, units[unit])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeUnit {
    Byte,
    Kibi,
    Mebi,
    Gibi,
}

impl SizeUnit {
    /// log2 of the unit in bytes.
    pub const fn shift(self) -> u32 {
        match self {
            SizeUnit::Byte => 0,
            SizeUnit::Kibi => 10,
            SizeUnit::Mebi => 20,
            SizeUnit::Gibi => 30,
        }
    }

    pub const fn suffix(self) -> &'static str {
        SHORT_UNITS[self as usize]
    }

    /// The largest unit whose size `bytes` meets or exceeds.
    pub const fn for_bytes(bytes: u64) -> Self {
        if bytes >= 1 << 30 {
            SizeUnit::Gibi
        } else if bytes >= 1 << 20 {
            SizeUnit::Mebi
        } else if bytes >= 1 << 10 {
            SizeUnit::Kibi
        } else {
            SizeUnit::Byte
        }
    }
}

/// A byte count paired with the unit it is displayed in.
///
/// `B` sizes print as a plain integer (`1023B`). Larger units print with one
/// fractional digit (`1.5G`), rounded half to even on the exact byte count,
/// so the output never depends on float formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanSize {
    bytes: u64,
    unit: SizeUnit,
}

impl HumanSize {
    pub const fn from_bytes(bytes: u64) -> Self {
        Self {
            bytes,
            unit: SizeUnit::for_bytes(bytes),
        }
    }

    /// `sectors * sector_size` bytes, saturating at `u64::MAX`.
    pub const fn from_sectors(sectors: u64, sector_size: u64) -> Self {
        Self::from_bytes(sectors.saturating_mul(sector_size))
    }

    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    pub const fn unit(&self) -> SizeUnit {
        self.unit
    }

    pub fn magnitude(&self) -> f64 {
        self.bytes as f64 / (1u64 << self.unit.shift()) as f64
    }

    /// The size in tenths of its unit, rounded half to even.
    pub fn tenths(&self) -> u128 {
        let divisor = 1u128 << self.unit.shift();
        let scaled = self.bytes as u128 * 10;
        let (quotient, remainder) = (scaled / divisor, scaled % divisor);

        // only reachable for B, where the divisor is 1
        if divisor == 1 {
            return quotient;
        }

        let half = divisor / 2;
        if remainder > half || (remainder == half && quotient % 2 == 1) {
            quotient + 1
        } else {
            quotient
        }
    }
}

impl fmt::Display for HumanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            SizeUnit::Byte => write!(f, "{}B", self.bytes),
            unit => {
                let tenths = self.tenths();
                write!(f, "{}.{}{}", tenths / 10, tenths % 10, unit.suffix())
            }
        }
    }
}
