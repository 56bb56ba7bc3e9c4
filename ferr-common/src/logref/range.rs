//! Numeric code ranges assigned to each daemon.
//!
//! | Prefix | Owner    | Range                     |
//! |--------|----------|---------------------------|
//! | 0x01   | babel    | 0x01000001 - 0x01FFFFFF   |
//! | 0x02   | bgp      | 0x02000001 - 0x02FFFFFF   |
//! | 0x03   | eigrp    | 0x03000001 - 0x03FFFFFF   |
//! | 0x04   | isis     | 0x04000001 - 0x04FFFFFF   |
//! | 0x05   | ldp      | 0x05000001 - 0x05FFFFFF   |
//! | 0x06   | lib      | 0x06000001 - 0x06FFFFFF   |
//! | 0x07   | nhrp     | 0x07000001 - 0x07FFFFFF   |
//! | 0x08   | ospf     | 0x08000001 - 0x08FFFFFF   |
//! | 0x09   | ospfv3   | 0x09000001 - 0x09FFFFFF   |
//! | 0x0A   | pbr      | 0x0A000001 - 0x0AFFFFFF   |
//! | 0x0B   | pim      | 0x0B000001 - 0x0BFFFFFF   |
//! | 0x0C   | rip      | 0x0C000001 - 0x0CFFFFFF   |
//! | 0x0D   | ripng    | 0x0D000001 - 0x0DFFFFFF   |
//! | 0x0E   | sharp    | 0x0E000001 - 0x0EFFFFFF   |
//! | 0x0F   | vrrp     | 0x0F000001 - 0x0FFFFFFF   |
//! | 0x10   | watchfrr | 0x10000001 - 0x10FFFFFF   |
//! | 0x11   | path     | 0x11000001 - 0x11FFFFFF   |
//! | 0xF1   | zebra    | 0xF1000001 - 0xF1FFFFFF   |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::END_FERR;

const OFFSET_MASK: u32 = 0x00FF_FFFF;

/// Owner of a block of log-reference codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FerrRange {
    Babel,
    Bgp,
    Eigrp,
    Isis,
    Ldp,
    Lib,
    Nhrp,
    Ospf,
    Ospfv3,
    Pbr,
    Pim,
    Rip,
    Ripng,
    Sharp,
    Vrrp,
    Watchfrr,
    Path,
    Zebra,
}

pub const LIB_FERR_START: u32 = FerrRange::Lib.start();
pub const LIB_FERR_END: u32 = FerrRange::Lib.end();

impl FerrRange {
    /// High byte shared by every code in the range.
    #[must_use]
    pub const fn prefix(&self) -> u8 {
        match self {
            Self::Babel => 0x01,
            Self::Bgp => 0x02,
            Self::Eigrp => 0x03,
            Self::Isis => 0x04,
            Self::Ldp => 0x05,
            Self::Lib => 0x06,
            Self::Nhrp => 0x07,
            Self::Ospf => 0x08,
            Self::Ospfv3 => 0x09,
            Self::Pbr => 0x0A,
            Self::Pim => 0x0B,
            Self::Rip => 0x0C,
            Self::Ripng => 0x0D,
            Self::Sharp => 0x0E,
            Self::Vrrp => 0x0F,
            Self::Watchfrr => 0x10,
            Self::Path => 0x11,
            Self::Zebra => 0xF1,
        }
    }

    /// First assignable code.
    #[must_use]
    pub const fn start(&self) -> u32 {
        ((self.prefix() as u32) << 24) | 1
    }

    /// Last assignable code.
    #[must_use]
    pub const fn end(&self) -> u32 {
        ((self.prefix() as u32) << 24) | OFFSET_MASK
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Babel => "babel",
            Self::Bgp => "bgp",
            Self::Eigrp => "eigrp",
            Self::Isis => "isis",
            Self::Ldp => "ldp",
            Self::Lib => "lib",
            Self::Nhrp => "nhrp",
            Self::Ospf => "ospf",
            Self::Ospfv3 => "ospfv3",
            Self::Pbr => "pbr",
            Self::Pim => "pim",
            Self::Rip => "rip",
            Self::Ripng => "ripng",
            Self::Sharp => "sharp",
            Self::Vrrp => "vrrp",
            Self::Watchfrr => "watchfrr",
            Self::Path => "path",
            Self::Zebra => "zebra",
        }
    }

    #[must_use]
    pub const fn contains(&self, code: u32) -> bool {
        code >= self.start() && code <= self.end()
    }

    /// Classifies a code. The zero offset of each block and the end marker
    /// belong to no range.
    #[must_use]
    pub fn of(code: u32) -> Option<Self> {
        if code == END_FERR || code & OFFSET_MASK == 0 {
            return None;
        }
        let prefix = (code >> 24) as u8;
        Self::all().iter().copied().find(|r| r.prefix() == prefix)
    }

    #[must_use]
    pub const fn all() -> &'static [FerrRange] {
        &[
            Self::Babel,
            Self::Bgp,
            Self::Eigrp,
            Self::Isis,
            Self::Ldp,
            Self::Lib,
            Self::Nhrp,
            Self::Ospf,
            Self::Ospfv3,
            Self::Pbr,
            Self::Pim,
            Self::Rip,
            Self::Ripng,
            Self::Sharp,
            Self::Vrrp,
            Self::Watchfrr,
            Self::Path,
            Self::Zebra,
        ]
    }
}

impl fmt::Display for FerrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_range_bounds() {
        assert_eq!(LIB_FERR_START, 0x0600_0001);
        assert_eq!(LIB_FERR_END, 0x06FF_FFFF);
    }

    #[test]
    fn test_zebra_range_is_high() {
        assert_eq!(FerrRange::Zebra.start(), 0xF100_0001);
        assert_eq!(FerrRange::of(0xF100_0001), Some(FerrRange::Zebra));
    }

    #[test]
    fn test_of_boundaries() {
        assert_eq!(FerrRange::of(LIB_FERR_START), Some(FerrRange::Lib));
        assert_eq!(FerrRange::of(LIB_FERR_END), Some(FerrRange::Lib));
        assert_eq!(FerrRange::of(0x0600_0000), None);
        assert_eq!(FerrRange::of(0x0700_0001), Some(FerrRange::Nhrp));
        assert_eq!(FerrRange::of(0), None);
        assert_eq!(FerrRange::of(END_FERR), None);
        assert_eq!(FerrRange::of(0x2000_0001), None);
    }

    #[test]
    fn test_prefixes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for range in FerrRange::all() {
            assert!(
                seen.insert(range.prefix()),
                "Duplicate prefix for {:?}",
                range
            );
        }
    }

    #[test]
    fn test_every_range_classifies_itself() {
        for range in FerrRange::all() {
            assert_eq!(FerrRange::of(range.start()), Some(*range));
            assert_eq!(FerrRange::of(range.end()), Some(*range));
            assert!(range.contains(range.start()));
            assert!(!range.contains(range.end() + 1));
        }
    }

    #[test]
    fn test_range_serialization() {
        let json = serde_json::to_string(&FerrRange::Ospfv3).expect("serialization failed");
        assert_eq!(json, "\"ospfv3\"");
    }
}
