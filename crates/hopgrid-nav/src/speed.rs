//! Per-unit movement speeds.

use std::fmt;

/// The unit types that share a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitKind {
    Castle,
    Church,
    Pilgrim,
    Crusader,
    Prophet,
    Preacher,
}

impl UnitKind {
    pub const ALL: [UnitKind; 6] = [
        Self::Castle,
        Self::Church,
        Self::Pilgrim,
        Self::Crusader,
        Self::Prophet,
        Self::Preacher,
    ];

    /// Maximum squared Euclidean length of one move.
    pub const fn speed(self) -> u32 {
        match self {
            Self::Castle | Self::Church => 0,
            Self::Pilgrim | Self::Prophet | Self::Preacher => 4,
            Self::Crusader => 9,
        }
    }

    /// Structures never move.
    #[inline]
    pub const fn is_mobile(self) -> bool {
        self.speed() > 0
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Castle => "castle",
            Self::Church => "church",
            Self::Pilgrim => "pilgrim",
            Self::Crusader => "crusader",
            Self::Prophet => "prophet",
            Self::Preacher => "preacher",
        };
        f.write_str(s)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn kind_names() {
        let json = serde_json::to_string(&UnitKind::Crusader).unwrap();
        assert_eq!(json, "\"crusader\"");
        let back: UnitKind = serde_json::from_str("\"prophet\"").unwrap();
        assert_eq!(back, UnitKind::Prophet);
    }
}
