//! Storage engine identifiers

use crate::BsmatError;

/// The storage engines implementing the shared matrix contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Engine {
    /// Sorted parallel row/column index arrays
    #[default]
    Compact = 0,
    /// Row and column hash maps kept in sync
    Map = 1,
    /// Zero-copy windows over a shared dual-map store
    Windowed = 2,
}

impl Engine {
    /// All engines, in identifier order
    pub const ALL: [Engine; 3] = [Engine::Compact, Engine::Map, Engine::Windowed];

    /// Whether slices and transposes of this engine share storage
    pub const fn aliases_views(&self) -> bool {
        matches!(self, Engine::Windowed)
    }
}

impl From<u8> for Engine {
    fn from(value: u8) -> Self {
        match value {
            0 => Engine::Compact,
            1 => Engine::Map,
            2 => Engine::Windowed,
            _ => Engine::Compact, // Default fallback
        }
    }
}

impl core::fmt::Display for Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Engine::Compact => write!(f, "compact"),
            Engine::Map => write!(f, "map"),
            Engine::Windowed => write!(f, "windowed"),
        }
    }
}

impl core::str::FromStr for Engine {
    type Err = BsmatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" | "csr" | "coo" => Ok(Engine::Compact),
            "map" | "dok" => Ok(Engine::Map),
            "windowed" | "window" => Ok(Engine::Windowed),
            _ => Err(BsmatError::InvalidArgument("unknown engine name")),
        }
    }
}
