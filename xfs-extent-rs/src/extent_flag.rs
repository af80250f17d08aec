use std::fmt;

/// State of an extent, stored in the most significant bit of the record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtentFlag {
    /// A regular, written extent.
    #[default]
    Normal,
    /// Allocated but never written, usually left behind by preallocation.
    Unwritten,
}

impl ExtentFlag {
    /// Maps the record's flag bit to a flag; a set bit means unwritten.
    pub fn from_bit(set: bool) -> Self {
        if set {
            ExtentFlag::Unwritten
        } else {
            ExtentFlag::Normal
        }
    }

    /// Returns `true` for [`ExtentFlag::Unwritten`].
    pub fn is_unwritten(self) -> bool {
        self == ExtentFlag::Unwritten
    }
}

impl fmt::Display for ExtentFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtentFlag::Normal => f.write_str("normal"),
            ExtentFlag::Unwritten => f.write_str("unwritten"),
        }
    }
}
