//! Positional string masks.
//!
//! A mask is a template mixing literal characters with token characters drawn
//! from a [`TokenCatalog`]. Processing pairs mask positions with the characters
//! of a raw value, either left-to-right or right-to-left, and yields the
//! formatted text together with a validity flag.
//!
//! ```
//! use strmask::{Options, StringMask};
//!
//! let phone = StringMask::new("(000) 000-0000");
//! assert_eq!(phone.apply("1234567890"), "(123) 456-7890");
//!
//! let money = StringMask::with_options("#.##0,00", Options::reversed());
//! assert_eq!(money.apply("123456"), "1.234,56");
//! ```

extern crate self as strmask;

#[macro_use]
mod macros;
mod api;
mod engine;
mod tokens;

pub use api::{MaskReport, MaskResult, Options, ScanDetails, StringMask, apply, normalize_value, process, validate};
pub use engine::{HaltReason, MaskProcessor, PatternAnalyzer, ScanStep, ScanTrace, StepKind, insert_at, place};
pub use tokens::{
    CatalogError, DEFAULT_CATALOG, Matcher, Symbol, Token, TokenCatalog, TokenFlags, TokenSpec, Transform, TransformSpec,
    symbols,
};

// --- Shared types -----------------------------------------------------------

/// Scan direction.
///
/// The direction drives both cursor movement and placement: forward scans
/// append to the result, reverse scans prepend to it, so the final text reads
/// left-to-right either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Signed cursor increment for this direction.
    pub const fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    pub const fn is_reverse(self) -> bool {
        matches!(self, Direction::Reverse)
    }

    /// First index visited when scanning a sequence of `len` items.
    ///
    /// For an empty reverse scan this is `-1`, which is already out of bounds.
    pub(crate) const fn start(self, len: usize) -> isize {
        match self {
            Direction::Forward => 0,
            Direction::Reverse => len as isize - 1,
        }
    }
}

impl From<bool> for Direction {
    /// `true` means reverse.
    fn from(reverse: bool) -> Self {
        if reverse { Direction::Reverse } else { Direction::Forward }
    }
}
