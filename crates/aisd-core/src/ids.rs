//! Strongly typed identifier wrappers.
//!
//! Two families live here:
//!
//! - **Dense indices** (`SequenceId`, `EntityIndex`): `u32` wrappers with an
//!   `INVALID = u32::MAX` sentinel and `.index()` for direct `Vec` indexing.
//! - **Signed codes** (`StateId`, `ActionId`): `i64` wrappers.  Grid states
//!   may extrapolate below zero for out-of-range coordinates, and the
//!   terminal output row uses `-1` as its "no action / no successor" marker.

use std::fmt;

/// Generate a dense index wrapper around an unsigned integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

/// Generate a signed code wrapper with a `-1` sentinel.
macro_rules! signed_code {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub i64);

        impl $name {
            /// The `-1` marker written on terminal rows.
            pub const TERMINAL: $name = $name(-1);

            #[inline(always)]
            pub fn is_terminal(self) -> bool {
                self == Self::TERMINAL
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Dense zero-based alias of a surviving trajectory, as written to output.
    pub struct SequenceId(u32);
}

typed_id! {
    /// Position of an entity in first-seen input order (before filtering).
    pub struct EntityIndex(u32);
}

signed_code! {
    /// Row-major grid cell index: `row * num_cols + col`.
    pub struct StateId;
}

signed_code! {
    /// Elementary move code connecting two cells.  Meaning depends on the
    /// action policy in use (spiral index, 8-way or 4-way compass code).
    pub struct ActionId;
}
