//! One-dimensional sizing instructions passed from a container to its items.
//!
//! A [`SizeConstraint`] packs a [`MeasureMode`] and a non-negative magnitude
//! into a single `u32`: the top two bits hold the mode, the low thirty bits
//! hold the size.

use std::fmt;
use std::str::FromStr;

use crate::errors::LayoutError;
use crate::types::Dimension;

const MODE_SHIFT: u32 = 30;
const SIZE_MASK: u32 = (1 << MODE_SHIFT) - 1;

/// How strictly a [`SizeConstraint`] binds the measured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MeasureMode {
    /// The item may be any size it likes
    #[default]
    Unspecified,
    /// The item must be exactly the given size
    Exactly,
    /// The item may be at most the given size
    AtMost,
}

impl MeasureMode {
    const fn bits(self) -> u32 {
        match self {
            MeasureMode::Unspecified => 0,
            MeasureMode::Exactly => 1,
            MeasureMode::AtMost => 2,
        }
    }

    /// Name of this mode as written in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            MeasureMode::Unspecified => "unspecified",
            MeasureMode::Exactly => "exactly",
            MeasureMode::AtMost => "at-most",
        }
    }
}

impl FromStr for MeasureMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unspecified" => Ok(MeasureMode::Unspecified),
            "exactly" => Ok(MeasureMode::Exactly),
            "at-most" => Ok(MeasureMode::AtMost),
            other => Err(LayoutError::invalid_attribute("measure-mode", other)),
        }
    }
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A packed `(mode, size)` pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizeConstraint(u32);

impl SizeConstraint {
    /// Largest magnitude a constraint can carry. Also the "unbounded" max size of an item.
    pub const MAX_SIZE: i32 = SIZE_MASK as i32;

    /// Build a constraint, saturating `size` into `0..=MAX_SIZE`.
    pub const fn new(mode: MeasureMode, size: i32) -> Self {
        let size = if size < 0 {
            0
        } else if size > Self::MAX_SIZE {
            Self::MAX_SIZE
        } else {
            size
        };
        Self((mode.bits() << MODE_SHIFT) | size as u32)
    }

    pub const fn exactly(size: i32) -> Self {
        Self::new(MeasureMode::Exactly, size)
    }

    pub const fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    pub const fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    pub const fn mode(self) -> MeasureMode {
        match self.0 >> MODE_SHIFT {
            1 => MeasureMode::Exactly,
            2 => MeasureMode::AtMost,
            _ => MeasureMode::Unspecified,
        }
    }

    pub const fn size(self) -> i32 {
        (self.0 & SIZE_MASK) as i32
    }

    /// The packed representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_exactly(self) -> bool {
        matches!(self.mode(), MeasureMode::Exactly)
    }

    /// Same mode, different size.
    pub const fn with_size(self, size: i32) -> Self {
        Self::new(self.mode(), size)
    }

    /// Derive the constraint for a child from its parent's constraint.
    ///
    /// `padding` is the space the parent has already spent on this axis
    /// (its own padding, the child's margins, and any cross space taken by
    /// earlier lines). `percent` applies only to [`Dimension::MatchParent`].
    pub fn derive_child(parent: Self, padding: i32, child: Dimension, percent: f32) -> Self {
        let parent_size = parent.size();
        let available = parent_size.saturating_sub(padding).max(0);

        match child {
            Dimension::Fixed(size) => Self::exactly(size),
            Dimension::MatchParent => {
                let wanted = (f64::from(parent_size) * f64::from(percent)) as i32;
                Self::new(parent.mode(), wanted.min(available))
            }
            Dimension::WrapContent => match parent.mode() {
                MeasureMode::Exactly | MeasureMode::AtMost => Self::at_most(available),
                MeasureMode::Unspecified => Self::new(MeasureMode::Unspecified, available),
            },
        }
    }

    /// Size an item with no content opinion of its own would take.
    pub fn default_size(size: i32, constraint: Self) -> i32 {
        match constraint.mode() {
            MeasureMode::Unspecified => size,
            MeasureMode::Exactly | MeasureMode::AtMost => constraint.size(),
        }
    }

    /// Reconcile a desired size with this constraint.
    ///
    /// Returns the size to use and whether it is smaller than the desired
    /// size. Both `exactly` and `at-most` can come out too small; an
    /// unspecified size is only capped at [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn resolve(size: i32, constraint: Self) -> (i32, bool) {
        let too_small = constraint.size() < size;
        match constraint.mode() {
            MeasureMode::Unspecified => (size.min(Self::MAX_SIZE), false),
            MeasureMode::AtMost if too_small => (constraint.size(), true),
            MeasureMode::AtMost => (size, false),
            MeasureMode::Exactly => (constraint.size(), too_small),
        }
    }
}

impl TryFrom<u32> for SizeConstraint {
    type Error = LayoutError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        if bits >> MODE_SHIFT == 3 {
            return Err(LayoutError::invalid_attribute("measure-mode", bits >> MODE_SHIFT));
        }
        Ok(Self(bits))
    }
}

impl fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.mode(), self.size())
    }
}

impl fmt::Debug for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
