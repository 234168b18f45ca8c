//! A run of consecutive items sharing one cross-axis band.

use std::ops::Range;

use smallvec::SmallVec;
use trellis_core::Rect;

/// One flex line and its aggregates.
///
/// `main_size` includes the container's main-axis padding. Spacer lines
/// carry only a cross size and are inserted by `align-content`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlexLine {
    /// Index of the first item in the line
    pub first_index: usize,
    /// Index of the last item in the line (inclusive)
    pub last_index: usize,
    /// Items in the line, gone ones included
    pub item_count: usize,
    pub gone_item_count: usize,
    pub main_size: i32,
    pub cross_size: i32,
    pub total_grow: f64,
    pub total_shrink: f64,
    /// Largest distance from the line's cross start to an item baseline
    pub max_baseline: i32,
    /// Cross size taken by the lines before this one
    pub sum_cross_size_before: i32,
    /// Items whose own `align-self` is `stretch`
    pub indices_align_self_stretch: SmallVec<[usize; 4]>,
    /// Union of the margin boxes of the line's items, set during layout
    pub bounds: Option<Rect>,
    spacer: bool,
}

impl FlexLine {
    /// An empty line whose first item will be `first_index`.
    pub fn starting_at(first_index: usize, main_padding: i32) -> Self {
        Self {
            first_index,
            last_index: first_index,
            main_size: main_padding,
            ..Self::default()
        }
    }

    /// A line holding only cross-axis space.
    pub fn spacer(cross_size: i32) -> Self {
        Self {
            cross_size,
            spacer: true,
            ..Self::default()
        }
    }

    pub fn is_spacer(&self) -> bool {
        self.spacer
    }

    /// Items that take up space.
    pub fn visible_count(&self) -> usize {
        self.item_count - self.gone_item_count
    }

    /// Absolute indices of every item in the line.
    pub fn item_range(&self) -> Range<usize> {
        self.first_index..self.first_index + self.item_count
    }
}
