//! Mapping between physical width/height and main/cross axes.

use trellis_core::{Dimension, Edges, ItemStyle, LayoutResult, SizeConstraint};

use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Axes {
    pub horizontal: bool,
}

impl Axes {
    pub fn new(horizontal: bool) -> Self {
        Self { horizontal }
    }

    /// `(width, height)` to `(main, cross)`.
    pub fn to_main_cross<T>(self, width: T, height: T) -> (T, T) {
        if self.horizontal {
            (width, height)
        } else {
            (height, width)
        }
    }

    /// `(main, cross)` to `(width, height)`. The swap is its own inverse.
    pub fn to_width_height<T>(self, main: T, cross: T) -> (T, T) {
        self.to_main_cross(main, cross)
    }

    /// Main-axis edges in physical order (left/right or top/bottom).
    pub fn main_edges(self, edges: Edges) -> (i32, i32) {
        if self.horizontal {
            (edges.left, edges.right)
        } else {
            (edges.top, edges.bottom)
        }
    }

    /// Cross-axis edges in physical order.
    pub fn cross_edges(self, edges: Edges) -> (i32, i32) {
        if self.horizontal {
            (edges.top, edges.bottom)
        } else {
            (edges.left, edges.right)
        }
    }

    pub fn main_margins(self, style: &ItemStyle) -> i32 {
        let (start, end) = self.main_edges(style.margin);
        start + end
    }

    pub fn cross_margins(self, style: &ItemStyle) -> i32 {
        let (start, end) = self.cross_edges(style.margin);
        start + end
    }

    pub fn main_size(self, item: &Item) -> i32 {
        let size = item.measured_size();
        self.to_main_cross(size.width, size.height).0
    }

    pub fn cross_size(self, item: &Item) -> i32 {
        let size = item.measured_size();
        self.to_main_cross(size.width, size.height).1
    }

    pub fn main_dimension(self, style: &ItemStyle) -> (Dimension, f32) {
        if self.horizontal {
            (style.width, style.width_percent)
        } else {
            (style.height, style.height_percent)
        }
    }

    pub fn cross_dimension(self, style: &ItemStyle) -> (Dimension, f32) {
        if self.horizontal {
            (style.height, style.height_percent)
        } else {
            (style.width, style.width_percent)
        }
    }

    /// `(min, max)` along the main axis.
    pub fn main_bounds(self, style: &ItemStyle) -> (i32, i32) {
        if self.horizontal {
            (style.min_width, style.max_width)
        } else {
            (style.min_height, style.max_height)
        }
    }

    /// `(min, max)` along the cross axis.
    pub fn cross_bounds(self, style: &ItemStyle) -> (i32, i32) {
        if self.horizontal {
            (style.min_height, style.max_height)
        } else {
            (style.min_width, style.max_width)
        }
    }

    pub fn measure(self, item: &mut Item, main: SizeConstraint, cross: SizeConstraint) -> LayoutResult<()> {
        let (width, height) = self.to_width_height(main, cross);
        item.measure(width, height)
    }
}
