//! The flex pass: partition, main-axis and cross-axis resolution, stretch,
//! and positioning.
//!
//! A container drives the stages in this order:
//!
//! 1. [`FlexEngine::partition`] measures every item and splits them into lines
//! 2. [`FlexEngine::resolve_main_axis`] grows or shrinks items to fill each line
//! 3. [`FlexEngine::resolve_cross_axis`] distributes cross space between lines
//! 4. [`FlexEngine::stretch`] stretches items to their line's cross size
//! 5. [`FlexEngine::position_line`] assigns every item its frame

mod axis;
mod cross_axis;
mod main_axis;
mod partition;
mod position;
mod stretch;

use trellis_core::{ContainerStyle, FlexDirection, FlexWrap, ItemStyle, LayoutDirection, SizeConstraint};

use crate::item::Item;
use crate::line::FlexLine;

pub(crate) use axis::Axes;

/// Ordered children as the flex pass sees them.
///
/// An index with no item counts as a gone item: a zero-size gap.
pub trait ItemSource {
    fn item_count(&self) -> usize;

    fn item(&self, index: usize) -> Option<&Item>;

    fn item_mut(&mut self, index: usize) -> Option<&mut Item>;
}

impl ItemSource for [Item] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<&Item> {
        self.get(index)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.get_mut(index)
    }
}

impl ItemSource for [Option<Item>] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<&Item> {
        self.get(index).and_then(Option::as_ref)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.get_mut(index).and_then(Option::as_mut)
    }
}

/// Runs the flex stages for one container's attributes.
#[derive(Debug, Clone, Copy)]
pub struct FlexEngine<'a> {
    style: &'a ContainerStyle,
}

impl<'a> FlexEngine<'a> {
    pub fn new(style: &'a ContainerStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ContainerStyle {
        self.style
    }

    pub(crate) fn axes(&self) -> Axes {
        Axes::new(self.style.is_main_axis_horizontal())
    }

    fn is_rtl(&self) -> bool {
        self.style.layout_direction == LayoutDirection::Rtl
    }

    /// Whether items run from the physical right (or bottom) edge.
    pub fn is_main_reversed(&self) -> bool {
        match self.style.direction {
            FlexDirection::Row => self.is_rtl(),
            FlexDirection::RowReverse => !self.is_rtl(),
            FlexDirection::Column => false,
            FlexDirection::ColumnReverse => true,
        }
    }

    /// Whether lines stack from the physical bottom (or right) edge.
    pub fn is_cross_reversed(&self) -> bool {
        let wrap_reverse = self.style.wrap == FlexWrap::WrapReverse;
        if self.style.is_main_axis_horizontal() {
            wrap_reverse
        } else {
            wrap_reverse != self.is_rtl()
        }
    }

    /// Widest line main size, padding included.
    pub fn largest_main_size(&self, lines: &[FlexLine]) -> i32 {
        lines
            .iter()
            .map(|line| line.main_size)
            .max()
            .unwrap_or_else(|| self.style.main_padding())
    }

    /// Sum of every line's cross size, spacers included.
    pub fn sum_of_cross_size(&self, lines: &[FlexLine]) -> i32 {
        lines
            .iter()
            .fold(0, |sum: i32, line| sum.saturating_add(line.cross_size))
    }

    /// Constraint on an item's cross axis, given the cross space already used.
    fn child_cross_constraint(&self, style: &ItemStyle, cross: SizeConstraint, used: i32) -> SizeConstraint {
        let axes = self.axes();
        let (dimension, percent) = axes.cross_dimension(style);
        SizeConstraint::derive_child(
            cross,
            (self.style.cross_padding() + axes.cross_margins(style)).saturating_add(used),
            dimension,
            percent,
        )
    }
}
