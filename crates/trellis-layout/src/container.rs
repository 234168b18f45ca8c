//! Flex containers: ordered children plus the lines computed for them.

use log::debug;
use trellis_core::{ContainerStyle, LayoutResult, Size, SizeConstraint};

use crate::flex::FlexEngine;
use crate::item::{Item, MeasuredState};
use crate::line::FlexLine;

/// A container laying out its children with the flex algorithm.
///
/// Lines are recomputed by every [`measure`](Self::measure) and consumed by
/// the following [`layout`](Self::layout).
#[derive(Debug, Default)]
pub struct FlexContainer {
    style: ContainerStyle,
    children: Vec<Item>,
    lines: Vec<FlexLine>,
    measured_state: MeasuredState,
}

impl FlexContainer {
    pub fn new(style: ContainerStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_children(style: ContainerStyle, children: impl IntoIterator<Item = Item>) -> Self {
        Self {
            style,
            children: children.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn style(&self) -> &ContainerStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ContainerStyle {
        &mut self.style
    }

    pub fn children(&self) -> &[Item] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Item] {
        &mut self.children
    }

    pub fn child_at(&self, index: usize) -> Option<&Item> {
        self.children.get(index)
    }

    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.children.get_mut(index)
    }

    pub fn push(&mut self, child: Item) {
        self.children.push(child);
    }

    /// Insert at `index`, or append when it is past the end.
    pub fn insert(&mut self, index: usize, child: Item) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    pub fn remove(&mut self, index: usize) -> Option<Item> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn clear(&mut self) {
        self.children.clear();
        self.lines.clear();
    }

    /// Lines from the last measure, without `align-content` spacers.
    pub fn flex_lines(&self) -> impl Iterator<Item = &FlexLine> + '_ {
        self.lines.iter().filter(|line| !line.is_spacer())
    }

    pub fn largest_main_size(&self) -> i32 {
        FlexEngine::new(&self.style).largest_main_size(&self.lines)
    }

    pub fn sum_of_cross_size(&self) -> i32 {
        FlexEngine::new(&self.style).sum_of_cross_size(&self.lines)
    }

    pub fn measured_state(&self) -> MeasuredState {
        self.measured_state
    }

    /// Measure every child, build the lines and work out this container's size.
    ///
    /// The returned state is too small on an axis when this container's
    /// content overflowed its constraint there, or when any visible child
    /// reported the same.
    pub fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> LayoutResult<(Size, MeasuredState)> {
        let engine = FlexEngine::new(&self.style);
        let axes = engine.axes();
        let (main, cross) = axes.to_main_cross(width, height);
        let children = self.children.as_mut_slice();

        engine.partition(children, main, cross, &mut self.lines)?;
        engine.resolve_main_axis(children, main, cross, &mut self.lines)?;
        engine.resolve_cross_axis(cross, &mut self.lines);
        engine.stretch(children, &self.lines)?;

        let (main_size, main_too_small) =
            SizeConstraint::resolve(engine.largest_main_size(&self.lines), main);
        let (cross_size, cross_too_small) = SizeConstraint::resolve(
            engine
                .sum_of_cross_size(&self.lines)
                .saturating_add(self.style.cross_padding()),
            cross,
        );

        let (width, height) = axes.to_width_height(main_size, cross_size);
        let (width_too_small, height_too_small) = axes.to_width_height(main_too_small, cross_too_small);
        self.measured_state = self
            .children
            .iter()
            .filter(|child| !child.style().is_gone())
            .fold(
                MeasuredState {
                    width_too_small,
                    height_too_small,
                },
                |state, child| state.union(child.measured_state()),
            );
        debug!(
            "measured {} children in {} lines: {width}x{height}",
            self.children.len(),
            self.lines.len()
        );
        Ok((Size::new(width, height), self.measured_state))
    }

    /// Position the children inside a box of `size`, using the lines from
    /// the last measure.
    pub fn layout(&mut self, size: Size) {
        let engine = FlexEngine::new(&self.style);
        let mut cross_offset = 0;
        for line in &mut self.lines {
            engine.position_line(self.children.as_mut_slice(), line, size, cross_offset);
            cross_offset += line.cross_size;
        }
    }
}
