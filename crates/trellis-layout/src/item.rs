//! Flex participants and the measurement protocol they answer to.

use std::fmt;

use trellis_core::{ItemStyle, LayoutResult, Rect, Size, SizeConstraint};

use crate::container::FlexContainer;

/// Content that reports its own size given constraints.
///
/// Text shaping, images and other intrinsic content live behind this trait;
/// the flex pass never looks inside.
pub trait Measure {
    /// Size this content wants under the given width and height constraints.
    fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> Size;

    /// Distance from the top edge to the first baseline.
    fn baseline(&self, _size: Size) -> i32 {
        0
    }

    /// Called after the item's frame changed.
    fn on_layout(&mut self, _frame: Rect) {}
}

impl<F> Measure for F
where
    F: FnMut(SizeConstraint, SizeConstraint) -> Size,
{
    fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> Size {
        self(width, height)
    }
}

/// Leaf content with a preferred size, clamped by each constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intrinsic {
    pub width: i32,
    pub height: i32,
    pub baseline: i32,
}

impl Intrinsic {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            baseline: 0,
        }
    }

    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = baseline;
        self
    }
}

impl Measure for Intrinsic {
    fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> Size {
        Size::new(
            SizeConstraint::resolve(self.width, width).0,
            SizeConstraint::resolve(self.height, height).0,
        )
    }

    fn baseline(&self, _size: Size) -> i32 {
        self.baseline
    }
}

/// What an item holds.
pub enum Content {
    /// Nothing: measures to its min size unless constrained
    Empty,
    /// Opaque content measured through [`Measure`]
    Leaf(Box<dyn Measure>),
    /// A nested flex container
    Container(Box<FlexContainer>),
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => f.write_str("Empty"),
            Content::Leaf(_) => f.write_str("Leaf(..)"),
            Content::Container(container) => f.debug_tuple("Container").field(container).finish(),
        }
    }
}

/// Set on a measured axis when the content wanted more than the constraint allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasuredState {
    pub width_too_small: bool,
    pub height_too_small: bool,
}

impl MeasuredState {
    /// Too small on an axis when either state is.
    pub fn union(self, other: Self) -> Self {
        Self {
            width_too_small: self.width_too_small || other.width_too_small,
            height_too_small: self.height_too_small || other.height_too_small,
        }
    }
}

/// A rectangle taking part in flex layout.
#[derive(Debug)]
pub struct Item {
    style: ItemStyle,
    content: Content,
    measured: Size,
    measured_state: MeasuredState,
    frame: Rect,
    needs_layout: bool,
}

impl Item {
    /// An item without content.
    pub fn new(style: ItemStyle) -> Self {
        Self::with_content(style, Content::Empty)
    }

    pub fn leaf(style: ItemStyle, measure: impl Measure + 'static) -> Self {
        Self::with_content(style, Content::Leaf(Box::new(measure)))
    }

    pub fn container(style: ItemStyle, container: FlexContainer) -> Self {
        Self::with_content(style, Content::Container(Box::new(container)))
    }

    pub fn with_content(style: ItemStyle, content: Content) -> Self {
        Self {
            style,
            content,
            measured: Size::default(),
            measured_state: MeasuredState::default(),
            frame: Rect::default(),
            needs_layout: true,
        }
    }

    pub fn style(&self) -> &ItemStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ItemStyle {
        &mut self.style
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn as_container(&self) -> Option<&FlexContainer> {
        match &self.content {
            Content::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut FlexContainer> {
        match &mut self.content {
            Content::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn measured_width(&self) -> i32 {
        self.measured.width
    }

    pub fn measured_height(&self) -> i32 {
        self.measured.height
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn measured_state(&self) -> MeasuredState {
        self.measured_state
    }

    /// Position relative to the parent's origin, as of the last layout.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn baseline(&self) -> i32 {
        match &self.content {
            Content::Leaf(measure) => measure.baseline(self.measured),
            Content::Empty | Content::Container(_) => 0,
        }
    }

    /// Measure this item, overwriting its measured size.
    ///
    /// Only nested containers can fail, with the first invalid attribute
    /// found in their subtree.
    pub fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> LayoutResult<()> {
        let (size, state) = match &mut self.content {
            Content::Empty => (
                Size::new(
                    SizeConstraint::default_size(self.style.min_width, width),
                    SizeConstraint::default_size(self.style.min_height, height),
                ),
                MeasuredState::default(),
            ),
            Content::Leaf(measure) => (measure.measure(width, height), MeasuredState::default()),
            Content::Container(container) => container.measure(width, height)?,
        };
        self.measured = size;
        self.measured_state = state;
        self.needs_layout = true;
        Ok(())
    }

    /// Commit a new frame. Returns whether it differs from the previous one.
    pub fn layout(&mut self, frame: Rect) -> bool {
        let changed = self.frame != frame;
        self.frame = frame;
        let relayout = changed || self.needs_layout;
        self.needs_layout = false;

        match &mut self.content {
            Content::Container(container) if relayout => container.layout(frame.size()),
            Content::Leaf(measure) if changed => measure.on_layout(frame),
            _ => {}
        }
        changed
    }
}
