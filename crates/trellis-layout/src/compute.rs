//! The layout cycle entry point.

use log::debug;
use trellis_core::{LayoutResult, Rect, SizeConstraint};

use crate::item::Item;

/// Options for a layout cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Constraint on the root's width
    pub width: SizeConstraint,
    /// Constraint on the root's height
    pub height: SizeConstraint,
    /// Top-left corner of the root frame
    pub origin: (i32, i32),
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: SizeConstraint::exactly(800),
            height: SizeConstraint::exactly(600),
            origin: (0, 0),
        }
    }
}

impl LayoutOptions {
    /// An exact viewport of `width` by `height` at the origin.
    pub fn viewport(width: i32, height: i32) -> Self {
        Self {
            width: SizeConstraint::exactly(width),
            height: SizeConstraint::exactly(height),
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, left: i32, top: i32) -> Self {
        self.origin = (left, top);
        self
    }
}

/// Run one measure and layout pass over the tree rooted at `root`.
///
/// Returns the root's frame. Every descendant's frame is relative to its
/// parent's origin.
pub fn compute_layout(root: &mut Item, options: &LayoutOptions) -> LayoutResult<Rect> {
    root.measure(options.width, options.height)?;
    let (left, top) = options.origin;
    let frame = Rect::from_origin(left, top, root.measured_size());
    root.layout(frame);
    debug!("layout cycle placed root at {frame:?}");
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::FlexContainer;
    use trellis_core::{ContainerStyle, Dimension, ItemStyle, LayoutError, Size};

    fn root(children: Vec<Item>) -> Item {
        Item::container(
            ItemStyle::default().with_width(Dimension::MatchParent),
            FlexContainer::with_children(ContainerStyle::row(), children),
        )
    }

    #[test]
    fn test_default_viewport() {
        let options = LayoutOptions::default();
        assert_eq!(options.width, SizeConstraint::exactly(800));
        assert_eq!(options.height, SizeConstraint::exactly(600));
        assert_eq!(options.origin, (0, 0));
    }

    #[test]
    fn test_root_frame_at_origin() {
        let mut tree = root(vec![Item::new(ItemStyle::fixed(40, 30))]);
        let frame = compute_layout(&mut tree, &LayoutOptions::viewport(200, 100).with_origin(10, 20)).unwrap();
        assert_eq!(frame, Rect::from_origin(10, 20, Size::new(200, 100)));
        assert_eq!(tree.frame(), frame);

        let child = tree.as_container().unwrap().child_at(0).unwrap();
        assert_eq!(child.frame(), Rect::new(0, 0, 40, 30));
    }

    #[test]
    fn test_loose_constraints_use_content_size() {
        let mut tree = root(vec![
            Item::new(ItemStyle::fixed(40, 30)),
            Item::new(ItemStyle::fixed(25, 10)),
        ]);
        let options = LayoutOptions {
            width: SizeConstraint::unspecified(),
            height: SizeConstraint::at_most(500),
            origin: (0, 0),
        };
        let frame = compute_layout(&mut tree, &options).unwrap();
        assert_eq!(frame.size(), Size::new(65, 30));
    }

    #[test]
    fn test_errors_propagate() {
        let mut tree = root(vec![Item::new(ItemStyle::fixed(-5, 10))]);
        let err = compute_layout(&mut tree, &LayoutOptions::default()).unwrap_err();
        assert_eq!(err, LayoutError::invalid_item(0, "width", -5));
    }
}
