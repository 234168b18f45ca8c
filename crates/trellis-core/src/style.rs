//! Item and container attribute sets.
//!
//! Both structs are plain configuration: public fields, a [`Default`] that
//! matches the engine's defaults, and `with_*` builders. With the `serde`
//! feature they load from configuration files using kebab-case keys.

use crate::constraint::SizeConstraint;
use crate::errors::LayoutError;
use crate::types::{
    AlignContent, AlignItems, AlignSelf, Dimension, Edges, FlexDirection, FlexWrap,
    JustifyContent, LayoutDirection, Visibility,
};

/// Attributes an item carries into its parent's flex pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct ItemStyle {
    /// Requested width
    pub width: Dimension,
    /// Requested height
    pub height: Dimension,
    /// Fraction of the parent width a match-parent width resolves to
    pub width_percent: f32,
    /// Fraction of the parent height a match-parent height resolves to
    pub height_percent: f32,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    /// Share of positive free space (0 = never grows)
    pub grow: f32,
    /// Share of negative free space (0 = never shrinks)
    pub shrink: f32,
    /// Main size as a fraction of the container's exact main size
    pub basis_percent: Option<f32>,
    /// Cross-axis alignment override
    pub align_self: AlignSelf,
    pub margin: Edges,
    pub visibility: Visibility,
    /// Force this item to start a new line
    pub wrap_before: bool,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            width: Dimension::WrapContent,
            height: Dimension::WrapContent,
            width_percent: 1.0,
            height_percent: 1.0,
            min_width: 0,
            min_height: 0,
            max_width: SizeConstraint::MAX_SIZE,
            max_height: SizeConstraint::MAX_SIZE,
            grow: 0.0,
            shrink: 1.0,
            basis_percent: None,
            align_self: AlignSelf::Auto,
            margin: Edges::ZERO,
            visibility: Visibility::Visible,
            wrap_before: false,
        }
    }
}

impl ItemStyle {
    /// Style with a fixed width and height.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self {
            width: Dimension::Fixed(width),
            height: Dimension::Fixed(height),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    pub fn with_width_percent(mut self, percent: f32) -> Self {
        self.width_percent = percent;
        self
    }

    pub fn with_height_percent(mut self, percent: f32) -> Self {
        self.height_percent = percent;
        self
    }

    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    pub fn with_max_size(mut self, width: i32, height: i32) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    pub fn with_grow(mut self, grow: f32) -> Self {
        self.grow = grow;
        self
    }

    pub fn with_shrink(mut self, shrink: f32) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn with_basis_percent(mut self, percent: f32) -> Self {
        self.basis_percent = Some(percent);
        self
    }

    pub fn with_align_self(mut self, align: AlignSelf) -> Self {
        self.align_self = align;
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_wrap_before(mut self, wrap_before: bool) -> Self {
        self.wrap_before = wrap_before;
        self
    }

    pub fn is_gone(&self) -> bool {
        self.visibility == Visibility::Gone
    }

    /// Reject numeric attributes the flex pass cannot work with.
    ///
    /// `index` is the item's position in its parent and ends up in the error.
    pub fn validate(&self, index: usize) -> Result<(), LayoutError> {
        if !self.grow.is_finite() || self.grow < 0.0 {
            return Err(LayoutError::invalid_item(index, "flex-grow", self.grow));
        }
        if !self.shrink.is_finite() || self.shrink < 0.0 {
            return Err(LayoutError::invalid_item(index, "flex-shrink", self.shrink));
        }
        if let Some(percent) = self.basis_percent {
            if !(percent > 0.0 && percent <= 1.0) {
                return Err(LayoutError::invalid_item(index, "flex-basis-percent", percent));
            }
        }
        for (attribute, dimension) in [("width", self.width), ("height", self.height)] {
            if let Dimension::Fixed(size) = dimension {
                if size < 0 {
                    return Err(LayoutError::invalid_item(index, attribute, size));
                }
            }
        }
        for (attribute, percent) in [
            ("width-percent", self.width_percent),
            ("height-percent", self.height_percent),
        ] {
            if !percent.is_finite() || percent < 0.0 {
                return Err(LayoutError::invalid_item(index, attribute, percent));
            }
        }
        Ok(())
    }
}

/// Attributes of a flex container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct ContainerStyle {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Upper bound on the number of lines (`None` = unbounded)
    pub max_line: Option<usize>,
    pub padding: Edges,
    pub layout_direction: LayoutDirection,
}

impl ContainerStyle {
    /// A left-to-right row that does not wrap.
    pub fn row() -> Self {
        Self::default()
    }

    /// A top-to-bottom column that does not wrap.
    pub fn column() -> Self {
        Self::default().with_direction(FlexDirection::Column)
    }

    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    pub fn with_align_content(mut self, align: AlignContent) -> Self {
        self.align_content = align;
        self
    }

    pub fn with_max_line(mut self, max_line: usize) -> Self {
        self.max_line = Some(max_line);
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    pub fn is_main_axis_horizontal(&self) -> bool {
        self.direction.is_horizontal()
    }

    /// Padding summed along the main axis.
    pub fn main_padding(&self) -> i32 {
        if self.is_main_axis_horizontal() {
            self.padding.horizontal()
        } else {
            self.padding.vertical()
        }
    }

    /// Padding summed along the cross axis.
    pub fn cross_padding(&self) -> i32 {
        if self.is_main_axis_horizontal() {
            self.padding.vertical()
        } else {
            self.padding.horizontal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let style = ItemStyle::default();
        assert_eq!(style.grow, 0.0);
        assert_eq!(style.shrink, 1.0);
        assert_eq!(style.basis_percent, None);
        assert_eq!(style.max_width, SizeConstraint::MAX_SIZE);
        assert_eq!(style.width, Dimension::WrapContent);
        assert!((style.height_percent - 1.0).abs() < 0.001);
        assert!(style.validate(0).is_ok());
    }

    #[test]
    fn test_item_validation() {
        let err = ItemStyle::default().with_grow(-1.0).validate(2).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidItem { index: 2, attribute: "flex-grow", .. }
        ));

        let err = ItemStyle::default().with_shrink(f32::NAN).validate(0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidItem { attribute: "flex-shrink", .. }));

        for percent in [0.0, -0.5, 1.5] {
            let err = ItemStyle::default()
                .with_basis_percent(percent)
                .validate(0)
                .unwrap_err();
            assert!(matches!(
                err,
                LayoutError::InvalidItem { attribute: "flex-basis-percent", .. }
            ));
        }
        assert!(ItemStyle::default().with_basis_percent(1.0).validate(0).is_ok());

        let err = ItemStyle::fixed(10, -1).validate(5).unwrap_err();
        assert_eq!(err.to_string(), "Item 5 has an invalid height: -1");
    }

    #[test]
    fn test_container_padding_axes() {
        let style = ContainerStyle::row().with_padding(Edges::new(1, 2, 3, 4));
        assert_eq!(style.main_padding(), 4);
        assert_eq!(style.cross_padding(), 6);

        let style = style.with_direction(FlexDirection::ColumnReverse);
        assert!(!style.is_main_axis_horizontal());
        assert_eq!(style.main_padding(), 6);
        assert_eq!(style.cross_padding(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_styles_from_json() {
        let style: ContainerStyle = serde_json::from_str(
            r#"{ "direction": "row-reverse", "wrap": "nowrap", "align-content": "space-around", "max-line": 2 }"#,
        )
        .unwrap();
        assert_eq!(style.direction, FlexDirection::RowReverse);
        assert_eq!(style.wrap, FlexWrap::NoWrap);
        assert_eq!(style.align_content, AlignContent::SpaceAround);
        assert_eq!(style.max_line, Some(2));
        assert_eq!(style.justify_content, JustifyContent::FlexStart);

        let item: ItemStyle = serde_json::from_str(
            r#"{ "width": { "fixed": 40 }, "height": "match-parent", "grow": 2.0, "align-self": "baseline" }"#,
        )
        .unwrap();
        assert_eq!(item.width, Dimension::Fixed(40));
        assert_eq!(item.height, Dimension::MatchParent);
        assert_eq!(item.align_self, AlignSelf::Baseline);
        assert!((item.shrink - 1.0).abs() < 0.001);
    }
}
