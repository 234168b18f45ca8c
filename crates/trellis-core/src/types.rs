//! Attribute enums and integer geometry shared by the layout crates.

use std::fmt;
use std::str::FromStr;

use crate::errors::LayoutError;

/// Declares an attribute enum with its numeric encoding and style-sheet name.
///
/// Generates `as_str`, `raw`, `ALL`, `TryFrom<i32>`, `FromStr` and `Display`.
macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $attribute:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = ($raw:literal, $text:literal),
            )+
        }
    ) => {
        $(#[$meta])*
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name of this value as written in style sheets.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Numeric encoding of this value.
            pub const fn raw(self) -> i32 {
                match self {
                    $($name::$variant => $raw,)+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = LayoutError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($raw => Ok($name::$variant),)+
                    other => Err(LayoutError::invalid_attribute($attribute, other)),
                }
            }
        }

        impl FromStr for $name {
            type Err = LayoutError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(LayoutError::invalid_attribute($attribute, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

attribute_enum! {
    /// Direction of the main axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
    pub enum FlexDirection as "flex-direction" {
        /// Horizontal, start to end
        #[default]
        Row = (0, "row"),
        /// Horizontal, end to start
        RowReverse = (1, "row-reverse"),
        /// Vertical, top to bottom
        Column = (2, "column"),
        /// Vertical, bottom to top
        ColumnReverse = (3, "column-reverse"),
    }
}

impl FlexDirection {
    pub const fn is_horizontal(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }
}

attribute_enum! {
    /// Whether items may wrap onto additional lines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
    pub enum FlexWrap as "flex-wrap" {
        /// Single line, items shrink to fit
        #[default]
        #[cfg_attr(feature = "serde", serde(rename = "nowrap"))]
        NoWrap = (0, "nowrap"),
        /// Lines stack from cross start to cross end
        Wrap = (1, "wrap"),
        /// Lines stack from cross end to cross start
        WrapReverse = (2, "wrap-reverse"),
    }
}

attribute_enum! {
    /// Distribution of items along the main axis of a line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
    pub enum JustifyContent as "justify-content" {
        /// Pack items at the main start
        #[default]
        FlexStart = (0, "flex-start"),
        /// Pack items at the main end
        FlexEnd = (1, "flex-end"),
        /// Center items
        Center = (2, "center"),
        /// First and last item flush with the edges, equal gaps between
        SpaceBetween = (3, "space-between"),
        /// Equal space around every item
        SpaceAround = (4, "space-around"),
        /// Equal space between items and the edges
        SpaceEvenly = (5, "space-evenly"),
    }
}

attribute_enum! {
    /// Default cross-axis alignment of items within their line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
    pub enum AlignItems as "align-items" {
        /// Cross start edge on the line's cross start
        #[default]
        FlexStart = (0, "flex-start"),
        /// Cross end edge on the line's cross end
        FlexEnd = (1, "flex-end"),
        /// Centered in the line
        Center = (2, "center"),
        /// Baselines aligned
        Baseline = (3, "baseline"),
        /// Stretched to the line's cross size
        Stretch = (4, "stretch"),
    }
}

attribute_enum! {
    /// Per-item override of [`AlignItems`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
    pub enum AlignSelf as "align-self" {
        /// Inherit the container's `align-items`
        #[default]
        Auto = (-1, "auto"),
        FlexStart = (0, "flex-start"),
        FlexEnd = (1, "flex-end"),
        Center = (2, "center"),
        Baseline = (3, "baseline"),
        Stretch = (4, "stretch"),
    }
}

impl AlignSelf {
    /// The alignment in effect once `auto` falls back to the container's value.
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => align_items,
            AlignSelf::FlexStart => AlignItems::FlexStart,
            AlignSelf::FlexEnd => AlignItems::FlexEnd,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::Baseline => AlignItems::Baseline,
            AlignSelf::Stretch => AlignItems::Stretch,
        }
    }
}

attribute_enum! {
    /// Distribution of lines along the cross axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
    pub enum AlignContent as "align-content" {
        /// Lines packed at the cross start
        #[default]
        FlexStart = (0, "flex-start"),
        /// Lines packed at the cross end
        FlexEnd = (1, "flex-end"),
        /// Lines centered
        Center = (2, "center"),
        /// Equal gaps between lines
        SpaceBetween = (3, "space-between"),
        /// Equal space around every line
        SpaceAround = (4, "space-around"),
        /// Lines grow to fill the container
        Stretch = (5, "stretch"),
    }
}

attribute_enum! {
    /// Horizontal reading direction of a container.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
    pub enum LayoutDirection as "layout-direction" {
        /// Left to right
        #[default]
        Ltr = (0, "ltr"),
        /// Right to left
        Rtl = (1, "rtl"),
    }
}

attribute_enum! {
    /// Whether an item takes part in layout and painting.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
    pub enum Visibility as "visibility" {
        /// Laid out and painted
        #[default]
        Visible = (0, "visible"),
        /// Laid out but not painted
        Invisible = (4, "invisible"),
        /// Takes no space at all
        Gone = (8, "gone"),
    }
}

/// Requested size of an item along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Dimension {
    /// Fixed size in pixels
    Fixed(i32),
    /// As large as the parent allows, scaled by the item's percent
    MatchParent,
    /// Just large enough for the content
    #[default]
    WrapContent,
}

impl Dimension {
    pub const MATCH_PARENT_RAW: i32 = -1;
    pub const WRAP_CONTENT_RAW: i32 = -2;

    pub const fn raw(self) -> i32 {
        match self {
            Dimension::Fixed(size) => size,
            Dimension::MatchParent => Self::MATCH_PARENT_RAW,
            Dimension::WrapContent => Self::WRAP_CONTENT_RAW,
        }
    }
}

impl TryFrom<i32> for Dimension {
    type Error = LayoutError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            size if size >= 0 => Ok(Dimension::Fixed(size)),
            Self::MATCH_PARENT_RAW => Ok(Dimension::MatchParent),
            Self::WRAP_CONTENT_RAW => Ok(Dimension::WrapContent),
            other => Err(LayoutError::invalid_attribute("dimension", other)),
        }
    }
}

impl FromStr for Dimension {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match-parent" => Ok(Dimension::MatchParent),
            "wrap-content" => Ok(Dimension::WrapContent),
            other => other
                .strip_suffix("px")
                .unwrap_or(other)
                .parse::<i32>()
                .ok()
                .filter(|size| *size >= 0)
                .map(Dimension::Fixed)
                .ok_or_else(|| LayoutError::invalid_attribute("dimension", other)),
        }
    }
}

/// Spacing on the four sides of a box: margins or padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Edges {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Edges {
    pub const ZERO: Edges = Edges::uniform(0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same spacing on every side.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric spacing.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal spacing.
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical spacing.
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// A measured width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An integer rectangle given by its four edges. Right and bottom are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle at `(left, top)` with the given size.
    pub const fn from_origin(left: i32, top: i32, size: Size) -> Self {
        Self::new(
            left,
            top,
            left.saturating_add(size.width),
            top.saturating_add(size.height),
        )
    }

    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Grow this rectangle outward by `edges`.
    pub const fn outset(&self, edges: Edges) -> Rect {
        Rect::new(
            self.left.saturating_sub(edges.left),
            self.top.saturating_sub(edges.top),
            self.right.saturating_add(edges.right),
            self.bottom.saturating_add(edges.bottom),
        )
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_round_trip() {
        for direction in FlexDirection::ALL {
            assert_eq!(FlexDirection::try_from(direction.raw()), Ok(*direction));
        }
        for align in AlignSelf::ALL {
            assert_eq!(AlignSelf::try_from(align.raw()), Ok(*align));
        }
        assert_eq!(AlignContent::try_from(5), Ok(AlignContent::Stretch));
        assert_eq!(Visibility::try_from(8), Ok(Visibility::Gone));
    }

    #[test]
    fn test_invalid_raw_values() {
        let err = FlexDirection::try_from(4).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidAttribute {
                attribute: "flex-direction",
                value: "4".to_string(),
            }
        );
        assert!(JustifyContent::try_from(-1).is_err());
        assert!(AlignItems::try_from(-1).is_err());
        assert!(Visibility::try_from(1).is_err());
        assert!(Dimension::try_from(-3).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!("wrap-reverse".parse::<FlexWrap>(), Ok(FlexWrap::WrapReverse));
        assert_eq!("nowrap".parse::<FlexWrap>(), Ok(FlexWrap::NoWrap));
        assert_eq!(JustifyContent::SpaceEvenly.to_string(), "space-evenly");
        assert_eq!("rtl".parse::<LayoutDirection>(), Ok(LayoutDirection::Rtl));

        let err = "sideways".parse::<AlignContent>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for align-content: sideways");
    }

    #[test]
    fn test_dimension_parsing() {
        assert_eq!("120".parse::<Dimension>(), Ok(Dimension::Fixed(120)));
        assert_eq!("48px".parse::<Dimension>(), Ok(Dimension::Fixed(48)));
        assert_eq!("match-parent".parse::<Dimension>(), Ok(Dimension::MatchParent));
        assert!("-4".parse::<Dimension>().is_err());
        assert_eq!(Dimension::try_from(-2), Ok(Dimension::WrapContent));
        assert_eq!(Dimension::Fixed(7).raw(), 7);
    }

    #[test]
    fn test_align_self_resolution() {
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
        assert_eq!(AlignSelf::FlexEnd.resolve(AlignItems::Center), AlignItems::FlexEnd);
    }

    #[test]
    fn test_edges() {
        let edges = Edges::symmetric(4, 10);
        assert_eq!(edges.horizontal(), 8);
        assert_eq!(edges.vertical(), 20);
        assert_eq!(Edges::uniform(3), Edges::new(3, 3, 3, 3));
    }

    #[test]
    fn test_rect_geometry() {
        let a = Rect::from_origin(10, 20, Size::new(30, 40));
        assert_eq!(a, Rect::new(10, 20, 40, 60));
        assert_eq!(a.size(), Size::new(30, 40));

        assert_eq!(
            Rect::from_origin(i32::MAX - 5, 0, Size::new(30, 40)).right,
            i32::MAX
        );

        let b = Rect::new(0, 50, 15, 90);
        assert_eq!(a.union(&b), Rect::new(0, 20, 40, 90));
        assert_eq!(a.outset(Edges::uniform(2)), Rect::new(8, 18, 42, 62));
    }
}
