//! Stretching items to their line's cross size.

use trellis_core::{AlignItems, AlignSelf, LayoutResult, SizeConstraint};

use super::{FlexEngine, ItemSource};
use crate::item::Item;
use crate::line::FlexLine;

impl FlexEngine<'_> {
    /// Re-measure stretched items at their line's cross size.
    ///
    /// With `align-items: stretch` every item whose `align-self` is `auto` or
    /// `stretch` is stretched; otherwise only items that ask for it themselves.
    pub fn stretch<S>(&self, items: &mut S, lines: &[FlexLine]) -> LayoutResult<()>
    where
        S: ItemSource + ?Sized,
    {
        let stretch_all = self.style.align_items == AlignItems::Stretch;
        for line in lines {
            if stretch_all {
                for index in line.item_range() {
                    let Some(item) = items.item_mut(index) else {
                        continue;
                    };
                    let style = item.style();
                    if style.is_gone() || !matches!(style.align_self, AlignSelf::Auto | AlignSelf::Stretch) {
                        continue;
                    }
                    self.stretch_item(item, line.cross_size)?;
                }
            } else {
                for &index in &line.indices_align_self_stretch {
                    if let Some(item) = items.item_mut(index) {
                        self.stretch_item(item, line.cross_size)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn stretch_item(&self, item: &mut Item, line_cross: i32) -> LayoutResult<()> {
        let axes = self.axes();
        let (min, max) = axes.cross_bounds(item.style());
        let cross = (line_cross - axes.cross_margins(item.style())).max(min).min(max);
        let main = axes.main_size(item);
        axes.measure(item, SizeConstraint::exactly(main), SizeConstraint::exactly(cross))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flex::testing::{fixed_items, measure_lines};
    use trellis_core::{AlignContent, ContainerStyle, Edges, FlexWrap, ItemStyle};

    fn heights(items: &[Item]) -> Vec<i32> {
        items.iter().map(Item::measured_height).collect()
    }

    #[test]
    fn test_stretch_all_items() {
        let style = ContainerStyle::row().with_align_items(AlignItems::Stretch);
        let mut items = fixed_items(&[(10, 20), (10, 50), (10, 30)]);
        items[1].style_mut().margin = Edges::symmetric(0, 5);
        items[2].style_mut().align_self = AlignSelf::Center;
        measure_lines(
            &style,
            &mut items,
            SizeConstraint::exactly(100),
            SizeConstraint::unspecified(),
        )
        .unwrap();

        // Line is 60 tall: 50 plus the second item's margins
        assert_eq!(heights(&items), vec![60, 50, 30]);
    }

    #[test]
    fn test_stretch_only_self_stretch() {
        let style = ContainerStyle::row();
        let mut items = fixed_items(&[(10, 20), (10, 50), (10, 30)]);
        items[0].style_mut().align_self = AlignSelf::Stretch;
        measure_lines(
            &style,
            &mut items,
            SizeConstraint::exactly(100),
            SizeConstraint::unspecified(),
        )
        .unwrap();
        assert_eq!(heights(&items), vec![50, 50, 30]);
    }

    #[test]
    fn test_stretch_respects_bounds() {
        let style = ContainerStyle::row().with_align_items(AlignItems::Stretch);
        let mut items = fixed_items(&[(10, 20), (10, 80)]);
        items[0].style_mut().max_height = 40;
        measure_lines(
            &style,
            &mut items,
            SizeConstraint::exactly(100),
            SizeConstraint::unspecified(),
        )
        .unwrap();
        assert_eq!(heights(&items), vec![40, 80]);
    }

    #[test]
    fn test_stretch_after_align_content() {
        let style = ContainerStyle::row()
            .with_wrap(FlexWrap::Wrap)
            .with_align_items(AlignItems::Stretch)
            .with_align_content(AlignContent::Stretch);
        let mut items = fixed_items(&[(60, 40), (60, 60)]);
        let lines = measure_lines(
            &style,
            &mut items,
            SizeConstraint::exactly(100),
            SizeConstraint::exactly(150),
        )
        .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(heights(&items), vec![65, 85]);
    }

    #[test]
    fn test_stretch_column_widths() {
        let style = ContainerStyle::column().with_align_items(AlignItems::Stretch);
        let mut items = vec![
            Item::new(ItemStyle::fixed(20, 10)),
            Item::new(ItemStyle::fixed(70, 10)),
        ];
        measure_lines(
            &style,
            &mut items,
            SizeConstraint::unspecified(),
            SizeConstraint::exactly(200),
        )
        .unwrap();
        assert_eq!(items[0].measured_width(), 70);
        assert_eq!(items[0].measured_height(), 10);
    }
}
