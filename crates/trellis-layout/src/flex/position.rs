//! Assigning frames to the items of one line.

use log::trace;
use trellis_core::{AlignItems, JustifyContent, Rect, Size};

use super::{FlexEngine, ItemSource};
use crate::item::Item;
use crate::line::FlexLine;

/// Swap a `(start, end)` pair when the axis runs backwards.
fn ordered((start, end): (i32, i32), reversed: bool) -> (i32, i32) {
    if reversed {
        (end, start)
    } else {
        (start, end)
    }
}

impl FlexEngine<'_> {
    /// Place every visible item of `line` inside a container of `container`
    /// size, `cross_offset` pixels past the container's cross-start padding.
    ///
    /// Positions are worked out from the logical start of each axis and then
    /// mirrored into physical coordinates for reversed axes. Also records the
    /// union of the items' margin boxes in [`FlexLine::bounds`].
    pub fn position_line<S>(&self, items: &mut S, line: &mut FlexLine, container: Size, cross_offset: i32)
    where
        S: ItemSource + ?Sized,
    {
        if line.is_spacer() {
            return;
        }
        let axes = self.axes();
        let (container_main, container_cross) = axes.to_main_cross(container.width, container.height);
        let main_reversed = self.is_main_reversed();
        let cross_reversed = self.is_cross_reversed();
        let (lead_padding, _) = ordered(axes.main_edges(self.style.padding), main_reversed);
        let (cross_lead_padding, _) = ordered(axes.cross_edges(self.style.padding), cross_reversed);

        let (mut cursor, gap) = self.justify(line, container_main, lead_padding);
        let line_start = cross_lead_padding + cross_offset;
        let mut bounds: Option<Rect> = None;

        for index in line.item_range() {
            let Some(item) = items.item_mut(index) else {
                continue;
            };
            if item.style().is_gone() {
                continue;
            }
            let margin = item.style().margin;
            let (lead_margin, trail_margin) = ordered(axes.main_edges(margin), main_reversed);
            let main_size = axes.main_size(item);
            let cross_size = axes.cross_size(item);

            cursor += f64::from(lead_margin);
            let main = cursor.round() as i32;
            cursor += f64::from(main_size + trail_margin) + gap;
            let cross = line_start + self.cross_offset_in_line(item, line, cross_reversed);

            let main = if main_reversed {
                container_main.saturating_sub(main).saturating_sub(main_size)
            } else {
                main
            };
            let cross = if cross_reversed {
                container_cross - cross - cross_size
            } else {
                cross
            };
            let (left, top) = axes.to_width_height(main, cross);
            let frame = Rect::from_origin(left, top, item.measured_size());
            trace!("item {index} placed at {frame:?}");
            item.layout(frame);

            let outer = frame.outset(margin);
            bounds = Some(bounds.map_or(outer, |bounds| bounds.union(&outer)));
        }
        line.bounds = bounds;
    }

    /// Starting cursor and the gap between consecutive items.
    fn justify(&self, line: &FlexLine, container_main: i32, lead_padding: i32) -> (f64, f64) {
        let start = f64::from(lead_padding);
        let free = f64::from(container_main - line.main_size);
        let visible = line.visible_count() as f64;
        match self.style.justify_content {
            JustifyContent::FlexStart => (start, 0.0),
            JustifyContent::FlexEnd => (start + free, 0.0),
            JustifyContent::Center => (start + free / 2.0, 0.0),
            JustifyContent::SpaceBetween => {
                let slots = if visible > 1.0 { visible - 1.0 } else { 1.0 };
                (start, (free / slots).max(0.0))
            }
            JustifyContent::SpaceAround => {
                let gap = if visible > 0.0 { (free / visible).max(0.0) } else { 0.0 };
                (start + gap / 2.0, gap)
            }
            JustifyContent::SpaceEvenly => {
                let gap = (free / (visible + 1.0)).max(0.0);
                (start + gap, gap)
            }
        }
    }

    /// Offset of the item's cross-start edge from its line's cross start.
    fn cross_offset_in_line(&self, item: &Item, line: &FlexLine, cross_reversed: bool) -> i32 {
        let axes = self.axes();
        let style = item.style();
        let (lead_margin, trail_margin) = ordered(axes.cross_edges(style.margin), cross_reversed);
        let cross_size = axes.cross_size(item);

        match style.align_self.resolve(self.style.align_items) {
            AlignItems::FlexStart | AlignItems::Stretch => lead_margin,
            AlignItems::FlexEnd => line.cross_size - cross_size - trail_margin,
            AlignItems::Center => (line.cross_size - cross_size + lead_margin - trail_margin) / 2,
            AlignItems::Baseline if axes.horizontal => {
                let from_lead = if cross_reversed {
                    item.measured_height() - item.baseline()
                } else {
                    item.baseline()
                };
                (line.max_baseline - from_lead).max(lead_margin)
            }
            // Baselines are horizontal; columns fall back to the start
            AlignItems::Baseline => lead_margin,
        }
    }
}
