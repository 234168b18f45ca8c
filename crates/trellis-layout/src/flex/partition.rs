//! Splitting items into flex lines.

use log::{debug, trace};
use trellis_core::{AlignSelf, Dimension, FlexWrap, ItemStyle, LayoutResult, MeasureMode, SizeConstraint};

use super::{FlexEngine, ItemSource};
use crate::item::Item;
use crate::line::FlexLine;

impl FlexEngine<'_> {
    /// Measure every item and split them into lines along the main axis.
    ///
    /// `lines` is cleared first. Fails on the first item with invalid
    /// attributes, or when a nested container fails to measure.
    pub fn partition<S>(
        &self,
        items: &mut S,
        main: SizeConstraint,
        cross: SizeConstraint,
        lines: &mut Vec<FlexLine>,
    ) -> LayoutResult<()>
    where
        S: ItemSource + ?Sized,
    {
        lines.clear();
        let axes = self.axes();
        let main_padding = self.style.main_padding();
        let count = items.item_count();
        let cross_reversed = self.is_cross_reversed();

        let mut line = FlexLine::starting_at(0, main_padding);
        let mut sum_cross_size = 0;

        for index in 0..count {
            let is_last = index + 1 == count;
            let item = match items.item_mut(index) {
                Some(item) if !item.style().is_gone() => item,
                _ => {
                    line.item_count += 1;
                    line.gone_item_count += 1;
                    if is_last && line.visible_count() > 0 {
                        close_line(lines, &mut line, index, &mut sum_cross_size);
                    }
                    continue;
                }
            };

            item.style().validate(index)?;
            log_inverted_bounds(item.style(), index);

            let main_constraint = self.child_main_constraint(item.style(), main);
            let cross_constraint = self.child_cross_constraint(item.style(), cross, sum_cross_size);
            axes.measure(item, main_constraint, cross_constraint)?;
            enforce_size_bounds(item)?;

            let child_main = axes.main_size(item).saturating_add(axes.main_margins(item.style()));
            if self.needs_wrap(item.style(), main, line.main_size, child_main, lines.len()) {
                if line.visible_count() > 0 {
                    close_line(lines, &mut line, index - 1, &mut sum_cross_size);
                }
                trace!("item {index} starts line {}", lines.len());

                if axes.cross_dimension(item.style()).0 == Dimension::MatchParent {
                    // The closed line changed how much cross space is left
                    let cross_constraint =
                        self.child_cross_constraint(item.style(), cross, sum_cross_size);
                    axes.measure(item, main_constraint, cross_constraint)?;
                    enforce_size_bounds(item)?;
                }
                line = FlexLine::starting_at(index, main_padding);
            }

            let style = item.style();
            line.item_count += 1;
            line.total_grow += f64::from(style.grow);
            line.total_shrink += f64::from(style.shrink);
            line.main_size = line
                .main_size
                .saturating_add(axes.main_size(item) + axes.main_margins(style));
            line.cross_size = line
                .cross_size
                .max(axes.cross_size(item) + axes.cross_margins(style));
            if style.align_self == AlignSelf::Stretch {
                line.indices_align_self_stretch.push(index);
            }
            if axes.horizontal {
                let baseline = if cross_reversed {
                    item.measured_height() - item.baseline() + style.margin.bottom
                } else {
                    item.baseline() + style.margin.top
                };
                line.max_baseline = line.max_baseline.max(baseline);
            }

            if is_last {
                close_line(lines, &mut line, index, &mut sum_cross_size);
            }
        }

        debug!(
            "partitioned {count} items into {} lines under main {main}, cross {cross}",
            lines.len()
        );
        Ok(())
    }

    /// Constraint on an item's main axis, honoring its basis percent.
    fn child_main_constraint(&self, style: &ItemStyle, main: SizeConstraint) -> SizeConstraint {
        let axes = self.axes();
        let (declared, percent) = axes.main_dimension(style);
        let dimension = match style.basis_percent {
            Some(basis) if main.mode() == MeasureMode::Exactly => {
                Dimension::Fixed((f64::from(main.size()) * f64::from(basis)).round() as i32)
            }
            _ => declared,
        };
        SizeConstraint::derive_child(
            main,
            self.style.main_padding() + axes.main_margins(style),
            dimension,
            percent,
        )
    }

    /// Whether an item of main size `child_main` (margins included) has to
    /// start a new line.
    fn needs_wrap(
        &self,
        style: &ItemStyle,
        main: SizeConstraint,
        current: i32,
        child_main: i32,
        closed_lines: usize,
    ) -> bool {
        if self.style.wrap == FlexWrap::NoWrap {
            return false;
        }
        if style.wrap_before {
            return true;
        }
        if main.mode() == MeasureMode::Unspecified {
            return false;
        }
        if let Some(max_line) = self.style.max_line {
            // The open line counts toward the cap
            if max_line <= closed_lines + 1 {
                return false;
            }
        }
        main.size() < current.saturating_add(child_main)
    }
}

fn close_line(lines: &mut Vec<FlexLine>, line: &mut FlexLine, last_index: usize, sum_cross_size: &mut i32) {
    let mut line = std::mem::take(line);
    line.last_index = last_index;
    line.sum_cross_size_before = *sum_cross_size;
    *sum_cross_size = sum_cross_size.saturating_add(line.cross_size);
    lines.push(line);
}

/// Re-measure an item whose measured size escaped its min/max bounds.
fn enforce_size_bounds(item: &mut Item) -> LayoutResult<()> {
    let style = item.style();
    let width = clamp_min_first(item.measured_width(), style.min_width, style.max_width);
    let height = clamp_min_first(item.measured_height(), style.min_height, style.max_height);
    if width != item.measured_width() || height != item.measured_height() {
        item.measure(SizeConstraint::exactly(width), SizeConstraint::exactly(height))?;
    }
    Ok(())
}

fn clamp_min_first(size: i32, min: i32, max: i32) -> i32 {
    if size < min {
        min
    } else if size > max {
        max
    } else {
        size
    }
}

fn log_inverted_bounds(style: &ItemStyle, index: usize) {
    if style.min_width > style.max_width || style.min_height > style.max_height {
        debug!(
            "item {index} has min size {}x{} above max size {}x{}",
            style.min_width, style.min_height, style.max_width, style.max_height
        );
    }
}
