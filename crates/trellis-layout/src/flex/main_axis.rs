//! Growing and shrinking items to fill their line's main axis.

use log::trace;
use trellis_core::{ItemStyle, LayoutResult, MeasureMode, SizeConstraint};

use super::{FlexEngine, ItemSource};
use crate::item::Item;
use crate::line::FlexLine;

/// Which way free space flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flex {
    Grow,
    Shrink,
}

impl Flex {
    fn weight(self, style: &ItemStyle) -> f32 {
        match self {
            Flex::Grow => style.grow,
            Flex::Shrink => style.shrink,
        }
    }

    fn total(self, line: &FlexLine) -> f64 {
        match self {
            Flex::Grow => line.total_grow,
            Flex::Shrink => line.total_shrink,
        }
    }

    fn total_mut(self, line: &mut FlexLine) -> &mut f64 {
        match self {
            Flex::Grow => &mut line.total_grow,
            Flex::Shrink => &mut line.total_shrink,
        }
    }
}

impl FlexEngine<'_> {
    /// Distribute free main-axis space among the items of every line.
    ///
    /// Lines shorter than the target grow, longer ones shrink. Items that hit
    /// their max (or min) size are frozen and the remaining space goes to the
    /// others in another pass.
    pub fn resolve_main_axis<S>(
        &self,
        items: &mut S,
        main: SizeConstraint,
        cross: SizeConstraint,
        lines: &mut [FlexLine],
    ) -> LayoutResult<()>
    where
        S: ItemSource + ?Sized,
    {
        let largest = self.largest_main_size(lines);
        let target = match main.mode() {
            MeasureMode::Exactly => main.size(),
            MeasureMode::Unspecified => largest,
            MeasureMode::AtMost => main.size().min(largest),
        };

        let mut frozen = vec![false; items.item_count()];
        for line in lines.iter_mut() {
            if line.main_size < target && line.total_grow > 0.0 {
                self.flex_line(items, cross, line, target, Flex::Grow, &mut frozen)?;
            } else if line.main_size > target && line.total_shrink > 0.0 {
                self.flex_line(items, cross, line, target, Flex::Shrink, &mut frozen)?;
            }
        }
        Ok(())
    }

    fn flex_line<S>(
        &self,
        items: &mut S,
        cross: SizeConstraint,
        line: &mut FlexLine,
        target: i32,
        flex: Flex,
        frozen: &mut [bool],
    ) -> LayoutResult<()>
    where
        S: ItemSource + ?Sized,
    {
        let axes = self.axes();
        let main_padding = self.style.main_padding();

        loop {
            let free = match flex {
                Flex::Grow => target - line.main_size,
                Flex::Shrink => line.main_size - target,
            };
            if free <= 0 || flex.total(line) <= 0.0 {
                return Ok(());
            }
            let unit = f64::from(free) / flex.total(line);
            let last_eligible = line.item_range().rev().find(|&index| {
                items
                    .item(index)
                    .is_some_and(|item| is_flexible(item, flex, frozen[index]))
            });

            line.main_size = main_padding;
            line.cross_size = 0;
            let mut carry = 0.0f64;
            let mut froze_any = false;

            for index in line.item_range() {
                let Some(item) = items.item_mut(index) else {
                    continue;
                };
                if item.style().is_gone() {
                    continue;
                }

                if is_flexible(item, flex, frozen[index]) {
                    let weight = f64::from(flex.weight(item.style()));
                    let current = f64::from(axes.main_size(item));
                    let mut raw = match flex {
                        Flex::Grow => current + unit * weight,
                        Flex::Shrink => current - unit * weight,
                    };
                    if Some(index) == last_eligible {
                        raw += carry;
                        carry = 0.0;
                    }

                    let mut size = raw.round() as i32;
                    let (min, max) = axes.main_bounds(item.style());
                    let limit = match flex {
                        Flex::Grow if size > max => Some(max),
                        Flex::Shrink if size < min => Some(min),
                        _ => None,
                    };
                    if let Some(limit) = limit {
                        trace!("item {index} frozen at {limit}");
                        size = limit;
                        frozen[index] = true;
                        *flex.total_mut(line) -= weight;
                        froze_any = true;
                    } else {
                        // The carried remainder never pushes an item past its bounds
                        carry += raw - f64::from(size);
                        if carry > 1.0 && size < max {
                            size += 1;
                            carry -= 1.0;
                        } else if carry < -1.0 && size > min {
                            size -= 1;
                            carry += 1.0;
                        }
                    }

                    let cross_constraint =
                        self.bounded_cross_constraint(item.style(), cross, line.sum_cross_size_before);
                    axes.measure(item, SizeConstraint::exactly(size), cross_constraint)?;
                }

                let style = item.style();
                line.main_size = line
                    .main_size
                    .saturating_add(axes.main_size(item) + axes.main_margins(style));
                line.cross_size = line
                    .cross_size
                    .max(axes.cross_size(item) + axes.cross_margins(style));
            }

            // Frozen items only ever fall short of their share, so each
            // pass ends at or before the target.
            if !froze_any {
                return Ok(());
            }
        }
    }

    /// Cross constraint for a re-measure, with its size held inside the
    /// item's cross min/max.
    fn bounded_cross_constraint(&self, style: &ItemStyle, cross: SizeConstraint, used: i32) -> SizeConstraint {
        let constraint = self.child_cross_constraint(style, cross, used);
        let (min, max) = self.axes().cross_bounds(style);
        if constraint.size() > max {
            constraint.with_size(max)
        } else if constraint.size() < min {
            constraint.with_size(min)
        } else {
            constraint
        }
    }
}

fn is_flexible(item: &Item, flex: Flex, frozen: bool) -> bool {
    !frozen && !item.style().is_gone() && flex.weight(item.style()) > 0.0
}
