//! Distributing cross-axis space between lines (`align-content`).

use log::trace;
use trellis_core::{AlignContent, MeasureMode, SizeConstraint};

use super::FlexEngine;
use crate::line::FlexLine;

impl FlexEngine<'_> {
    /// Settle every line's cross size against an exact cross constraint.
    ///
    /// A single line takes the whole content box. With two or more,
    /// `align-content` either grows the lines or inserts spacer lines.
    /// Other constraint modes leave the lines untouched.
    pub fn resolve_cross_axis(&self, cross: SizeConstraint, lines: &mut Vec<FlexLine>) {
        if cross.mode() != MeasureMode::Exactly {
            return;
        }
        let size = cross.size();
        let padding = self.style.cross_padding();
        let total = self.sum_of_cross_size(lines).saturating_add(padding);

        match lines.len() {
            0 => {}
            1 => lines[0].cross_size = size - padding,
            count => match self.style.align_content {
                AlignContent::FlexStart => {}
                AlignContent::FlexEnd => {
                    trace!("leading spacer of {}", size - total);
                    lines.insert(0, FlexLine::spacer(size - total));
                }
                AlignContent::Center => surround(lines, (size - total) / 2),
                AlignContent::SpaceAround if total >= size => surround(lines, (size - total) / 2),
                AlignContent::SpaceAround => {
                    let space = (size - total) / (2 * count as i32);
                    let spaced = std::mem::take(lines)
                        .into_iter()
                        .flat_map(|line| [FlexLine::spacer(space), line, FlexLine::spacer(space)]);
                    lines.extend(spaced);
                }
                AlignContent::SpaceBetween if total >= size => {}
                AlignContent::SpaceBetween => {
                    let gaps = distribute(size - total, count - 1);
                    let separated: Vec<FlexLine> = std::mem::take(lines)
                        .into_iter()
                        .zip(gaps.into_iter().map(Some).chain(Some(None)))
                        .flat_map(|(line, gap)| std::iter::once(line).chain(gap.map(FlexLine::spacer)))
                        .collect();
                    *lines = separated;
                }
                AlignContent::Stretch if total >= size => {}
                AlignContent::Stretch => {
                    let extra = distribute(size - total, count);
                    for (line, extra) in lines.iter_mut().zip(extra) {
                        line.cross_size += extra;
                    }
                }
            },
        }
    }
}

/// Put a spacer before the first line and after the last.
fn surround(lines: &mut Vec<FlexLine>, space: i32) {
    trace!("surrounding {} lines with {space}", lines.len());
    lines.insert(0, FlexLine::spacer(space));
    lines.push(FlexLine::spacer(space));
}

/// Split `free` pixels into `parts` integer shares that sum to exactly `free`.
///
/// Each share is rounded on its own; the rounding error is carried forward
/// and the last share absorbs what is left.
fn distribute(free: i32, parts: usize) -> Vec<i32> {
    if parts == 0 {
        return Vec::new();
    }
    let unit = f64::from(free) / parts as f64;
    let mut carry = 0.0f64;
    (0..parts)
        .map(|index| {
            let mut raw = unit;
            if index + 1 == parts {
                raw += carry;
                carry = 0.0;
            }
            let mut share = raw.round() as i32;
            carry += raw - f64::from(share);
            if carry > 1.0 {
                share += 1;
                carry -= 1.0;
            } else if carry < -1.0 {
                share -= 1;
                carry += 1.0;
            }
            share
        })
        .collect()
}
