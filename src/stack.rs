//! Stacking yearly breakdowns into layers, one per group.
//!
//! Layers are stacked on a zero baseline. The layer with the smallest
//! sum over all years goes to the bottom; ties keep the group order.

use crate::groups::{GROUPS, Group};
use crate::output::{OPoint, OSeries, YearBreakdown};
use itertools::Itertools;

fn layer_sum(breakdowns: &[YearBreakdown], group: Group) -> u64 {
    breakdowns.iter().map(|b| b.counts.get(group)).sum()
}

/// Groups from bottom to top.
pub fn stack_order(breakdowns: &[YearBreakdown]) -> Vec<Group> {
    GROUPS
        .iter()
        .copied()
        .sorted_by_key(|&g| layer_sum(breakdowns, g))
        .collect_vec()
}

/// Build one series per group, in the order of [GROUPS].
pub fn stack(breakdowns: &[YearBreakdown]) -> Vec<OSeries> {
    let order = stack_order(breakdowns);
    let mut index = [0; GROUPS.len()];
    for (i, &g) in order.iter().enumerate() {
        index[g.index()] = i;
    }
    let mut points: Vec<Vec<OPoint>> = GROUPS.iter().map(|_| Vec::new()).collect_vec();
    for b in breakdowns {
        let mut y = 0;
        for &g in &order {
            let y1 = y + b.counts.get(g);
            points[g.index()].push(OPoint {
                year: b.year,
                y0: y,
                y1,
            });
            y = y1;
        }
    }
    GROUPS
        .iter()
        .zip(points)
        .map(|(&g, points)| OSeries {
            group: g,
            label: g.label().to_owned(),
            color: g.color().to_owned(),
            index: index[g.index()],
            points,
        })
        .collect_vec()
}

/// Largest total over all years, i.e., the top of the y axis.
pub fn max_total(breakdowns: &[YearBreakdown]) -> u64 {
    breakdowns.iter().map(|b| b.total).max().unwrap_or(0)
}
