//! Data structures for representing the output.

use crate::groups::{GROUPS, Group};
use crate::input::Year;
use serde::{Deserialize, Serialize};

/// Range of years, both ends inclusive.
pub type Years = (Year, Year);

/// Number of nominees in each group.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct Counts {
    pub caucasian: u64,
    pub afrodescendant: u64,
    pub hispanic: u64,
    pub asian: u64,
}

impl Counts {
    pub fn get(&self, group: Group) -> u64 {
        match group {
            Group::Caucasian => self.caucasian,
            Group::Afrodescendant => self.afrodescendant,
            Group::Hispanic => self.hispanic,
            Group::Asian => self.asian,
        }
    }

    fn get_mut(&mut self, group: Group) -> &mut u64 {
        match group {
            Group::Caucasian => &mut self.caucasian,
            Group::Afrodescendant => &mut self.afrodescendant,
            Group::Hispanic => &mut self.hispanic,
            Group::Asian => &mut self.asian,
        }
    }

    pub fn sum(&self) -> u64 {
        GROUPS.iter().map(|&g| self.get(g)).sum()
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct YearBreakdown {
    pub year: Year,
    pub total: u64,
    pub counts: Counts,
}

impl YearBreakdown {
    pub fn empty(year: Year) -> Self {
        YearBreakdown {
            year,
            total: 0,
            counts: Counts::default(),
        }
    }

    /// Count one nominee in the given group.
    pub fn add(&mut self, group: Group) {
        self.total += 1;
        *self.counts.get_mut(group) += 1;
    }

    /// Count one nominee without a group.
    pub fn add_unclassified(&mut self) {
        self.total += 1;
    }
}

/// One point of a stacked layer: the layer spans `y0..y1` at `year`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct OPoint {
    pub year: Year,
    pub y0: u64,
    pub y1: u64,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct OSeries {
    pub group: Group,
    pub label: String,
    pub color: String,
    /// Position in the stack, 0 being the bottom layer.
    pub index: usize,
    pub points: Vec<OPoint>,
}

#[derive(PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct Output {
    pub award: Option<String>,
    pub window: Years,
    pub years: Years,
    pub max_total: u64,
    pub unrecognized: u64,
    pub breakdowns: Vec<YearBreakdown>,
    pub series: Vec<OSeries>,
}

#[derive(Serialize)]
pub struct OError {
    pub error: String,
}

/// Find the breakdown for `year` in a dense sequence.
pub fn breakdown_at(breakdowns: &[YearBreakdown], year: Year) -> Option<&YearBreakdown> {
    let first = breakdowns.first()?.year;
    let i = year.checked_sub(first)?;
    breakdowns.get(i as usize)
}

/// Tooltip text for one year: the total, then one line per group.
pub fn tooltip(b: &YearBreakdown) -> Vec<String> {
    let mut lines = vec![format!("{} Nominees total", b.total)];
    for g in GROUPS {
        lines.push(format!("{} {}", b.counts.get(g), g.label()));
    }
    lines
}

pub fn pretty_period(p: &Years) -> String {
    format!("{}-{}", p.0, p.1)
}

#[cfg(test)]
mod test {
    use super::*;

    fn dense() -> Vec<YearBreakdown> {
        let mut a = YearBreakdown::empty(1990);
        a.add(Group::Caucasian);
        a.add(Group::Asian);
        let b = YearBreakdown::empty(1991);
        let mut c = YearBreakdown::empty(1992);
        c.add(Group::Hispanic);
        vec![a, b, c]
    }

    #[test]
    fn add_counts_total() {
        let mut b = YearBreakdown::empty(2000);
        b.add(Group::Afrodescendant);
        b.add(Group::Afrodescendant);
        b.add(Group::Hispanic);
        assert_eq!(b.total, 3);
        assert_eq!(b.counts.afrodescendant, 2);
        assert_eq!(b.counts.hispanic, 1);
        assert_eq!(b.counts.sum(), b.total);
        b.add_unclassified();
        assert_eq!(b.total, 4);
        assert_eq!(b.counts.sum(), 3);
    }

    #[test]
    fn breakdown_at_basic() {
        let bb = dense();
        assert_eq!(breakdown_at(&bb, 1990).map(|b| b.total), Some(2));
        assert_eq!(breakdown_at(&bb, 1991).map(|b| b.total), Some(0));
        assert_eq!(breakdown_at(&bb, 1992).map(|b| b.year), Some(1992));
        assert_eq!(breakdown_at(&bb, 1989), None);
        assert_eq!(breakdown_at(&bb, 1993), None);
        assert_eq!(breakdown_at(&[], 1990), None);
    }

    #[test]
    fn tooltip_basic() {
        let bb = dense();
        assert_eq!(
            tooltip(&bb[0]),
            [
                "2 Nominees total",
                "1 Caucasian or another",
                "0 Afro-descendant",
                "0 Hispanic",
                "1 Asian",
            ]
        );
    }

    #[test]
    fn counts_serialize_by_key() {
        let bb = dense();
        let json = serde_json::to_string(&bb[2]).unwrap();
        assert_eq!(
            json,
            r#"{"year":1992,"total":1,"counts":{"caucasian":0,"afrodescendant":0,"hispanic":1,"asian":0}}"#
        );
    }

    #[test]
    fn pretty_period_basic() {
        assert_eq!(pretty_period(&(1990, 1999)), "1990-1999");
        assert_eq!(pretty_period(&(1990, 1990)), "1990-1990");
    }
}
