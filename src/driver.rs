//! Main entry point for calculating everything.

use crate::aggregate::{self, Policy};
use crate::categories::{self, AwardFilter};
use crate::errors::{self, Result};
use crate::information;
use crate::input::{Input, Year};
use crate::output::{self, Output};
use crate::stack;
use log::{debug, info};

/// What to show?
///
/// This is the complete view state: the output depends on nothing else
/// than these settings and the input.
#[derive(Clone, Copy, Debug)]
pub struct DriverArgs<'a> {
    /// Award restriction.
    /// Refers to [crate::input::INominee::award_id]; `None` keeps all awards.
    pub award: AwardFilter<'a>,

    /// Starting year.
    /// Nominees before this year are ignored.
    pub start: Year,

    /// Final year (inclusive).
    /// Nominees after this year are ignored.
    pub end: Year,

    /// How to treat unrecognized ethnic background tags.
    pub policy: Policy,
}

impl Default for DriverArgs<'_> {
    fn default() -> Self {
        DriverArgs {
            award: None,
            start: Year::MIN,
            end: Year::MAX,
            policy: Policy::default(),
        }
    }
}

/// Calculate everything.
///
/// This is the main entry point for the library.
pub fn calc(args: &DriverArgs, input: &Input) -> Result<Output> {
    information::statistics(&input.nominees);
    let window = categories::parse_window(args.start, args.end)?;
    let nominees = categories::restrict(args.award, window, &input.nominees);
    information::post_statistics(&nominees);
    if nominees.is_empty() {
        return Err(match args.award {
            None => errors::invalid_input_ref("no nominees found"),
            Some(id) => errors::invalid_input(format!("no nominees found for award '{id}'")),
        });
    }
    let agg = aggregate::aggregate(&nominees, args.policy)?;
    let years = (
        agg.breakdowns[0].year,
        agg.breakdowns[agg.breakdowns.len() - 1].year,
    );
    info!(target: "nominees", "years in input data: {}", output::pretty_period(&years));
    let max_total = stack::max_total(&agg.breakdowns);
    let series = stack::stack(&agg.breakdowns);
    debug!(
        target: "nominees",
        "{} years, at most {} nominees per year, {} unrecognized",
        agg.breakdowns.len(),
        max_total,
        agg.unrecognized
    );
    Ok(Output {
        award: args.award.map(|id| id.to_owned()),
        window,
        years,
        max_total,
        unrecognized: agg.unrecognized,
        breakdowns: agg.breakdowns,
        series,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::InvalidInput;
    use crate::input::INominee;

    fn nom(year: Year, id: &str, eb: &str) -> INominee {
        INominee {
            year,
            award_id: id.to_owned(),
            award_label: id.to_uppercase(),
            ethnic_background: eb.to_owned(),
        }
    }

    fn input() -> Input {
        Input {
            nominees: vec![
                nom(1990, "actor", ""),
                nom(1990, "actress", "black"),
                nom(1992, "actor", "hispanic"),
                nom(1994, "actress", ""),
            ],
        }
    }

    #[test]
    fn calc_all() {
        let out = calc(&DriverArgs::default(), &input()).unwrap();
        assert_eq!(out.award, None);
        assert_eq!(out.years, (1990, 1994));
        assert_eq!(out.breakdowns.len(), 5);
        assert_eq!(out.max_total, 2);
        assert_eq!(out.series.len(), 4);
    }

    #[test]
    fn calc_all_same_as_unfiltered() {
        let inp = input();
        let out = calc(&DriverArgs::default(), &inp).unwrap();
        let refs: Vec<&INominee> = inp.nominees.iter().collect();
        let agg = aggregate::aggregate(&refs, Policy::Strict).unwrap();
        assert_eq!(out.breakdowns, agg.breakdowns);
    }

    #[test]
    fn calc_default_keeps_every_year() {
        let inp = Input {
            nominees: vec![
                nom(10000, "actor", ""),
                nom(Year::MAX, "actor", "black"),
                nom(0, "actress", ""),
            ],
        };
        let out = calc(&DriverArgs::default(), &inp).unwrap();
        let refs: Vec<&INominee> = inp.nominees.iter().collect();
        let agg = aggregate::aggregate(&refs, Policy::Strict).unwrap();
        assert_eq!(out.breakdowns, agg.breakdowns);
        assert_eq!(out.years, (0, Year::MAX));
        assert_eq!(out.window, (Year::MIN, Year::MAX));
        assert_eq!(out.breakdowns[10000].total, 1);
    }

    #[test]
    fn calc_award() {
        let args = DriverArgs {
            award: Some("actor"),
            ..DriverArgs::default()
        };
        let out = calc(&args, &input()).unwrap();
        assert_eq!(out.award.as_deref(), Some("actor"));
        assert_eq!(out.years, (1990, 1992));
        let totals: Vec<u64> = out.breakdowns.iter().map(|b| b.total).collect();
        assert_eq!(totals, [1, 0, 1]);
    }

    #[test]
    fn calc_window() {
        let args = DriverArgs {
            start: 1991,
            end: 1994,
            ..DriverArgs::default()
        };
        let out = calc(&args, &input()).unwrap();
        assert_eq!(out.window, (1991, 1994));
        assert_eq!(out.years, (1992, 1994));
    }

    #[test]
    fn calc_nothing_left() {
        let args = DriverArgs {
            award: Some("editing"),
            ..DriverArgs::default()
        };
        let e = calc(&args, &input()).unwrap_err();
        assert!(e.downcast_ref::<InvalidInput>().is_some());
        let e = calc(&DriverArgs::default(), &Input { nominees: vec![] }).unwrap_err();
        assert!(e.downcast_ref::<InvalidInput>().is_some());
    }
}
