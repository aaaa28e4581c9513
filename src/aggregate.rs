//! Turning nominees into a dense sequence of yearly breakdowns.

use crate::errors::{self, Result};
use crate::groups::Group;
use crate::input::INominee;
use crate::output::{YearBreakdown, Years};
use log::warn;

/// What to do with a nominee whose ethnic background tag is not recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// Fail with [errors::UnrecognizedCategory].
    #[default]
    Strict,
    /// Count the nominee in the total only.
    /// The total of that year will then exceed the sum of the groups.
    Lenient,
}

/// Result of [aggregate].
#[derive(Debug, PartialEq, Eq)]
pub struct Aggregate {
    /// One entry per year, ascending, no gaps.
    pub breakdowns: Vec<YearBreakdown>,
    /// Number of nominees that were counted without a group.
    pub unrecognized: u64,
}

/// First and last year of the nominees.
pub fn get_years<'a, I>(nominees: I) -> Option<Years>
where
    I: IntoIterator<Item = &'a INominee>,
{
    let mut years = None;
    for n in nominees {
        years = match years {
            None => Some((n.year, n.year)),
            Some((a, b)) => Some((a.min(n.year), b.max(n.year))),
        };
    }
    years
}

/// Count nominees per year and group.
///
/// Every year between the first and the last year of the input gets an
/// entry, including years without any nominees.
pub fn aggregate(nominees: &[&INominee], policy: Policy) -> Result<Aggregate> {
    let Some((first, last)) = get_years(nominees.iter().copied()) else {
        return Err(errors::invalid_input_ref("no nominees to aggregate"));
    };
    let mut breakdowns: Vec<YearBreakdown> =
        (first..=last).map(YearBreakdown::empty).collect();
    let mut unrecognized = 0;
    for n in nominees {
        let b = &mut breakdowns[(n.year - first) as usize];
        match (Group::classify(&n.ethnic_background), policy) {
            (Some(group), _) => b.add(group),
            (None, Policy::Strict) => {
                return Err(errors::unrecognized_category(&n.ethnic_background, n.year));
            }
            (None, Policy::Lenient) => {
                warn!(
                    target: "nominees",
                    "{}: unrecognized ethnic background '{}', counted in total only",
                    n.year,
                    n.ethnic_background
                );
                b.add_unclassified();
                unrecognized += 1;
            }
        }
    }
    Ok(Aggregate {
        breakdowns,
        unrecognized,
    })
}
