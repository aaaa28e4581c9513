//! Award categories and the restrictions applied before aggregation.

use crate::errors::{Result, invalid_argument};
use crate::input::{INominee, Year};
use crate::output::Years;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Award id that stands for no restriction.
pub const ALL: &str = "all";

/// Award restriction: `None` keeps everything.
pub type AwardFilter<'a> = Option<&'a str>;

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct Award {
    pub id: String,
    pub label: String,
}

/// Distinct awards in order of first appearance, preceded by "All".
pub fn awards(nominees: &[INominee]) -> Vec<Award> {
    let mut seen = HashSet::new();
    let mut awards = vec![Award {
        id: ALL.to_owned(),
        label: "All".to_owned(),
    }];
    for n in nominees {
        if seen.insert(n.award_id.as_str()) {
            awards.push(Award {
                id: n.award_id.clone(),
                label: n.award_label.clone(),
            });
        }
    }
    awards
}

pub fn parse_award(arg: &Option<String>) -> AwardFilter<'_> {
    match arg.as_deref() {
        None | Some(ALL) => None,
        Some(id) => Some(id),
    }
}

pub fn parse_window(start: Year, end: Year) -> Result<Years> {
    if start > end {
        return Err(invalid_argument(format!(
            "starting year {start} is after ending year {end}"
        )));
    }
    Ok((start, end))
}

pub fn matches(award: AwardFilter, window: Years, nominee: &INominee) -> bool {
    let in_window = window.0 <= nominee.year && nominee.year <= window.1;
    let in_award = match award {
        None => true,
        Some(id) => nominee.award_id == id,
    };
    in_window && in_award
}

/// Nominees of the given award within the given years.
pub fn restrict<'a>(
    award: AwardFilter,
    window: Years,
    nominees: &'a [INominee],
) -> Vec<&'a INominee> {
    nominees
        .iter()
        .filter(|n| matches(award, window, n))
        .collect_vec()
}
