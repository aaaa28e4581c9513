use crate::groups::Group;
use crate::input::INominee;
use itertools::Itertools;
use log::{info, warn};
use std::collections::{HashMap, HashSet};

fn explain_tags(tags: &HashMap<&str, usize>) -> String {
    tags.iter()
        .sorted()
        .map(|(&tag, count)| {
            let name = match Group::classify(tag) {
                Some(g) => g.key().to_owned(),
                None => format!("'{tag}' (unrecognized)"),
            };
            format!("{name}: {count}")
        })
        .join(", ")
}

pub fn statistics(nominees: &[INominee]) {
    let mut awards = HashSet::new();
    let mut tags: HashMap<&str, usize> = HashMap::new();
    for n in nominees {
        awards.insert(&n.award_id);
        *tags.entry(&n.ethnic_background).or_default() += 1;
    }
    info!(target: "nominees", "before filtering: nominees: {}", nominees.len());
    info!(target: "nominees", "before filtering: distinct awards: {}", awards.len());
    info!(target: "nominees", "ethnic backgrounds: {}", explain_tags(&tags));
    let unknown = tags
        .keys()
        .filter(|t| Group::classify(t).is_none())
        .count();
    if unknown > 0 {
        warn!(target: "nominees", "{unknown} unrecognized ethnic background tags in input");
    }
}

pub fn post_statistics(nominees: &[&INominee]) {
    let awards: HashSet<&String> = nominees.iter().map(|n| &n.award_id).collect();
    info!(target: "nominees", "after filtering: nominees: {}", nominees.len());
    info!(target: "nominees", "after filtering: distinct awards: {}", awards.len());
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn explain_tags_sorted() {
        let mut tags = HashMap::new();
        tags.insert("black", 2);
        tags.insert("", 5);
        tags.insert("other", 1);
        assert_eq!(
            explain_tags(&tags),
            "caucasian: 5, afrodescendant: 2, 'other' (unrecognized): 1"
        );
    }
}
