//! The four demographic groups used for stacking.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Caucasian,
    Afrodescendant,
    Hispanic,
    Asian,
}

/// All groups, in the order used for stacking keys and legends.
pub const GROUPS: [Group; 4] = [
    Group::Caucasian,
    Group::Afrodescendant,
    Group::Hispanic,
    Group::Asian,
];

impl Group {
    /// Classify an ethnic background tag.
    ///
    /// Returns `None` for anything outside the recognized tags.
    pub fn classify(tag: &str) -> Option<Group> {
        match tag {
            "" => Some(Group::Caucasian),
            "black" => Some(Group::Afrodescendant),
            "hispanic" => Some(Group::Hispanic),
            "asian" => Some(Group::Asian),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Group::Caucasian => "caucasian",
            Group::Afrodescendant => "afrodescendant",
            Group::Hispanic => "hispanic",
            Group::Asian => "asian",
        }
    }

    /// Human-readable label, as shown in legends and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            Group::Caucasian => "Caucasian or another",
            Group::Afrodescendant => "Afro-descendant",
            Group::Hispanic => "Hispanic",
            Group::Asian => "Asian",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Group::Caucasian => "#BFD3C1",
            Group::Afrodescendant => "#68A691",
            Group::Hispanic => "#EFC7C2",
            Group::Asian => "#694F5D",
        }
    }

    /// Position in [GROUPS].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify_known() {
        assert_eq!(Group::classify(""), Some(Group::Caucasian));
        assert_eq!(Group::classify("black"), Some(Group::Afrodescendant));
        assert_eq!(Group::classify("hispanic"), Some(Group::Hispanic));
        assert_eq!(Group::classify("asian"), Some(Group::Asian));
    }

    #[test]
    fn classify_unknown() {
        assert_eq!(Group::classify("other"), None);
        assert_eq!(Group::classify("Black"), None);
        assert_eq!(Group::classify(" "), None);
    }

    #[test]
    fn order_is_stable() {
        for (i, g) in GROUPS.iter().enumerate() {
            assert_eq!(g.index(), i);
        }
        assert_eq!(
            GROUPS.iter().map(|g| g.key()).collect::<Vec<_>>(),
            ["caucasian", "afrodescendant", "hispanic", "asian"]
        );
    }
}
