//! Data structures for representing the input.

use serde::{Deserialize, Serialize};

/// Ceremony year.
pub type Year = u16;

/// One nomination.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct INominee {
    pub year: Year,
    pub award_id: String,
    pub award_label: String,
    /// One of `""`, `"black"`, `"hispanic"`, `"asian"`.
    /// An empty or missing value stands for the default group.
    #[serde(default)]
    pub ethnic_background: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Input {
    pub nominees: Vec<INominee>,
}
