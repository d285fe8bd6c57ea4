// src/domain/sort.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    #[default]
    ImportanceDesc,
    ImportanceAsc,
    AlphaAsc,
    AlphaDesc,
    ByTag,
    StarredFirst,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 6] = [
        SortCriterion::ImportanceDesc,
        SortCriterion::ImportanceAsc,
        SortCriterion::AlphaAsc,
        SortCriterion::AlphaDesc,
        SortCriterion::ByTag,
        SortCriterion::StarredFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::ImportanceDesc => "importance_desc",
            SortCriterion::ImportanceAsc => "importance_asc",
            SortCriterion::AlphaAsc => "alpha_asc",
            SortCriterion::AlphaDesc => "alpha_desc",
            SortCriterion::ByTag => "by_tag",
            SortCriterion::StarredFirst => "starred_first",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriterion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownSortCriterion(s.to_string()))
    }
}
