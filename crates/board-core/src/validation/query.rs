//! Sort-type and leaderboard payload validation

use serde_json::Value;

use super::errors::ValidationErrors;
use super::{INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE};

/// Requested ordering over `total_reactions`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL ORDER BY keyword for this ordering
    pub fn sql_keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Requested leaderboard rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardFormat {
    List,
    Graph,
}

/// Validated leaderboard request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub sort: SortOrder,
    pub format: LeaderboardFormat,
}

/// Validate the `sort_type` key of a payload.
///
/// Missing key → `invalid_json_format`; any value other than the strings
/// `"asc"`/`"desc"` (including non-strings) → `invalid_sort_type`.
pub fn check_sort_type(payload: &Value) -> Result<SortOrder, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let Some(sort_type) = payload.get("sort_type") else {
        errors.insert(INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE);
        return Err(errors);
    };

    match sort_type.as_str() {
        Some("asc") => Ok(SortOrder::Asc),
        Some("desc") => Ok(SortOrder::Desc),
        _ => {
            errors.insert(
                "invalid_sort_type",
                "sort_type should be a string containing either 'asc' or 'desc'",
            );
            Err(errors)
        }
    }
}

/// Validate a leaderboard payload: sort-type validation composed with the
/// `data_type` check. Errors from both checks are merged into one mapping;
/// a missing `data_type` merges `invalid_json_format` into any sort errors
/// and returns immediately.
pub fn check_leaderboard(payload: &Value) -> Result<LeaderboardQuery, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let sort = match check_sort_type(payload) {
        Ok(sort) => Some(sort),
        Err(sort_errors) => {
            errors.merge(sort_errors);
            None
        }
    };

    let Some(data_type) = payload.get("data_type") else {
        errors.insert(INVALID_JSON_FORMAT, INVALID_JSON_FORMAT_MESSAGE);
        return Err(errors);
    };

    let format = match data_type.as_str() {
        Some("list") => Some(LeaderboardFormat::List),
        Some("graph") => Some(LeaderboardFormat::Graph),
        _ => {
            errors.insert(
                "invalid_data_type",
                "data_type should be a string containing either 'list' or 'graph'",
            );
            None
        }
    };

    match (sort, format) {
        (Some(sort), Some(format)) if errors.is_empty() => Ok(LeaderboardQuery { sort, format }),
        _ => Err(errors),
    }
}
