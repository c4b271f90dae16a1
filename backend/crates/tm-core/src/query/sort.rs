use crate::{CoreError, Result as CoreErrorResult, Task};

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Serialize;

/// Task column a list can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    Index,
    Title,
    Content,
    CreatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Index => "index",
            Self::Title => "title",
            Self::Content => "content",
            Self::CreatedAt => "created_at",
        }
    }

    /// Nulls sort first.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Index => a.index.cmp(&b.index),
            Self::Title => a.title.cmp(&b.title),
            Self::Content => a.content.cmp(&b.content),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "id" => Ok(Self::Id),
            "index" => Ok(Self::Index),
            "title" | "name" => Ok(Self::Title),
            "content" | "description" => Ok(Self::Content),
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            _ => Err(CoreError::invalid_query(
                "_sort",
                format!("'{}' is not a sortable field", s),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(CoreError::invalid_query(
                "_order",
                format!("'{}' is not a sort order, expected ASC or DESC", s),
            ))
        }
    }
}
