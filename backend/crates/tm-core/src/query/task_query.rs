//! Task list filtering, sorting and paging.
//!
//! Parameters use the admin-UI query names (`_start`, `_end`, `_sort`,
//! `_order`, `titleCont`, `status`, `assigneeId`, `labelId`). Unrecognized
//! parameters are ignored.

use crate::{CoreError, Result as CoreErrorResult, SortField, SortOrder, Task};

use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

/// Default last row of a page (inclusive)
pub const DEFAULT_PAGE_END: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    /// Substring of the title
    pub title_cont: Option<String>,
    /// Task status slug
    pub status: Option<String>,
    pub assignee_id: Option<Uuid>,
    /// Tasks carrying this label
    pub label_id: Option<Uuid>,
    pub sort: SortField,
    pub order: SortOrder,
    /// First row, zero-based
    pub start: usize,
    /// Last row, inclusive
    pub end: usize,
}

/// One page of matching tasks.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPage {
    /// Matching tasks before paging
    pub total: usize,
    pub tasks: Vec<Task>,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            title_cont: None,
            status: None,
            assignee_id: None,
            label_id: None,
            sort: SortField::default(),
            order: SortOrder::default(),
            start: 0,
            end: DEFAULT_PAGE_END,
        }
    }
}

impl TaskQuery {
    pub fn from_params<'a, I>(params: I) -> CoreErrorResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();

        for (key, value) in params {
            match key {
                "_start" => query.start = parse_param(key, value)?,
                "_end" => query.end = parse_param(key, value)?,
                "_sort" => query.sort = value.parse()?,
                "_order" => query.order = value.parse()?,
                "titleCont" => query.title_cont = Some(value.to_string()),
                "status" => query.status = Some(value.to_string()),
                "assigneeId" => query.assignee_id = Some(parse_param(key, value)?),
                "labelId" => query.label_id = Some(parse_param(key, value)?),
                _ => {}
            }
        }

        if query.end < query.start {
            return Err(CoreError::invalid_query(
                "_end",
                format!("{} is before _start {}", query.end, query.start),
            ));
        }

        Ok(query)
    }

    /// All set filters hold for `task`.
    pub fn matches(&self, task: &Task) -> bool {
        self.title_cont
            .as_deref()
            .is_none_or(|needle| task.title.contains(needle))
            && self.status.as_deref().is_none_or(|slug| task.status == slug)
            && self.assignee_id.is_none_or(|id| task.assignee_id == Some(id))
            && self.label_id.is_none_or(|id| task.label_ids.contains(&id))
    }

    /// Filter, sort, then cut the `start..=end` window.
    pub fn apply(&self, tasks: &[Task]) -> TaskPage {
        let mut matching: Vec<&Task> = tasks.iter().filter(|task| self.matches(task)).collect();
        matching.sort_by(|a, b| self.order.apply(self.sort.compare(a, b)));

        let total = matching.len();
        let page_size = (self.end - self.start).saturating_add(1);

        TaskPage {
            total,
            tasks: matching
                .into_iter()
                .skip(self.start)
                .take(page_size)
                .cloned()
                .collect(),
        }
    }
}

#[track_caller]
fn parse_param<T: FromStr>(key: &str, value: &str) -> CoreErrorResult<T> {
    value
        .parse()
        .map_err(|_| CoreError::invalid_query(key, format!("'{}' is not a valid value", value)))
}
