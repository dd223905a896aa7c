//! Requested-count arithmetic for the list views
//!
//! The list view starts at 20 records and grows by 20 on every "load more".
//! The gallery view always asks for 10. Growing the count never reuses
//! previously fetched records: callers refetch the whole batch.

use serde::Serialize;

pub const INITIAL_LIST_LIMIT: usize = 20;
pub const LOAD_MORE_STEP: usize = 20;
pub const GALLERY_LIMIT: usize = 10;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ListLimit {
    /// Grows by [`LOAD_MORE_STEP`] per load-more action
    Paged { count: usize },
    /// Never grows
    Fixed { count: usize },
}

impl ListLimit {
    pub fn paged() -> Self {
        Self::starting_at(INITIAL_LIST_LIMIT)
    }

    pub fn starting_at(count: usize) -> Self {
        ListLimit::Paged { count }
    }

    pub fn gallery() -> Self {
        ListLimit::Fixed {
            count: GALLERY_LIMIT,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            ListLimit::Paged { count } | ListLimit::Fixed { count } => *count,
        }
    }

    pub fn can_load_more(&self) -> bool {
        matches!(self, ListLimit::Paged { .. })
    }

    /// The limit after one load-more action
    pub fn load_more(self) -> Self {
        match self {
            ListLimit::Paged { count } => ListLimit::Paged {
                count: count.saturating_add(LOAD_MORE_STEP),
            },
            fixed @ ListLimit::Fixed { .. } => fixed,
        }
    }

    /// The limit after `steps` load-more actions
    pub fn after_load_more(self, steps: usize) -> Self {
        match self {
            ListLimit::Paged { count } => ListLimit::Paged {
                count: count.saturating_add(steps.saturating_mul(LOAD_MORE_STEP)),
            },
            fixed @ ListLimit::Fixed { .. } => fixed,
        }
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self::paged()
    }
}
