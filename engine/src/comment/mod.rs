pub mod listing;
pub mod thread;

use serde::{Deserialize, Serialize};

use self::listing::{Filter, SortBy};

// The record shape shared with the upstream item format. `depth` is
// contextual: it holds the comment's position in its original top-level
// listing and is overwritten when the comment is re-attached into a thread
// view.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub by: String,
    pub time: f64,
    pub text: String,
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<Vec<String>>,
    pub score: i64,
    pub depth: u32,
}

impl Comment {
    /// Whether the record declares replies. Thread descent is gated on this,
    /// not on actual parent-pointer matches.
    pub fn has_replies(&self) -> bool {
        self.kids.as_ref().is_some_and(|kids| !kids.is_empty())
    }
}

// The page that will be returned to the client, with the sort and filter
// actually applied after defaulting.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CommentPage {
    pub items: Vec<Comment>,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub sort: SortBy,
    pub filter: Filter,
}
