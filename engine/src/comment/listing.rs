use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    comment::{Comment, CommentPage},
    corpus::Corpus,
};

pub const PER_PAGE: usize = 5;

/// Comments need at least this score to survive the `top` filter.
const TOP_SCORE: i64 = 10;

/// Width of the `recent` filter window, in seconds.
const RECENT_WINDOW: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Best,
    Newest,
    Oldest,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Best => "best",
            SortBy::Newest => "newest",
            SortBy::Oldest => "oldest",
        }
    }
}

impl<'de> Deserialize<'de> for SortBy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match String::deserialize(deserializer)?.as_str() {
            "best" => Ok(SortBy::Best),
            "newest" => Ok(SortBy::Newest),
            "oldest" => Ok(SortBy::Oldest),
            _ => Err(serde::de::Error::custom("invalid sort key")),
        }
    }
}

impl Serialize for SortBy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Top,
    Recent,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Top => "top",
            Filter::Recent => "recent",
        }
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match String::deserialize(deserializer)?.as_str() {
            "all" => Ok(Filter::All),
            "top" => Ok(Filter::Top),
            "recent" => Ok(Filter::Recent),
            _ => Err(serde::de::Error::custom("invalid filter key")),
        }
    }
}

impl Serialize for Filter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// View specification as it arrives from the query string. Missing keys fall
// back to `best` / `all` / page 1 inside the engine.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub sort: Option<SortBy>,
    #[serde(default)]
    pub filter: Option<Filter>,
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            sort: None,
            filter: None,
            page: default_page(),
        }
    }
}

/// Sorted, filtered, paginated view of a story's comment bucket.
///
/// An unknown story id degrades to an all-zero page; a page past the end
/// yields empty `items`. Neither is an error. `page` is 1-indexed and the
/// caller clamps the lower bound; the engine only refuses to underflow.
pub fn list_comments(
    corpus: &Corpus,
    story_id: &str,
    query: &ListQuery,
    clock: &dyn Clock,
) -> CommentPage {
    let sort = query.sort.unwrap_or(SortBy::Best);
    let filter = query.filter.unwrap_or(Filter::All);

    let mut comments: Vec<Comment> = corpus.comments_for_story(story_id).to_vec();

    // stable sorts so equal keys keep their bucket order
    match sort {
        SortBy::Best => comments.sort_by_key(|c| Reverse(c.score)),
        SortBy::Newest => comments.sort_by(|a, b| b.time.total_cmp(&a.time)),
        SortBy::Oldest => comments.sort_by(|a, b| a.time.total_cmp(&b.time)),
    }

    match filter {
        Filter::All => {}
        Filter::Top => comments.retain(|c| c.score >= TOP_SCORE),
        Filter::Recent => {
            let one_day_ago = clock.now() - RECENT_WINDOW;
            comments.retain(|c| c.time > one_day_ago);
        }
    }

    let total_count = comments.len();
    let total_pages = total_count.div_ceil(PER_PAGE);
    let start = query.page.saturating_sub(1) * PER_PAGE;
    let items: Vec<Comment> = comments.into_iter().skip(start).take(PER_PAGE).collect();

    CommentPage {
        items,
        total_count,
        current_page: query.page,
        total_pages,
        sort,
        filter,
    }
}
