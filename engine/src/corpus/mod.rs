pub mod seed;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::comment::Comment;

// The record shape shared with the upstream story format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Story {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub score: i64,
    pub by: String,
    pub time: f64,
    pub descendants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

// One story's comment collection. The association is fixed when the corpus
// is assembled, not derived from parent chains.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommentBucket {
    pub story: String,
    pub comments: Vec<Comment>,
}

#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    #[error("malformed corpus document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct CorpusDoc {
    stories: Vec<Story>,
    comments: Vec<CommentBucket>,
}

/// The full fixed set of story and comment records. Built once, read-only
/// afterwards, so shared references can be handed out freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    stories: Vec<Story>,
    buckets: Vec<CommentBucket>,
}

impl Corpus {
    pub fn new(stories: Vec<Story>, buckets: Vec<CommentBucket>) -> Corpus {
        let comment_count = {
            let mut seen = HashSet::new();
            for comment in buckets.iter().flat_map(|b| b.comments.iter()) {
                if !seen.insert(comment.id.as_str()) {
                    tracing::warn!("duplicate comment id `{}` in corpus", comment.id);
                }
            }
            seen.len()
        };
        tracing::debug!(
            stories = stories.len(),
            comments = comment_count,
            "assembled corpus"
        );

        Corpus { stories, buckets }
    }

    /// Parse a corpus out of a JSON document of upstream-shaped records:
    /// `{ "stories": [...], "comments": [{ "story": ..., "comments": [...] }] }`.
    pub fn from_json(document: &str) -> Result<Corpus, CorpusError> {
        let doc: CorpusDoc = serde_json::from_str(document)?;
        Ok(Corpus::new(doc.stories, doc.comments))
    }

    pub fn story(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    // Linear scan over every bucket. The corpus is small and static, so an
    // id index would buy nothing observable.
    pub fn comment(&self, id: &str) -> Option<&Comment> {
        self.comments().find(|c| c.id == id)
    }

    /// The story's precomputed comment collection; empty for an unknown id.
    pub fn comments_for_story(&self, story_id: &str) -> &[Comment] {
        self.buckets
            .iter()
            .find(|b| b.story == story_id)
            .map(|b| b.comments.as_slice())
            .unwrap_or(&[])
    }

    /// All stories, insertion order.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Every comment in the corpus: buckets in story insertion order, then
    /// bucket order. This is the scan order sibling groups inherit.
    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.buckets.iter().flat_map(|b| b.comments.iter())
    }
}
