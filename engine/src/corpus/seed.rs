use crate::{
    comment::Comment,
    corpus::{CommentBucket, Corpus, Story},
};

/// The corpus the demo front ends install at startup. Record times are laid
/// out relative to `now`, the way the demos rebuild them against the load
/// instant, so the time-based listing filter has something to bite on.
pub fn sample(now: f64) -> Corpus {
    let stories = vec![
        Story {
            id: "1".to_string(),
            title: "A Deep Dive into Incremental Parsing".to_string(),
            url: Some("https://example.dev/incremental-parsing".to_string()),
            score: 342,
            by: "parserdev".to_string(),
            time: now - 3600.0,
            descendants: 89,
            text: None,
            kind: "story".to_string(),
        },
        Story {
            id: "2".to_string(),
            title: "Show HN: I built a terminal feed reader over a weekend".to_string(),
            url: None,
            score: 156,
            by: "termtinker".to_string(),
            time: now - 7200.0,
            descendants: 34,
            text: Some(
                "Hey everyone! I put together this little TUI for reading feeds \
                 without leaving the terminal. It caches everything locally and \
                 renders threads inline. Feedback very welcome."
                    .to_string(),
            ),
            kind: "story".to_string(),
        },
        Story {
            id: "3".to_string(),
            title: "PostgreSQL 17 Released".to_string(),
            url: Some("https://www.postgresql.org/about/news/postgresql-17-released".to_string()),
            score: 289,
            by: "pgdev".to_string(),
            time: now - 10800.0,
            descendants: 67,
            kind: "story".to_string(),
            text: None,
        },
    ];

    let buckets = vec![
        CommentBucket {
            story: "1".to_string(),
            comments: vec![
                comment(
                    now,
                    "c1",
                    "lexfan",
                    3000.0,
                    "Great writeup. The error recovery section finally made \
                     red-green trees click for me.",
                    "1",
                    Some(&["c2", "c3"]),
                    23,
                    0,
                ),
                comment(
                    now,
                    "c2",
                    "treewalker",
                    2800.0,
                    "Same here. Storing the trivia on the tokens instead of the \
                     nodes is the trick I was missing.",
                    "c1",
                    None,
                    12,
                    1,
                ),
                comment(
                    now,
                    "c3",
                    "bench_nerd",
                    2600.0,
                    "Curious how this holds up on large files. Has anyone \
                     measured reparse latency past a few megabytes?",
                    "c1",
                    Some(&["c4"]),
                    8,
                    1,
                ),
                comment(
                    now,
                    "c4",
                    "profiled",
                    2400.0,
                    "I ran it against a 40MB log file: the initial parse is the \
                     only slow part, edits reparse in under a millisecond.",
                    "c3",
                    None,
                    15,
                    2,
                ),
                comment(
                    now,
                    "c5",
                    "grammarian",
                    2000.0,
                    "The section on operator precedence climbing alone is worth \
                     the read.",
                    "1",
                    None,
                    19,
                    0,
                ),
            ],
        },
        CommentBucket {
            story: "2".to_string(),
            comments: vec![
                comment(
                    now,
                    "c6",
                    "cursesveteran",
                    6000.0,
                    "Nice work! Scrolling feels smooth even over ssh, which is \
                     more than I can say for most TUIs.",
                    "2",
                    None,
                    14,
                    0,
                ),
                comment(
                    now,
                    "c7",
                    "keymapper",
                    5800.0,
                    "How are you handling keybindings? I'd love vim-style \
                     navigation for the thread view.",
                    "2",
                    Some(&["c8"]),
                    9,
                    0,
                ),
                comment(
                    now,
                    "c8",
                    "termtinker",
                    5600.0,
                    "Right now they're hardcoded, but a config file for \
                     remapping is next on my list.",
                    "c7",
                    None,
                    6,
                    1,
                ),
            ],
        },
        CommentBucket {
            story: "3".to_string(),
            comments: vec![comment(
                now,
                "c9",
                "dba_dan",
                9000.0,
                "Incremental backup support is the headline for me, the rest \
                 is gravy.",
                "3",
                None,
                21,
                0,
            )],
        },
    ];

    Corpus::new(stories, buckets)
}

#[allow(clippy::too_many_arguments)]
fn comment(
    now: f64,
    id: &str,
    by: &str,
    age_secs: f64,
    text: &str,
    parent: &str,
    kids: Option<&[&str]>,
    score: i64,
    depth: u32,
) -> Comment {
    Comment {
        id: id.to_string(),
        by: by.to_string(),
        time: now - age_secs,
        text: text.to_string(),
        parent: parent.to_string(),
        kids: kids.map(|k| k.iter().map(|s| s.to_string()).collect()),
        score,
        depth,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        clock::FixedClock,
        comment::listing::{list_comments, Filter, ListQuery, SortBy},
        comment::thread::resolve_thread,
    };

    const NOW: f64 = 1_700_000_000.0;

    #[test]
    fn test_sample_has_the_documented_shape() {
        let corpus = sample(NOW);
        let ids: Vec<&str> = corpus.stories().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(corpus.comments().count(), 9);
        assert!(corpus.story("2").unwrap().url.is_none());
        assert!(corpus.story("2").unwrap().text.is_some());
    }

    #[test]
    fn test_sample_thread_for_c1() {
        let corpus = sample(NOW);

        let thread = resolve_thread(&corpus, "c1");
        let ids: Vec<&str> = thread.iter().map(|c| c.id.as_str()).collect();
        let depths: Vec<u32> = thread.iter().map(|c| c.depth).collect();
        assert_eq!(ids, ["c1", "c2", "c3", "c4"]);
        assert_eq!(depths, [0, 1, 1, 2]);
    }

    #[test]
    fn test_sample_listing_newest_fits_one_page() {
        let corpus = sample(NOW);

        let page = list_comments(
            &corpus,
            "1",
            &ListQuery {
                sort: Some(SortBy::Newest),
                filter: None,
                page: 1,
            },
            &FixedClock(NOW),
        );
        let ids: Vec<&str> = page.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c5", "c4", "c3", "c2", "c1"]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_sample_listing_best_top() {
        let corpus = sample(NOW);

        let page = list_comments(
            &corpus,
            "1",
            &ListQuery {
                sort: Some(SortBy::Best),
                filter: Some(Filter::Top),
                page: 1,
            },
            &FixedClock(NOW),
        );
        let ids: Vec<&str> = page.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c5", "c4", "c2"], "scores below 10 drop out");
    }

    #[test]
    fn test_sample_recent_window_moves_with_the_clock() {
        let corpus = sample(NOW);

        // seeded relative to NOW, everything is within the last day
        let fresh = list_comments(
            &corpus,
            "1",
            &ListQuery {
                sort: None,
                filter: Some(Filter::Recent),
                page: 1,
            },
            &FixedClock(NOW),
        );
        assert_eq!(fresh.total_count, 5);

        // a day minus 2400s later, only the youngest comment is left
        let later = list_comments(
            &corpus,
            "1",
            &ListQuery {
                sort: None,
                filter: Some(Filter::Recent),
                page: 1,
            },
            &FixedClock(NOW + 84_000.0),
        );
        let ids: Vec<&str> = later.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c5"]);
    }
}
