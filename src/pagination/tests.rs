//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Mutex;

// ============================================================================
// Scripted fetcher
// ============================================================================

/// Serves pre-built pages keyed by the cursor they are requested with and
/// records every request it receives.
#[derive(Default)]
struct ScriptedFetcher {
    pages: HashMap<Option<String>, Page<String>>,
    failures: Mutex<HashMap<Option<String>, usize>>,
    calls: Mutex<Vec<Option<String>>>,
}

impl ScriptedFetcher {
    /// Chain pages as first → c1 → c2 → ...; the last page returns an empty cursor
    fn from_pages(pages: &[&[&str]]) -> Self {
        let mut fetcher = Self::default();
        for (index, items) in pages.iter().enumerate() {
            let key = (index > 0).then(|| format!("c{index}"));
            let next = if index + 1 < pages.len() {
                Some(format!("c{}", index + 1))
            } else {
                Some(String::new())
            };
            let page = Page {
                items: items.iter().map(|s| (*s).to_string()).collect(),
                next,
                total_count: None,
            };
            fetcher.pages.insert(key, page);
        }
        fetcher
    }

    /// Split `0..total` into pages of `size` items each
    fn numbered(total: usize, size: usize) -> Self {
        let items: Vec<String> = (0..total).map(|i| format!("item-{i}")).collect();
        let chunks: Vec<Vec<&str>> = if items.is_empty() {
            vec![vec![]]
        } else {
            items
                .chunks(size)
                .map(|chunk| chunk.iter().map(String::as_str).collect())
                .collect()
        };
        let refs: Vec<&[&str]> = chunks.iter().map(Vec::as_slice).collect();
        Self::from_pages(&refs)
    }

    /// Fail the next `times` requests made with `cursor`
    fn fail_on(self, cursor: Option<&str>, times: usize) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(cursor.map(str::to_owned), times);
        self
    }

    fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    type Item = String;

    async fn fetch_page(&self, start: Option<&str>) -> Result<Page<String>> {
        let key = start.map(str::to_owned);
        self.calls.lock().unwrap().push(key.clone());

        {
            let mut failures = self.failures.lock().unwrap();
            if let Some(remaining) = failures.get_mut(&key) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(Error::decode("missing array 'items' in list response"));
                }
            }
        }

        self.pages
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::http_status(400, format!("unknown cursor {key:?}")))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// Page / PagerState Tests
// ============================================================================

#[test]
fn test_page_new_normalizes_empty_cursor() {
    let page = Page::new(vec![1, 2], Some(String::new()));
    assert!(page.next.is_none());
    assert!(page.is_last());

    let page = Page::new(vec![1], Some("c1".to_string()));
    assert_eq!(page.next.as_deref(), Some("c1"));
    assert!(!page.is_last());

    let page: Page<i32> = Page::last(vec![]);
    assert!(page.is_last());
}

#[test]
fn test_pager_state_advance() {
    assert_eq!(
        PagerState::advance(Some("abc".to_string())),
        PagerState::Active {
            cursor: "abc".to_string()
        }
    );
    assert_eq!(PagerState::advance(Some(String::new())), PagerState::Exhausted);
    assert_eq!(PagerState::advance(None), PagerState::Exhausted);
}

#[test]
fn test_pager_state_cursor() {
    assert_eq!(PagerState::Fresh.cursor(), None);
    assert_eq!(PagerState::Exhausted.cursor(), None);
    let active = PagerState::Active {
        cursor: "c9".to_string(),
    };
    assert_eq!(active.cursor(), Some("c9"));
    assert!(!active.is_exhausted());
    assert!(PagerState::Exhausted.is_exhausted());
}

// ============================================================================
// Pager Tests
// ============================================================================

#[tokio::test]
async fn test_two_pages_get_all() {
    let mut pager = Pager::new(ScriptedFetcher::from_pages(&[&["A", "B"], &["C"]]));

    let all = pager.get_all().await.unwrap();

    assert_eq!(all, strings(&["A", "B", "C"]));
    assert!(!pager.has_next());
    assert_eq!(pager.pages_fetched(), 2);
    assert_eq!(pager.items_fetched(), 3);
}

#[tokio::test]
async fn test_two_pages_get_next() {
    let mut pager = Pager::new(ScriptedFetcher::from_pages(&[&["A", "B"], &["C"]]));

    assert!(pager.has_next());
    assert_eq!(*pager.state(), PagerState::Fresh);

    assert_eq!(pager.get_next().await.unwrap(), strings(&["A", "B"]));
    assert!(pager.has_next());
    assert_eq!(
        *pager.state(),
        PagerState::Active {
            cursor: "c1".to_string()
        }
    );

    assert_eq!(pager.get_next().await.unwrap(), strings(&["C"]));
    assert!(!pager.has_next());
    assert_eq!(*pager.state(), PagerState::Exhausted);

    assert_eq!(
        pager.fetcher().calls(),
        vec![None, Some("c1".to_string())]
    );
}

#[tokio::test]
async fn test_single_empty_page() {
    let mut pager = Pager::new(ScriptedFetcher::from_pages(&[&[]]));

    assert!(pager.has_next());
    assert!(pager.get_next().await.unwrap().is_empty());
    assert!(!pager.has_next());

    let mut pager = Pager::new(ScriptedFetcher::from_pages(&[&[]]));
    assert!(pager.get_all().await.unwrap().is_empty());
    assert_eq!(pager.fetcher().calls().len(), 1);
}

#[tokio::test]
async fn test_get_next_after_exhaustion_makes_no_request() {
    let mut pager = Pager::new(ScriptedFetcher::from_pages(&[&["A"]]));

    assert_eq!(pager.get_next().await.unwrap(), strings(&["A"]));
    assert!(!pager.has_next());

    for _ in 0..3 {
        assert!(pager.get_next().await.unwrap().is_empty());
    }
    assert!(pager.get_all().await.unwrap().is_empty());

    assert_eq!(pager.fetcher().calls().len(), 1);
    assert_eq!(pager.pages_fetched(), 1);
}

#[tokio::test]
async fn test_empty_page_with_cursor_keeps_iterating() {
    let mut pager = Pager::new(ScriptedFetcher::from_pages(&[&[], &["A"], &[], &["B"]]));

    let all = pager.get_all().await.unwrap();

    assert_eq!(all, strings(&["A", "B"]));
    assert_eq!(pager.pages_fetched(), 4);
}

#[tokio::test]
async fn test_repeated_cursor_is_followed_as_given() {
    let mut fetcher = ScriptedFetcher::from_pages(&[&["A"], &["B"]]);
    fetcher.pages.insert(
        Some("c1".to_string()),
        Page {
            items: strings(&["B"]),
            next: Some("c1".to_string()),
            total_count: None,
        },
    );
    let mut pager = Pager::new(fetcher);

    for expected in [&["A"], &["B"], &["B"]] {
        assert_eq!(pager.get_next().await.unwrap(), strings(expected));
        assert_eq!(
            *pager.state(),
            PagerState::Active {
                cursor: "c1".to_string()
            }
        );
    }

    assert!(pager.has_next());
    assert_eq!(pager.pages_fetched(), 3);
    assert_eq!(
        pager.fetcher().calls(),
        vec![None, Some("c1".to_string()), Some("c1".to_string())]
    );
}

#[tokio::test]
async fn test_get_all_returns_every_item_in_order() {
    for total in 0..=9 {
        for size in 1..=4 {
            let mut pager = Pager::new(ScriptedFetcher::numbered(total, size));
            let all = pager.get_all().await.unwrap();

            let expected: Vec<String> = (0..total).map(|i| format!("item-{i}")).collect();
            assert_eq!(all, expected, "total={total} size={size}");
            assert!(!pager.has_next());
        }
    }
}

#[tokio::test]
async fn test_independent_pagers_agree() {
    let mut looped = Pager::new(ScriptedFetcher::numbered(7, 3));
    let mut collected = Vec::new();
    while looped.has_next() {
        collected.extend(looped.get_next().await.unwrap());
    }

    let mut bulk = Pager::new(ScriptedFetcher::numbered(7, 3));
    let all = bulk.get_all().await.unwrap();

    assert_eq!(collected, all);
    assert_eq!(collected.len(), 7);
    assert_eq!(looped.pages_fetched(), bulk.pages_fetched());
    assert_eq!(looped.fetcher().calls(), bulk.fetcher().calls());
}

#[tokio::test]
async fn test_failed_fetch_does_not_advance() {
    let fetcher = ScriptedFetcher::from_pages(&[&["A"], &["B"], &["C"]]).fail_on(Some("c1"), 1);
    let mut pager = Pager::new(fetcher);

    assert_eq!(pager.get_next().await.unwrap(), strings(&["A"]));

    let err = pager.get_next().await.unwrap_err();
    assert!(err.is_decode());
    assert!(pager.has_next());
    assert_eq!(
        *pager.state(),
        PagerState::Active {
            cursor: "c1".to_string()
        }
    );
    assert_eq!(pager.pages_fetched(), 1);

    assert_eq!(pager.get_next().await.unwrap(), strings(&["B"]));
    assert_eq!(pager.get_next().await.unwrap(), strings(&["C"]));
    assert!(!pager.has_next());

    assert_eq!(
        pager.fetcher().calls(),
        vec![
            None,
            Some("c1".to_string()),
            Some("c1".to_string()),
            Some("c2".to_string())
        ]
    );
}

#[tokio::test]
async fn test_failed_first_fetch_stays_fresh() {
    let fetcher = ScriptedFetcher::from_pages(&[&["A"]]).fail_on(None, 1);
    let mut pager = Pager::new(fetcher);

    assert!(pager.get_next().await.is_err());
    assert_eq!(*pager.state(), PagerState::Fresh);
    assert!(pager.has_next());

    assert_eq!(pager.get_next().await.unwrap(), strings(&["A"]));
}

#[tokio::test]
async fn test_get_all_fails_fast_and_rolls_back() {
    let fetcher = ScriptedFetcher::from_pages(&[&["A", "B"], &["C"]]).fail_on(Some("c1"), 1);
    let mut pager = Pager::new(fetcher);

    let err = pager.get_all().await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));

    assert_eq!(*pager.state(), PagerState::Fresh);
    assert_eq!(pager.pages_fetched(), 0);
    assert_eq!(pager.items_fetched(), 0);
    assert!(pager.has_next());

    // The injected failure is spent; a second pass starts over from page one.
    let all = pager.get_all().await.unwrap();
    assert_eq!(all, strings(&["A", "B", "C"]));
}

#[tokio::test]
async fn test_get_all_resumes_from_current_position() {
    let mut pager = Pager::new(ScriptedFetcher::from_pages(&[&["A"], &["B"], &["C"]]));

    assert_eq!(pager.get_next().await.unwrap(), strings(&["A"]));
    assert_eq!(pager.get_all().await.unwrap(), strings(&["B", "C"]));
}

#[tokio::test]
async fn test_total_count_tracks_latest_page() {
    let mut fetcher = ScriptedFetcher::from_pages(&[&["A"], &["B"]]);
    for page in fetcher.pages.values_mut() {
        page.total_count = Some(2);
    }
    let mut pager = Pager::new(fetcher);
    assert_eq!(pager.total_count(), None);

    pager.get_next().await.unwrap();
    assert_eq!(pager.total_count(), Some(2));
}

// ============================================================================
// Stream Tests
// ============================================================================

#[tokio::test]
async fn test_into_stream_yields_all_items() {
    let pager = Pager::new(ScriptedFetcher::from_pages(&[&["A", "B"], &[], &["C"]]));

    let items: Vec<String> = pager
        .into_stream()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(items, strings(&["A", "B", "C"]));
}

#[tokio::test]
async fn test_into_stream_surfaces_error_and_ends() {
    let fetcher = ScriptedFetcher::from_pages(&[&["A"], &["B"]]).fail_on(Some("c1"), 1);
    let pager = Pager::new(fetcher);

    let results: Vec<Result<String>> = pager.into_stream().collect().await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap(), "A");
    assert!(results[1].as_ref().unwrap_err().is_decode());
}
