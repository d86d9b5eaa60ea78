//! Generic pager over any [`PageFetcher`]

use super::types::{PageFetcher, PagerState};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, warn};

/// Iteration bookkeeping, snapshotted by `get_all` so a failure can roll back
#[derive(Debug, Clone, Default)]
struct Progress {
    state: PagerState,
    pages_fetched: u64,
    items_fetched: u64,
    total_count: Option<u64>,
}

/// Stateful iterator over every page of a listing
///
/// The pager owns its fetcher and its cursor; two pagers never share state.
/// All mutating operations take `&mut self`, so a single pager cannot be
/// driven from two places at once.
///
/// Calling [`get_next`](Self::get_next) on an exhausted pager returns an empty
/// vector and makes no request.
#[derive(Debug)]
pub struct Pager<F: PageFetcher> {
    fetcher: F,
    progress: Progress,
}

impl<F: PageFetcher> Pager<F> {
    /// Create a pager positioned before the first page
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            progress: Progress::default(),
        }
    }

    /// True until a fetched page comes back without a cursor. Never does I/O.
    pub fn has_next(&self) -> bool {
        !self.progress.state.is_exhausted()
    }

    /// Current iteration state
    pub fn state(&self) -> &PagerState {
        &self.progress.state
    }

    /// Number of pages fetched successfully so far
    pub fn pages_fetched(&self) -> u64 {
        self.progress.pages_fetched
    }

    /// Number of items returned so far
    pub fn items_fetched(&self) -> u64 {
        self.progress.items_fetched
    }

    /// Total item count reported by the most recent page that carried one
    pub fn total_count(&self) -> Option<u64> {
        self.progress.total_count
    }

    /// The underlying fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the next page and return its items
    ///
    /// On failure the pager is left exactly as it was, so calling again
    /// re-requests the same page.
    pub async fn get_next(&mut self) -> Result<Vec<F::Item>> {
        if self.progress.state.is_exhausted() {
            debug!("Pager exhausted, skipping fetch");
            return Ok(Vec::new());
        }

        let start = self.progress.state.cursor().map(str::to_owned);
        let page = self.fetcher.fetch_page(start.as_deref()).await?;

        if start.is_some() && page.next == start {
            warn!(
                cursor = start.as_deref().unwrap_or_default(),
                "Service returned the cursor it was sent; the listing may not terminate"
            );
        }

        let progress = &mut self.progress;
        progress.state = PagerState::advance(page.next);
        progress.pages_fetched += 1;
        progress.items_fetched += page.items.len() as u64;
        if page.total_count.is_some() {
            progress.total_count = page.total_count;
        }

        debug!(
            page = progress.pages_fetched,
            items = page.items.len(),
            exhausted = progress.state.is_exhausted(),
            "Fetched page"
        );

        Ok(page.items)
    }

    /// Fetch every remaining page and concatenate the items in page order
    ///
    /// Fails fast: the first error is returned, no partial list is exposed,
    /// and the pager is restored to where it stood before the call.
    pub async fn get_all(&mut self) -> Result<Vec<F::Item>> {
        let checkpoint = self.progress.clone();
        let mut all = Vec::new();

        while self.has_next() {
            match self.get_next().await {
                Ok(items) => all.extend(items),
                Err(e) => {
                    debug!(
                        pages = self.progress.pages_fetched - checkpoint.pages_fetched,
                        "get_all failed, rolling back pager"
                    );
                    self.progress = checkpoint;
                    return Err(e);
                }
            }
        }

        Ok(all)
    }

    /// Turn the pager into a stream of items, fetching one page at a time
    ///
    /// The stream yields the error of a failed fetch and then ends.
    pub fn into_stream(self) -> impl Stream<Item = Result<F::Item>> {
        stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok(None);
            }
            let items = pager.get_next().await;
            items.map(|items| {
                let page = stream::iter(items.into_iter().map(Ok::<F::Item, Error>));
                Some((page, pager))
            })
        })
        .try_flatten()
    }
}
