use crate::error::Result;
use std::future::Future;
use tracing::{debug, warn};

/// Page size for every paginated endpoint (the API maximum).
pub const PAGE_SIZE: usize = 100;

/// Termination policy for a page walk.
///
/// The search walk treats a short page as the last one. The repository walk
/// does not: it keeps going until an empty page or the cap, matching the
/// endpoint's behavior of sometimes returning short intermediate pages.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    cap: Option<usize>,
    stop_on_short_page: bool,
}

impl PageLimits {
    /// Walk until an empty or short page.
    pub fn until_exhausted() -> Self {
        PageLimits {
            cap: None,
            stop_on_short_page: true,
        }
    }

    /// Walk until an empty page or `cap` accumulated items; the result is
    /// truncated to exactly `cap`.
    pub fn capped(cap: usize) -> Self {
        PageLimits {
            cap: Some(cap),
            stop_on_short_page: false,
        }
    }
}

/// Walk a paginated endpoint from page 1, accumulating items until the
/// limits say stop.
///
/// This is a best-effort collection: a failed page ends the walk with a
/// warning and whatever was already accumulated is returned. Errors never
/// escalate past this point.
pub async fn drain_pages<T, F, Fut>(mut fetch_page: F, limits: PageLimits) -> Vec<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let mut items = Vec::new();
    let mut page = 1u32;

    loop {
        let batch = match fetch_page(page).await {
            Ok(batch) => batch,
            Err(err) => {
                warn!(page, error = %err, "page fetch failed, keeping partial results");
                break;
            }
        };

        if batch.is_empty() {
            break;
        }

        let batch_len = batch.len();
        items.extend(batch);
        debug!(page, count = batch_len, total = items.len(), "retrieved page");

        if let Some(cap) = limits.cap {
            if items.len() >= cap {
                items.truncate(cap);
                break;
            }
        }

        if limits.stop_on_short_page && batch_len < PAGE_SIZE {
            break;
        }

        page += 1;
    }

    items
}
