//! Multi-page aggregation over page-numbered list endpoints.
//!
//! Both helpers drive an async page fetcher `fetch(page, limit)` strictly
//! sequentially, starting at page 1, and stop on the first short page.
//! Errors from any page abort the whole aggregation; partial results are
//! discarded.

use std::future::Future;

/// Maximum number of items a list endpoint returns per page.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Fetches up to `target` items by walking pages of [`MAX_PAGE_LIMIT`].
///
/// The request size of the last page is reduced to the remaining count.
/// Terminates when a page comes back with fewer than `MAX_PAGE_LIMIT`
/// items or when `target` items have been requested. Never returns more
/// than `target` items; returns fewer if the result set runs out first.
///
/// # Errors
///
/// Returns the first error produced by `fetch`.
pub async fn collect_pages<T, E, F, Fut>(target: usize, mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut items = Vec::new();
    let mut remaining = target;
    let mut page: u32 = 1;

    while remaining > 0 {
        let limit = page_limit(remaining);
        let batch = fetch(page, limit).await?;
        let batch_len = batch.len();
        items.extend(batch);

        remaining = remaining.saturating_sub(MAX_PAGE_LIMIT as usize);
        tracing::trace!(page, fetched = batch_len, remaining, "Collected page");

        if batch_len < MAX_PAGE_LIMIT as usize {
            break;
        }
        page = page.saturating_add(1);
    }

    items.truncate(target);
    Ok(items)
}

/// Collects the first `target` items satisfying `predicate`, in the order
/// they are seen.
///
/// Every page is requested with the full [`MAX_PAGE_LIMIT`]. Scanning a page
/// stops as soon as `target` matches are held; paging stops after that page
/// or on the first short page. Returns fewer than `target` items if the
/// result set runs out first.
///
/// # Errors
///
/// Returns the first error produced by `fetch`.
pub async fn collect_matching<T, E, F, Fut, P>(
    target: usize,
    mut fetch: F,
    mut predicate: P,
) -> Result<Vec<T>, E>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
    P: FnMut(&T) -> bool,
{
    let mut matches = Vec::new();
    let mut remaining = target;
    let mut page: u32 = 1;

    while remaining > 0 {
        let batch = fetch(page, MAX_PAGE_LIMIT).await?;
        let batch_len = batch.len();

        for item in batch {
            if predicate(&item) {
                matches.push(item);
                remaining -= 1;
            }
            if remaining == 0 {
                break;
            }
        }
        tracing::trace!(page, scanned = batch_len, remaining, "Scanned page");

        if batch_len < MAX_PAGE_LIMIT as usize {
            break;
        }
        page = page.saturating_add(1);
    }

    matches.truncate(target);
    Ok(matches)
}

fn page_limit(remaining: usize) -> u32 {
    u32::try_from(remaining).map_or(MAX_PAGE_LIMIT, |r| r.min(MAX_PAGE_LIMIT))
}
