//! Client-side pagination over the held user collection.

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

/// Rows per page when nothing is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

/// One page of a slice.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based page number that was requested.
    pub number: usize,
    pub items: &'a [T],
    /// Always at least 1, even for an empty collection.
    pub page_count: usize,
}

/// Slice out page `number` (1-based). Out-of-range numbers, including 0, give an
/// empty page rather than an error.
pub fn paginate<T>(items: &[T], number: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let page_count = page_count(items.len(), page_size);

    let slice = match number.checked_sub(1).and_then(|n| n.checked_mul(size)) {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    };

    Page {
        number,
        items: slice,
        page_count,
    }
}

/// `max(1, ceil(total / page_size))`.
pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get()).max(1)
}

/// Every page button to render, 1 through `page_count`.
pub fn page_numbers(page_count: usize) -> RangeInclusive<usize> {
    1..=page_count.max(1)
}

/// Pull a cursor back into `1..=page_count`, e.g. after deletes shrink the list.
pub fn clamp_page(number: usize, page_count: usize) -> usize {
    number.clamp(1, page_count.max(1))
}
