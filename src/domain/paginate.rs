// src/domain/paginate.rs

pub const DEFAULT_PAGE_SIZE: usize = 9;

/// `max(1, ceil(count / page_size))`. A zero page size is treated as 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// The 1-based `page_index` slice of `items`, clamped to the slice bounds.
/// Out-of-range pages come back empty; callers clamp the index beforehand.
pub fn page_slice<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page_index
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Pulls a requested page into `[1, total_pages]`.
pub fn clamp_page(page_index: usize, total_pages: usize) -> usize {
    page_index.clamp(1, total_pages.max(1))
}
