/// Returns the requested page of `items` and the total page count.
///
/// Pages are 1-based; page 0 is read as page 1. A page past the end is an
/// empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    if page_size == 0 {
        return (&[], 0);
    }

    let total_pages = items.len().div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return (&[], total_pages);
    }
    let end = start.saturating_add(page_size).min(items.len());
    (&items[start..end], total_pages)
}
