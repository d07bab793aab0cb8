use serde::Serialize;

/// One entry in the rendered page strip: a numbered page button or an
/// ellipsis over a gap. The `id` is a stable identity tag so the UI can
/// reconcile items across renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageItem {
    Page { value: usize, id: String },
    Ellipsis { id: String },
}

impl PageItem {
    fn page(value: usize, id: impl Into<String>) -> Self {
        PageItem::Page {
            value,
            id: id.into(),
        }
    }

    fn ellipsis(id: &str) -> Self {
        PageItem::Ellipsis { id: id.to_string() }
    }
}

/// Windowed page strip for a listing.
///
/// Always includes:
/// - the first page,
/// - up to three pages surrounding `current_page`,
/// - the last page,
/// - ellipsis markers where page ranges are skipped.
///
/// Callers render nothing at all when `total_pages <= 1`.
pub fn compute_page_items(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    let mut items = Vec::new();

    // Always show first page
    items.push(PageItem::page(1, "first"));

    // Middle range around the current page
    let range_start = 2.max(current_page.saturating_sub(1));
    let range_end = total_pages.saturating_sub(1).min(current_page + 1);

    if range_start > 2 {
        items.push(PageItem::ellipsis("ellipsis-1"));
    }

    for page in range_start..=range_end {
        items.push(PageItem::page(page, format!("middle-{page}")));
    }

    if range_end < total_pages.saturating_sub(1) {
        items.push(PageItem::ellipsis("ellipsis-2"));
    }

    // Always show last page if more than one page exists
    if total_pages > 1 {
        items.push(PageItem::page(total_pages, "last"));
    }

    items
}

/// Number of pages needed to show `total_items` at `per_page` apiece.
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// The window of `items` visible on `current_page`. Pages are 1-based; a
/// page past the end is empty.
pub fn page_slice<T>(items: &[T], current_page: usize, per_page: usize) -> &[T] {
    let start = current_page.saturating_sub(1) * per_page;
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Previous is disabled on the first page.
pub fn has_previous(current_page: usize) -> bool {
    current_page > 1
}

/// Next is disabled on the last page.
pub fn has_next(current_page: usize, total_pages: usize) -> bool {
    current_page < total_pages
}
