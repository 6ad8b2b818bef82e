use serde::Serialize;

/// Builds the page links shown under a listing. `None` marks a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of a listing together with the unsliced match count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PagedResult<T> {
    /// Records of this page, in page order. Never longer than `page_size`.
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    /// Every record that matched the filter, regardless of the page.
    pub total_count: usize,
    pub total_pages: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub pages: Vec<Option<usize>>,
}

impl<T> PagedResult<T> {
    /// `page_number` and `page_size` are expected to be at least 1.
    pub fn new(items: Vec<T>, page_number: usize, page_size: usize, total_count: usize) -> Self {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size);

        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
            pages: get_pages(total_pages, page_number, 2, 2, 4, 2),
        }
    }
}
