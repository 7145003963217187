use serde::Serialize;

/// Fixed number of users shown per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

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

/// Number of pages needed for `total` items, `0` when there are none.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

/// Clamps `page` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page links to render, `None` marks an elided range.
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total: usize,
    /// 1-based position of the first item on this page, `0` when empty.
    pub start: usize,
    /// 1-based position of the last item on this page, `0` when empty.
    pub end: usize,
}

impl<T> Paginated<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl<T: Clone> Paginated<T> {
    /// Cuts one page out of a fully materialized collection.
    ///
    /// Out of range page numbers are clamped, never wrapped.
    pub fn from_slice(all: &[T], page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total = all.len();
        let total_pages = total_pages(total, per_page);
        let page = clamp_page(page, total_pages);

        let offset = (page - 1) * per_page;
        let items: Vec<T> = all.iter().skip(offset).take(per_page).cloned().collect();
        let (start, end) = if items.is_empty() {
            (0, 0)
        } else {
            (offset + 1, offset + items.len())
        };

        Self {
            items,
            pages: get_pages(total_pages, page, 2, 2, 4, 2),
            page,
            total_pages,
            total,
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn twelve_items_make_three_pages() {
        let items = numbers(12);

        let first = Paginated::from_slice(&items, 1, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5]);
        assert_eq!((first.start, first.end, first.total), (1, 5, 12));
        assert_eq!(first.total_pages, 3);

        let last = Paginated::from_slice(&items, 3, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(last.items, vec![11, 12]);
        assert_eq!((last.start, last.end), (11, 12));
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let items = numbers(12);

        let below = Paginated::from_slice(&items, 0, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(below.page, 1);

        let above = Paginated::from_slice(&items, 99, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(above.page, 3);
        assert_eq!(above.items, vec![11, 12]);
    }

    #[test]
    fn empty_collection_stays_on_first_page() {
        let page = Paginated::<usize>::from_slice(&[], 4, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(page.pages.is_empty());
        assert_eq!((page.start, page.end), (0, 0));
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn page_links_elide_distant_pages() {
        assert_eq!(
            get_pages(3, 1, 2, 2, 4, 2),
            vec![Some(1), Some(2), Some(3)]
        );
        assert_eq!(
            get_pages(20, 10, 2, 2, 4, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }
}
