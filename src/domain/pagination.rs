// src/domain/pagination.rs

//! Paging over an already-fetched result set. Pages are 1-based.

/// Items of `page`: `items[(page-1)*page_size .. page*page_size]`, clamped.
/// Page 0 is treated as page 1; a zero page size yields nothing.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// ceil(len / page_size)
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Parses a "go to page" value. Only pages inside `1..=total` are accepted.
pub fn jump_target(raw: &str, total: usize) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|p| (1..=total).contains(p))
}

/// Reads the `page` query value, falling back to the first page.
pub fn current_page(raw: Option<&str>, total: usize) -> usize {
    raw.and_then(|r| jump_target(r, total)).unwrap_or(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Prev(Option<usize>),
    Page(usize),
    Current(usize),
    Gap,
    Next(Option<usize>),
}

/// Page buttons for `current` of `total`:
/// Prev, [1, …], current-1, current, current+1, […, total], Next.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let mut links = Vec::with_capacity(9);

    links.push(PageLink::Prev((current > 1).then(|| current - 1)));

    if current > 2 {
        links.push(PageLink::Page(1));
        if current > 3 {
            links.push(PageLink::Gap);
        }
    }
    if current > 1 {
        links.push(PageLink::Page(current - 1));
    }
    links.push(PageLink::Current(current));
    if current < total {
        links.push(PageLink::Page(current + 1));
    }
    if current + 1 < total {
        if current + 2 < total {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(total));
    }

    links.push(PageLink::Next((current < total).then(|| current + 1)));
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_the_requested_page() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23]);
        assert!(paginate(&items, 4, 10).is_empty());
    }

    #[test]
    fn repeated_calls_return_the_same_slice() {
        let items: Vec<u32> = (0..17).collect();
        assert_eq!(paginate(&items, 2, 5), paginate(&items, 2, 5));
    }

    #[test]
    fn pages_reconstruct_the_full_result() {
        let items: Vec<u32> = (0..37).collect();
        for size in 1..=40 {
            let total = page_count(items.len(), size);
            let rebuilt: Vec<u32> = (1..=total)
                .flat_map(|p| paginate(&items, p, size).iter().copied())
                .collect();
            assert_eq!(rebuilt, items, "page size {size}");
        }
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 0, 2), &[1, 2]);
        assert!(paginate(&items, 1, 0).is_empty());
    }

    #[test]
    fn jump_rejects_out_of_range() {
        assert_eq!(jump_target("3", 5), Some(3));
        assert_eq!(jump_target("0", 5), None);
        assert_eq!(jump_target("6", 5), None);
        assert_eq!(jump_target("abc", 5), None);
        assert_eq!(current_page(Some("9"), 5), 1);
        assert_eq!(current_page(None, 5), 1);
    }

    #[test]
    fn links_in_the_middle_show_both_gaps() {
        use PageLink::*;
        assert_eq!(
            page_links(5, 10),
            vec![
                Prev(Some(4)),
                Page(1),
                Gap,
                Page(4),
                Current(5),
                Page(6),
                Gap,
                Page(10),
                Next(Some(6))
            ]
        );
    }

    #[test]
    fn links_at_the_edges() {
        use PageLink::*;
        assert_eq!(
            page_links(1, 2),
            vec![Prev(None), Current(1), Page(2), Next(Some(2))]
        );
        assert_eq!(
            page_links(3, 3),
            vec![Prev(Some(2)), Page(1), Page(2), Current(3), Next(None)]
        );
        assert_eq!(page_links(1, 0), vec![Prev(None), Current(1), Next(None)]);
    }
}
