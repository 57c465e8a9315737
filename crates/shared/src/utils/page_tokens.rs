use crate::domain::responses::PageToken;

pub const DEFAULT_MAX_PAGES_TO_SHOW: u32 = 9;
pub const DEFAULT_WINDOW_SIZE: u32 = 2;

/// Clamp a requested page into `[1, total_pages]`, treating a non-positive
/// total as a single page.
pub fn clamp_page(page: i32, total_pages: i32) -> i32 {
    page.clamp(1, total_pages.max(1))
}

/// Build the page-number/ellipsis sequence for a bounded page control.
///
/// Inputs are normalised rather than rejected: `total_pages` is raised to 1
/// and `page` is clamped into range, so every call yields a displayable
/// sequence. When every page fits in `max_pages_to_show` slots the full run
/// is returned; otherwise the first and last pages are kept, a window of
/// `window_size` pages is shown on each side of the current page, and
/// skipped runs collapse into [`PageToken::Ellipsis`].
///
/// The full-run/collapsed choice depends on `max_pages_to_show` alone, even
/// when the window could never fill that many slots.
pub fn build_page_tokens(
    page: i32,
    total_pages: i32,
    max_pages_to_show: u32,
    window_size: u32,
) -> Vec<PageToken> {
    let total_pages = total_pages.max(1);
    let page = clamp_page(page, total_pages);

    if total_pages == 1 {
        return vec![PageToken::Page(1)];
    }

    if i64::from(total_pages) <= i64::from(max_pages_to_show.max(1)) {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    // i64 so `page +/- window_size` cannot overflow near i32::MAX.
    let last = i64::from(total_pages);
    let current = i64::from(page);
    let window = i64::from(window_size);

    let start = (current - window).max(2);
    let end = (current + window).min(last - 1);

    let middle = usize::try_from(end - start + 1).unwrap_or(0);
    let mut tokens = Vec::with_capacity(middle + 4);

    tokens.push(PageToken::Page(1));

    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    // start..=end lies inside [2, total_pages - 1], so the narrowing is lossless.
    tokens.extend((start..=end).map(|n| PageToken::Page(n as i32)));

    if end < last - 1 {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.push(PageToken::Page(total_pages));

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    fn build(page: i32, total_pages: i32) -> Vec<PageToken> {
        build_page_tokens(
            page,
            total_pages,
            DEFAULT_MAX_PAGES_TO_SHOW,
            DEFAULT_WINDOW_SIZE,
        )
    }

    #[test]
    fn single_page() {
        assert_eq!(build(1, 1), vec![Page(1)]);
    }

    #[test]
    fn full_run_when_every_page_fits() {
        assert_eq!(
            build(5, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn full_run_at_exact_slot_count() {
        let tokens = build(1, 9);

        assert_eq!(tokens.len(), 9);
        assert!(tokens.iter().all(|t| !t.is_ellipsis()));
    }

    #[test]
    fn first_page_only_trails_with_gap() {
        assert_eq!(build(1, 20), vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]);
    }

    #[test]
    fn middle_page_has_gaps_on_both_sides() {
        assert_eq!(
            build(10, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20),
            ]
        );
    }

    #[test]
    fn last_page_only_leads_with_gap() {
        assert_eq!(build(20, 20), vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]);
    }

    #[test]
    fn malformed_input_degrades_to_single_page() {
        assert_eq!(build(-5, 0), vec![Page(1)]);
        assert_eq!(build(i32::MIN, i32::MIN), vec![Page(1)]);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        assert_eq!(build(99, 20), build(20, 20));
        assert_eq!(build(0, 20), build(1, 20));
    }

    #[test]
    fn window_adjacent_to_first_page_has_no_leading_gap() {
        assert_eq!(
            build(4, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn zero_window_keeps_only_current_page() {
        assert_eq!(
            build_page_tokens(10, 20, 9, 0),
            vec![Page(1), Ellipsis, Page(10), Ellipsis, Page(20)]
        );
        assert_eq!(build_page_tokens(1, 20, 9, 0), vec![Page(1), Ellipsis, Page(20)]);
        assert_eq!(build_page_tokens(20, 20, 9, 0), vec![Page(1), Ellipsis, Page(20)]);
    }

    #[test]
    fn small_slot_count_collapses_regardless_of_window() {
        // Collapsed form is chosen even though it emits more than three tokens.
        assert_eq!(
            build_page_tokens(5, 10, 3, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10),
            ]
        );
    }

    #[test]
    fn zero_slot_count_is_treated_as_one() {
        assert_eq!(build_page_tokens(1, 2, 0, 2), vec![Page(1), Page(2)]);
        assert_eq!(build_page_tokens(1, 2, 1, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn page_at_i32_max_does_not_overflow() {
        let tokens = build_page_tokens(i32::MAX, i32::MAX, 9, 1);

        assert_eq!(
            tokens,
            vec![Page(1), Ellipsis, Page(i32::MAX - 1), Page(i32::MAX)]
        );
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(6, 5), 5);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(3, -1), 1);
    }
}
