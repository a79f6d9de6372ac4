//! Page-window derivation for pagination controls.
//!
//! Given the current page and the total page count, derives the sequence of
//! page numbers and ellipsis markers a pagination control should render.
//! Two densities exist: a compact window for narrow viewports and a full
//! window for wide ones.

/// One slot in a pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    /// A navigable page number (1-based).
    Page(u32),
    /// A marker for an elided range of pages.
    Ellipsis,
}

/// Display density of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// Narrow viewports: at most three slots.
    Compact,
    /// Wide viewports: at most seven page numbers plus ellipses.
    Full,
}

/// Derive the pagination window for `current_page` out of `total_pages`.
///
/// Pure and deterministic: identical inputs always produce an identical
/// sequence. Emitted page numbers never fall outside `1..=total_pages`, are
/// non-decreasing, and an ellipsis never neighbors another ellipsis.
#[must_use]
pub fn window(current_page: u32, total_pages: u32, density: Density) -> Vec<PageMark> {
    match density {
        Density::Compact => compact_window(current_page, total_pages),
        Density::Full => full_window(current_page, total_pages),
    }
}

fn compact_window(current_page: u32, total_pages: u32) -> Vec<PageMark> {
    use PageMark::{Ellipsis, Page};

    if total_pages <= 3 {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page == 1 {
        vec![Page(1), Page(2), Ellipsis]
    } else if current_page == total_pages {
        vec![Ellipsis, Page(total_pages - 1), Page(total_pages)]
    } else {
        vec![Ellipsis, Page(current_page), Ellipsis]
    }
}

fn full_window(current_page: u32, total_pages: u32) -> Vec<PageMark> {
    use PageMark::{Ellipsis, Page};

    if total_pages <= 7 {
        return (1..=total_pages).map(Page).collect();
    }

    let mut marks = vec![Page(1)];

    if current_page <= 4 {
        marks.extend((2..=5).map(Page));
        marks.push(Ellipsis);
        marks.push(Page(total_pages));
    } else if current_page >= total_pages - 3 {
        marks.push(Ellipsis);
        marks.extend((total_pages - 4..=total_pages).map(Page));
    } else {
        marks.push(Ellipsis);
        marks.extend((current_page - 1..=current_page + 1).map(Page));
        marks.push(Ellipsis);
        marks.push(Page(total_pages));
    }

    marks
}
