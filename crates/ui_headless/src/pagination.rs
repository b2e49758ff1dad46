//! Page-control range generation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One control in a pagination strip.
pub enum PaginationItem {
    /// Page number (1-based).
    Page(u32),
    /// Gap marker between non-adjacent pages.
    Dots,
}

fn pages(start: u32, end: u32) -> impl Iterator<Item = PaginationItem> {
    (start..=end).map(PaginationItem::Page)
}

/// Builds the controls for `total` pages around `active`.
///
/// `boundaries` pages are always kept at each end and `siblings` pages on each side of the active
/// page; gaps collapse into [`PaginationItem::Dots`]. The strip keeps a constant length once
/// `total` exceeds `2 * siblings + 2 * boundaries + 3`. `active` is clamped to `1..=total`.
pub fn pagination_range(
    total: u32,
    active: u32,
    siblings: u32,
    boundaries: u32,
) -> Vec<PaginationItem> {
    if total == 0 {
        return Vec::new();
    }
    let active = active.clamp(1, total);
    let boundaries = boundaries.max(1);
    let visible_slots = siblings
        .saturating_mul(2)
        .saturating_add(3)
        .saturating_add(boundaries.saturating_mul(2));
    if visible_slots >= total {
        return pages(1, total).collect();
    }

    let left_sibling = active.saturating_sub(siblings).max(boundaries);
    let right_sibling = active.saturating_add(siblings).min(total - boundaries);
    let show_left_dots = left_sibling > boundaries + 2;
    let show_right_dots = right_sibling + boundaries + 1 < total;

    let mut items = Vec::with_capacity(visible_slots as usize);
    match (show_left_dots, show_right_dots) {
        (false, true) => {
            let left_count = siblings * 2 + boundaries + 2;
            items.extend(pages(1, left_count));
            items.push(PaginationItem::Dots);
            items.extend(pages(total - boundaries + 1, total));
        }
        (true, false) => {
            let right_count = boundaries + 1 + siblings * 2;
            items.extend(pages(1, boundaries));
            items.push(PaginationItem::Dots);
            items.extend(pages(total - right_count, total));
        }
        _ => {
            items.extend(pages(1, boundaries));
            items.push(PaginationItem::Dots);
            items.extend(pages(left_sibling, right_sibling));
            items.push(PaginationItem::Dots);
            items.extend(pages(total - boundaries + 1, total));
        }
    }
    items
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Active page bookkeeping for a pagination control.
pub struct PaginationState {
    /// Number of pages.
    pub total: u32,
    /// Active page, 1-based; `0` only when `total` is `0`.
    pub active: u32,
    /// Pages shown on each side of the active page.
    pub siblings: u32,
    /// Pages always shown at each end.
    pub boundaries: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PaginationState {
    /// State for `total` pages starting at page 1, with one sibling and one boundary.
    pub fn new(total: u32) -> Self {
        Self {
            total,
            active: total.min(1),
            siblings: 1,
            boundaries: 1,
        }
    }

    /// Number of pages needed to show `items` entries `per_page` at a time.
    pub fn for_items(items: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        Self::new(items.div_ceil(per_page) as u32)
    }

    /// Jumps to `page`, clamped to the available pages.
    pub fn set_page(&mut self, page: u32) {
        self.active = if self.total == 0 {
            0
        } else {
            page.clamp(1, self.total)
        };
    }

    /// Moves to the next page.
    pub fn next(&mut self) {
        self.set_page(self.active.saturating_add(1));
    }

    /// Moves to the previous page.
    pub fn previous(&mut self) {
        self.set_page(self.active.saturating_sub(1));
    }

    /// Moves to the first page.
    pub fn first(&mut self) {
        self.set_page(1);
    }

    /// Moves to the last page.
    pub fn last(&mut self) {
        self.set_page(self.total);
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.active > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.active < self.total
    }

    /// Controls for the current state; see [`pagination_range`].
    pub fn range(&self) -> Vec<PaginationItem> {
        pagination_range(self.total, self.active, self.siblings, self.boundaries)
    }

    /// Half-open index range of the active page's entries within `items` total entries.
    pub fn slice_bounds(&self, items: usize, per_page: usize) -> (usize, usize) {
        let per_page = per_page.max(1);
        let start = (self.active.saturating_sub(1) as usize)
            .saturating_mul(per_page)
            .min(items);
        (start, (start + per_page).min(items))
    }
}
