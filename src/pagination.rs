//! Pagination window builder.
//!
//! Turns a `(current page, items per page, total items)` triple into the list
//! of page descriptors a GOV.UK style pagination strip shows: the first and
//! last page, a small window around the current page, and ellipsis markers
//! for the gaps in between.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// One renderable unit of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageDescriptor {
    Numeric { page: u64 },
    /// Gap marker between two shown pages. Pages strictly between
    /// `skipped_from` and `skipped_to` are hidden.
    Ellipsis { skipped_from: u64, skipped_to: u64 },
    Previous { target_page: u64 },
    Next { target_page: u64 },
    Active { page: u64 },
}

impl PageDescriptor {
    /// Page a link for this descriptor should point at, if any.
    pub fn target_page(&self) -> Option<u64> {
        match *self {
            PageDescriptor::Numeric { page } | PageDescriptor::Active { page } => Some(page),
            PageDescriptor::Previous { target_page } | PageDescriptor::Next { target_page } => {
                Some(target_page)
            }
            PageDescriptor::Ellipsis { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    /// Defaults to 1.
    pub current_page: u64,
    pub items_per_page: u64,
    pub total_items: u64,
}

fn default_page() -> u64 {
    1
}

impl PaginationRequest {
    pub fn new(items_per_page: u64, total_items: u64) -> Self {
        Self {
            current_page: default_page(),
            items_per_page,
            total_items,
        }
    }

    pub fn with_current_page(mut self, current_page: u64) -> Self {
        self.current_page = current_page;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationResult {
    pub items: Vec<PageDescriptor>,
    pub last_page: u64,
    pub first_item_index: u64,
    /// Current page after clamping into `[1, last_page]`.
    pub current_page: u64,
}

impl PaginationResult {
    pub fn is_shown(&self) -> bool {
        !self.items.is_empty()
    }
}

pub fn last_page(total_items: u64, items_per_page: u64) -> Result<u64, PaginationError> {
    if items_per_page == 0 {
        return Err(PaginationError::InvalidArgument(
            "items_per_page must be greater than zero".into(),
        ));
    }
    Ok(total_items.div_ceil(items_per_page).max(1))
}

/// Build the pagination window for `request`.
///
/// Out of range current pages are clamped into `[1, last_page]`; the only
/// rejected input is a zero page size.
pub fn build(request: PaginationRequest) -> Result<PaginationResult, PaginationError> {
    let PaginationRequest {
        current_page,
        items_per_page,
        total_items,
    } = request;

    let last_page = last_page(total_items, items_per_page)?;
    let current = current_page.clamp(1, last_page);
    let first_item_index = (current - 1).saturating_mul(items_per_page).saturating_add(1);

    if total_items <= items_per_page {
        return Ok(PaginationResult {
            items: Vec::new(),
            last_page,
            first_item_index,
            current_page: current,
        });
    }

    // Edge pages get two neighbours on the inward side, everything else one each side.
    let neighbours = if current == 1 || current == last_page { 2 } else { 1 };
    let left = current.saturating_sub(neighbours);
    let right = current.saturating_add(neighbours);

    // Ascending, so dedup is enough to collapse overlaps with the first/last page.
    let mut kept: Vec<u64> = std::iter::once(1)
        .chain(left.max(1)..=right.min(last_page))
        .chain(std::iter::once(last_page))
        .collect();
    kept.dedup();

    let mut items = Vec::with_capacity(2 * neighbours as usize + 6);
    if current > 1 {
        items.push(PageDescriptor::Previous {
            target_page: current - 1,
        });
    }

    let page = |p: u64| {
        if p == current {
            PageDescriptor::Active { page: p }
        } else {
            PageDescriptor::Numeric { page: p }
        }
    };

    let mut prev: Option<u64> = None;
    for p in kept {
        if let Some(prev) = prev {
            match p - prev {
                1 => {}
                2 => items.push(page(prev + 1)),
                _ => items.push(PageDescriptor::Ellipsis {
                    skipped_from: prev,
                    skipped_to: p,
                }),
            }
        }
        items.push(page(p));
        prev = Some(p);
    }

    if current < last_page {
        items.push(PageDescriptor::Next {
            target_page: current + 1,
        });
    }

    tracing::trace!(current, last_page, descriptors = items.len(), "built pagination window");

    Ok(PaginationResult {
        items,
        last_page,
        first_item_index,
        current_page: current,
    })
}
