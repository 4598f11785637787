use serde::Serialize;
use tracing::debug;

use crate::error::BoardError;
use crate::models::{Order, Thought};
use crate::store::{FindOptions, ThoughtStore};

pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    /// 1-indexed.
    pub page: i64,
    pub order: Order,
    pub theme: Option<String>,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            page: 1,
            order: Order::default(),
            theme: None,
        }
    }
}

/// One page of thoughts plus the page count, serialized as `{thoughts, length}`.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub thoughts: Vec<Thought>,
    /// Total pages across the whole board, ignoring any theme filter.
    #[serde(rename = "length")]
    pub total_pages: usize,
}

/// Offset of the first thought on `page`. Pages below 1 are rejected.
pub fn page_offset(page: i64) -> Result<usize, BoardError> {
    if page < 1 {
        return Err(BoardError::InvalidPage(page));
    }
    usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(PAGE_SIZE))
        .ok_or(BoardError::InvalidPage(page))
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

pub fn run(request: &ListRequest, store: &impl ThoughtStore) -> Result<Listing, BoardError> {
    let skip = page_offset(request.page)?;
    let options = FindOptions {
        theme: request.theme.clone(),
        sort: request.order.sort(),
        skip,
        limit: PAGE_SIZE,
    };

    let total = store.count()?;
    let thoughts = store.find(&options)?;
    debug!(
        page = request.page,
        order = request.order.as_ref(),
        returned = thoughts.len(),
        total,
        "listed thoughts"
    );

    Ok(Listing {
        thoughts,
        total_pages: total_pages(total),
    })
}
