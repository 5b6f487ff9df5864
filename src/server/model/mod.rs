//! Domain models and operation-specific parameter types.
//!
//! Repositories convert entities into these types at the data boundary; controllers convert
//! DTOs into parameter types before calling services and domain models back into DTOs.

pub mod account;
pub mod hackathon;
pub mod mentor_judge;
pub mod organizer;
pub mod participant;
pub mod team;
pub mod timeline;

/// One page of results plus the totals needed to render pagination controls.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
