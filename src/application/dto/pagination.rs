// src/application/dto/pagination.rs
use crate::domain::listing::PageRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            current_page: request.page(),
            last_page: request.last_page(total),
            per_page: request.per_page(),
            total,
        }
    }

    pub fn from_records<R>(records: Vec<R>, request: PageRequest, total: u64) -> Self
    where
        R: Into<T>,
    {
        Self::new(records.into_iter().map(Into::into).collect(), request, total)
    }
}
