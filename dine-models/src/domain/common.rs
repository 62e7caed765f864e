use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(
        required(message = "page is required"),
        range(min = 1, message = "page starts at 1")
    )]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(
        required(message = "page_size is required"),
        range(min = 1, max = 1000, message = "page_size must be between 1 and 1000")
    )]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub pages: u32,
    pub records: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Path parameter carrying a primary key
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct PathId {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i32,
}
