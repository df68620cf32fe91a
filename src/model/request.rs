// src/model/request.rs

use serde::{Deserialize, Serialize};

/// 广告请求描述
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AdRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl AdRequest {
    pub fn new(category: Option<&str>, country: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            country: country.map(str::to_string),
        }
    }

    pub fn for_country(country: &str) -> Self {
        Self::new(None, Some(country))
    }
}
