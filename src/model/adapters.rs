// src/model/adapters.rs

use serde::de::DeserializeOwned;
use std::fs;

use crate::error::LoadError;
use crate::model::campaign::Campaign;
use crate::model::request::AdRequest;

/// Source of candidate campaigns. The selector does not care where they come from.
pub trait CampaignAdapter: Send + Sync {
    fn get_campaigns(&self) -> Result<Vec<Campaign>, LoadError>;
}

/// 从 JSON 文件读取投放活动列表
pub struct FileCampaignAdapter {
    pub campaign_file: String,
}

impl FileCampaignAdapter {
    pub fn new(campaign_file: &str) -> Self {
        Self {
            campaign_file: campaign_file.to_string(),
        }
    }
}

impl CampaignAdapter for FileCampaignAdapter {
    fn get_campaigns(&self) -> Result<Vec<Campaign>, LoadError> {
        read_json_file(&self.campaign_file)
    }
}

/// Reads a JSON array of requests for batch evaluation.
pub fn load_requests(path: &str) -> Result<Vec<AdRequest>, LoadError> {
    read_json_file(path)
}

fn read_json_file<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    let mut content = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    simd_json::serde::from_slice(&mut content).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}
