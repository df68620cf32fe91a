// src/logging/selection_log.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::request::AdRequest;

/// **单次选择日志**
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectionLog {
    pub timestamp: String,             // RFC 3339
    pub log_type: String,              // 固定为 "campaign_selection"
    pub request_id: String,            // 调用方提供或自动生成的 uuid
    pub request: AdRequest,
    pub candidates: usize,             // 候选 campaign 数量
    pub eligible: usize,               // 通过定向检查的数量
    pub degenerate: usize,             // 定向通过但总量为 0 的数量
    pub status: String,                // "success" or "no_eligible_campaign"
    pub winning_campaign: Option<u64>,
    pub winning_relative_delivery: Option<f64>,
}

impl SelectionLog {
    pub fn new(request_id: &str, request: &AdRequest) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            log_type: "campaign_selection".to_string(),
            request_id: request_id.to_string(),
            request: request.clone(),
            candidates: 0,
            eligible: 0,
            degenerate: 0,
            status: "no_eligible_campaign".to_string(), // 默认失败，选中后更新
            winning_campaign: None,
            winning_relative_delivery: None,
        }
    }

    /// Generates a fresh request id.
    pub fn with_generated_id(request: &AdRequest) -> Self {
        Self::new(&uuid::Uuid::new_v4().to_string(), request)
    }

    pub fn set_winner(&mut self, campaign_id: u64, relative_delivery: f64) {
        self.status = "success".to_string();
        self.winning_campaign = Some(campaign_id);
        self.winning_relative_delivery = Some(relative_delivery);
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
