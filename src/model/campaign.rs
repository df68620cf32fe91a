// src/model/campaign.rs

use serde::{Deserialize, Serialize};

/// **投放活动（Campaign）**
///
/// A line item with a delivery goal (`impressions_total`) spread over a time
/// window (`days_total`). Counters are whole numbers; fractional values such as
/// `"daysElapsed": 2.5` are rejected when decoding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: u64,
    pub days_elapsed: u64,
    pub days_total: u64,
    pub impressions_delivered: u64,
    pub impressions_total: u64,
    #[serde(default)]
    pub configuration: Option<Configuration>,
}

/// Targeting rules attached to a campaign.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    /// Valid for requests with one of these categories. `None` or empty matches any category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Valid for requests from one of these countries. `None` or empty matches any country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
}

impl Campaign {
    pub fn new(
        id: u64,
        days_elapsed: u64,
        days_total: u64,
        impressions_delivered: u64,
        impressions_total: u64,
    ) -> Self {
        Self {
            id,
            days_elapsed,
            days_total,
            impressions_delivered,
            impressions_total,
            configuration: None,
        }
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// **交付进度减去时间进度**
    ///
    /// Negative means the campaign is behind schedule. Returns `None` when either
    /// total is zero, since the ratio is undefined.
    pub fn relative_delivery(&self) -> Option<f64> {
        if self.impressions_total == 0 || self.days_total == 0 {
            return None;
        }
        let delivery = self.impressions_delivered as f64 / self.impressions_total as f64;
        let elapsed_time = self.days_elapsed as f64 / self.days_total as f64;
        Some(delivery - elapsed_time)
    }

    pub fn categories(&self) -> &[String] {
        self.configuration
            .as_ref()
            .and_then(|c| c.categories.as_deref())
            .unwrap_or(&[])
    }

    pub fn countries(&self) -> &[String] {
        self.configuration
            .as_ref()
            .and_then(|c| c.countries.as_deref())
            .unwrap_or(&[])
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = Some(countries.into_iter().map(Into::into).collect());
        self
    }
}
