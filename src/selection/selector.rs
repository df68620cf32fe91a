// src/selection/selector.rs

use tracing::{debug, info, info_span, warn};

use crate::error::{SelectionError, SelectionResult};
use crate::logging::selection_log::SelectionLog;
use crate::model::campaign::Campaign;
use crate::model::request::AdRequest;
use crate::selection::eligibility::{Eligibility, MatchMode};

/// **Campaign 选择器**
///
/// Picks the eligible campaign furthest behind its delivery schedule, i.e. the one with the
/// lowest `relative_delivery`. For example:
///   (a) 20/100 impressions after 50/100 days, relative -0.30
///   (b) 10/100 impressions after 10/100 days, relative  0.00
///   (c) 50/100 impressions after 20/100 days, relative +0.30
/// selects (a).
///
/// Holds no state beyond its configuration, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selector {
    match_mode: MatchMode,
}

/// Result of one pass over the candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scan<'a> {
    winner: Option<(&'a Campaign, f64)>,
    candidates: usize,
    eligible: usize,
    degenerate: usize,
}

impl Selector {
    pub fn new(match_mode: MatchMode) -> Self {
        Self { match_mode }
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn select<'a>(
        &self,
        campaigns: &'a [Campaign],
        request: &AdRequest,
    ) -> SelectionResult<&'a Campaign> {
        self.scan(campaigns, request)
            .winner
            .map(|(campaign, _)| campaign)
            .ok_or(SelectionError::NoEligibleCampaign)
    }

    /// Same as [`Selector::select`], also filling in `log` with the scan statistics.
    /// Events emitted during the scan carry `log.request_id` through the enclosing span.
    pub fn select_with_log<'a>(
        &self,
        campaigns: &'a [Campaign],
        request: &AdRequest,
        mut log: SelectionLog,
    ) -> (SelectionResult<&'a Campaign>, SelectionLog) {
        let scan = {
            let _span = info_span!("campaign_selection", request_id = %log.request_id).entered();
            self.scan(campaigns, request)
        };
        log.candidates = scan.candidates;
        log.eligible = scan.eligible;
        log.degenerate = scan.degenerate;

        match scan.winner {
            Some((campaign, relative_delivery)) => {
                log.set_winner(campaign.id, relative_delivery);
                (Ok(campaign), log)
            }
            None => (Err(SelectionError::NoEligibleCampaign), log),
        }
    }

    fn scan<'a>(&self, campaigns: &'a [Campaign], request: &AdRequest) -> Scan<'a> {
        let mut scan = Scan {
            winner: None,
            candidates: campaigns.len(),
            eligible: 0,
            degenerate: 0,
        };

        // Strict `<` keeps the left-most campaign on ties.
        for campaign in campaigns {
            let eligibility = Eligibility::evaluate(campaign, request);
            if !eligibility.is_eligible(self.match_mode) {
                debug!(
                    campaign_id = campaign.id,
                    matches_category = eligibility.category,
                    matches_country = eligibility.country,
                    "campaign rejected by targeting"
                );
                continue;
            }
            scan.eligible += 1;

            let Some(relative_delivery) = campaign.relative_delivery() else {
                scan.degenerate += 1;
                warn!(
                    campaign_id = campaign.id,
                    days_total = campaign.days_total,
                    impressions_total = campaign.impressions_total,
                    "campaign skipped: zero total makes pacing undefined"
                );
                continue;
            };

            if scan.winner.map_or(true, |(_, best)| relative_delivery < best) {
                scan.winner = Some((campaign, relative_delivery));
            }
        }

        match scan.winner {
            Some((campaign, relative_delivery)) => info!(
                campaign_id = campaign.id,
                relative_delivery,
                candidates = scan.candidates,
                eligible = scan.eligible,
                "campaign selected"
            ),
            None => warn!(
                candidates = scan.candidates,
                eligible = scan.eligible,
                degenerate = scan.degenerate,
                "no eligible campaign"
            ),
        }
        scan
    }
}

/// Selects with the default (`Any`) match mode.
pub fn select<'a>(campaigns: &'a [Campaign], request: &AdRequest) -> SelectionResult<&'a Campaign> {
    Selector::default().select(campaigns, request)
}
