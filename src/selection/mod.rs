pub mod eligibility;
pub mod selector;
