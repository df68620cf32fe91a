//! Picks, from a list of campaigns, the eligible one furthest behind its delivery schedule.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod selection;

pub use error::{LoadError, SelectionError, SelectionResult};
pub use model::campaign::{Campaign, Configuration};
pub use model::request::AdRequest;
pub use selection::eligibility::{matches_category, matches_country, Eligibility, MatchMode};
pub use selection::selector::{select, Selector};
