//! Overview module - data behind the dashboard, goals and finances pages.

mod overview_model;
mod overview_service;
mod overview_traits;

pub use overview_model::{CategoryTotal, FinancesOverview, GoalsOverview, HomeOverview};
pub use overview_service::OverviewService;
pub use overview_traits::OverviewServiceTrait;
