//! Goals module - spending-goal resolution and updates.

mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_model::GoalSource;
pub use goals_service::GoalService;
pub use goals_traits::GoalServiceTrait;
