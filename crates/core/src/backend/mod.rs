//! Backend module - records served by the remote data service and the client contract.

mod backend_model;
mod backend_traits;

pub use backend_model::{
    Card, CategorySpending, PendingSpending, SurveyAnswer, SurveyResponse, Transaction,
    TransactionFilter, UserId, UserProfile,
};
pub use backend_traits::BackendClientTrait;
