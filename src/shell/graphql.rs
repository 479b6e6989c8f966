use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::bookings::use_cases::check_availability::inbound::graphql::QueryRoot;
pub use crate::modules::bookings::use_cases::submit_booking::inbound::graphql::MutationRoot;
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
