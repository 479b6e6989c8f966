use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Local;

use crate::modules::bookings::core::packages::PartyPackage;
use crate::shared::core::primitives::{SessionLength, TimeOfDay, parse_date};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPackage {
    pub id: String,
    pub name: String,
    pub price_per_person_pence: u64,
    pub duration_hours: f64,
    pub max_guests: u32,
    pub description: String,
    pub includes: Vec<String>,
}

impl From<&PartyPackage> for GqlPackage {
    fn from(p: &PartyPackage) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price_per_person_pence: p.price_per_person_pence,
            duration_hours: p.duration.hours(),
            max_guests: p.max_guests,
            description: p.description.clone(),
            includes: p.includes.clone(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Free start times (`HH:MM`) on `date` for a session of `duration_hours`.
    async fn available_slots(
        &self,
        context: &Context<'_>,
        date: String,
        duration_hours: f64,
    ) -> GqlResult<Vec<String>> {
        let state = context.data_unchecked::<AppState>();
        let slots = state
            .availability
            .available_slots(
                parse_date(&date)?,
                SessionLength::from_hours(duration_hours)?,
                Local::now().naive_local(),
            )
            .await?;
        Ok(slots.iter().map(ToString::to_string).collect())
    }

    async fn is_available(
        &self,
        context: &Context<'_>,
        date: String,
        start_time: String,
        duration_hours: f64,
        exclude_id: Option<String>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .availability
            .is_available(
                parse_date(&date)?,
                TimeOfDay::parse(&start_time)?,
                SessionLength::from_hours(duration_hours)?,
                exclude_id.as_deref(),
            )
            .await?)
    }

    async fn packages(&self, context: &Context<'_>) -> Vec<GqlPackage> {
        let state = context.data_unchecked::<AppState>();
        state.policy.catalog.all().iter().map(GqlPackage::from).collect()
    }
}
