use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};
use chrono::{Local, Utc};
use uuid::Uuid;

use crate::modules::bookings::core::booking::{ContactDetails, PaymentMethod};
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use crate::shared::core::primitives::{SessionLength, TimeOfDay, parse_date};
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct SubmitBookingInput {
    pub date: String,
    pub start_time: String,
    pub duration_hours: f64,
    pub adults: u32,
    pub children: u32,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub special_requests: Option<String>,
    pub package_id: Option<String>,
    pub pay_with_usdc: Option<bool>,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_booking(
        &self,
        context: &Context<'_>,
        input: SubmitBookingInput,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let command = SubmitBooking {
            booking_id: Uuid::now_v7().to_string(),
            date: parse_date(&input.date)?,
            start_time: TimeOfDay::parse(&input.start_time)?,
            duration: SessionLength::from_hours(input.duration_hours)?,
            adults: input.adults,
            children: input.children,
            contact: ContactDetails {
                name: input.contact_name,
                email: input.contact_email,
                phone: input.contact_phone,
            },
            special_requests: input.special_requests,
            package_id: input.package_id,
            payment_method: if input.pay_with_usdc.unwrap_or(false) {
                PaymentMethod::Usdc
            } else {
                PaymentMethod::Stripe
            },
            requested_at: Local::now().naive_local(),
            submitted_at: Utc::now(),
        };

        let booking = state
            .submit_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(booking.id))
    }
}
