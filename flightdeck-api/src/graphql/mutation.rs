use async_graphql::{Context, Object, Result};
use flightdeck_core::{FlightService, NewFlight};

use crate::error::to_graphql;
use crate::graphql::types::FlightObject;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_flight(
        &self,
        ctx: &Context<'_>,
        origin: String,
        destination: String,
        scheduled_at: String,
    ) -> Result<FlightObject> {
        let service = ctx.data::<FlightService>()?;
        let flight = service
            .create_flight(NewFlight {
                origin,
                destination,
                scheduled_at,
            })
            .await
            .map_err(to_graphql)?;

        Ok(flight.into())
    }
}
