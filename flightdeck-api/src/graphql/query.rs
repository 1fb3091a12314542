use async_graphql::{Context, Object, Result, ID};
use flightdeck_core::FlightService;

use crate::error::to_graphql;
use crate::graphql::types::FlightObject;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Flights matching every supplied filter. Omitted or empty filters match
    /// all flights.
    async fn list_flights(
        &self,
        ctx: &Context<'_>,
        origin: Option<String>,
        destination: Option<String>,
    ) -> Result<Vec<FlightObject>> {
        let service = ctx.data::<FlightService>()?;
        let flights = service
            .list_flights(origin, destination)
            .await
            .map_err(to_graphql)?;

        Ok(flights.into_iter().map(FlightObject::from).collect())
    }

    /// `null` when no flight has this id.
    async fn get_flight(&self, ctx: &Context<'_>, id: ID) -> Result<Option<FlightObject>> {
        let service = ctx.data::<FlightService>()?;
        let flight = service.get_flight(id.as_str()).await.map_err(to_graphql)?;

        Ok(flight.map(FlightObject::from))
    }
}
