use async_graphql::{SimpleObject, ID};
use flightdeck_core::Flight;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Flight")]
pub struct FlightObject {
    pub id: ID,
    pub origin: String,
    pub destination: String,
    pub scheduled_at: String,
}

impl From<Flight> for FlightObject {
    fn from(flight: Flight) -> Self {
        Self {
            id: ID(flight.id.to_string()),
            origin: flight.origin,
            destination: flight.destination,
            scheduled_at: flight.scheduled_at,
        }
    }
}
