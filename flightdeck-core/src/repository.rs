use async_trait::async_trait;
use crate::flight::{Flight, FlightFilter, FlightId, NewFlight};

/// Repository trait for flight document access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// All flights matching `filter`, in the store's natural order.
    async fn find_flights(
        &self,
        filter: &FlightFilter,
    ) -> Result<Vec<Flight>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_flight(
        &self,
        id: FlightId,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>>;

    /// Persists `flight` and returns the identifier the store assigned.
    async fn insert_flight(
        &self,
        flight: &NewFlight,
    ) -> Result<FlightId, Box<dyn std::error::Error + Send + Sync>>;
}
