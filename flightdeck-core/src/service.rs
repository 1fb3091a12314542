use std::sync::Arc;
use tracing::{debug, error};

use crate::flight::{Flight, FlightFilter, FlightId, NewFlight};
use crate::repository::FlightRepository;
use crate::{CoreError, CoreResult};

/// Resolves the three flight operations against a [`FlightRepository`].
///
/// Stateless apart from the shared repository handle; cloning is cheap.
#[derive(Clone)]
pub struct FlightService {
    repo: Arc<dyn FlightRepository>,
}

impl FlightService {
    pub fn new(repo: Arc<dyn FlightRepository>) -> Self {
        Self { repo }
    }

    /// Lists flights, constrained only by the filters that were supplied.
    pub async fn list_flights(
        &self,
        origin: Option<String>,
        destination: Option<String>,
    ) -> CoreResult<Vec<Flight>> {
        let filter = FlightFilter::new(origin, destination);
        let flights = self
            .repo
            .find_flights(&filter)
            .await
            .map_err(|e| store_unavailable("list flights", e))?;

        debug!(?filter, count = flights.len(), "Listed flights");
        Ok(flights)
    }

    /// Looks up one flight. An unknown id is `Ok(None)`; a malformed one is
    /// rejected before the store is queried.
    pub async fn get_flight(&self, id: &str) -> CoreResult<Option<Flight>> {
        let id: FlightId = id.parse()?;
        let flight = self
            .repo
            .find_flight(id)
            .await
            .map_err(|e| store_unavailable("get flight", e))?;

        debug!(%id, found = flight.is_some(), "Fetched flight");
        Ok(flight)
    }

    pub async fn create_flight(&self, flight: NewFlight) -> CoreResult<Flight> {
        let id = self
            .repo
            .insert_flight(&flight)
            .await
            .map_err(|e| store_unavailable("create flight", e))?;

        debug!(%id, origin = %flight.origin, destination = %flight.destination, "Created flight");
        Ok(flight.into_flight(id))
    }
}

fn store_unavailable(operation: &str, err: Box<dyn std::error::Error + Send + Sync>) -> CoreError {
    error!("Failed to {}: {}", operation, err);
    CoreError::StoreUnavailable(err.to_string())
}
