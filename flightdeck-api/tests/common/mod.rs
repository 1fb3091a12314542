#![allow(dead_code)]

use async_trait::async_trait;
use flightdeck_api::{build_schema, FlightSchema};
use flightdeck_core::repository::FlightRepository;
use flightdeck_core::{
    Flight, FlightFilter, FlightId, FlightService, InMemoryFlightRepository, NewFlight,
};
use std::sync::Arc;

pub fn in_memory_schema() -> FlightSchema {
    build_schema(FlightService::new(Arc::new(InMemoryFlightRepository::new())))
}

pub fn offline_schema() -> FlightSchema {
    build_schema(FlightService::new(Arc::new(OfflineRepository)))
}

/// Store whose every call fails as if the server were unreachable.
pub struct OfflineRepository;

#[async_trait]
impl FlightRepository for OfflineRepository {
    async fn find_flights(
        &self,
        _filter: &FlightFilter,
    ) -> Result<Vec<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        Err("server selection timeout".into())
    }

    async fn find_flight(
        &self,
        _id: FlightId,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        Err("server selection timeout".into())
    }

    async fn insert_flight(
        &self,
        _flight: &NewFlight,
    ) -> Result<FlightId, Box<dyn std::error::Error + Send + Sync>> {
        Err("server selection timeout".into())
    }
}
