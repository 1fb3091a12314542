use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::flight::{Flight, FlightFilter, FlightId, NewFlight};
use crate::repository::FlightRepository;

/// In-memory flight store used in place of the document database
/// (tests, local experiments). Preserves insertion order.
#[derive(Default)]
pub struct InMemoryFlightRepository {
    flights: RwLock<Vec<Flight>>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id() -> FlightId {
        let mut bytes = [0u8; FlightId::LEN];
        bytes.copy_from_slice(&Uuid::new_v4().as_bytes()[..FlightId::LEN]);
        FlightId::from_bytes(bytes)
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn find_flights(
        &self,
        filter: &FlightFilter,
    ) -> Result<Vec<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        let flights = self.flights.read().await;
        Ok(flights.iter().filter(|f| filter.matches(f)).cloned().collect())
    }

    async fn find_flight(
        &self,
        id: FlightId,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        let flights = self.flights.read().await;
        Ok(flights.iter().find(|f| f.id == id).cloned())
    }

    async fn insert_flight(
        &self,
        flight: &NewFlight,
    ) -> Result<FlightId, Box<dyn std::error::Error + Send + Sync>> {
        let id = Self::next_id();
        self.flights.write().await.push(flight.clone().into_flight(id));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = InMemoryFlightRepository::new();
        let all = FlightFilter::default();
        assert!(repo.find_flights(&all).await.unwrap().is_empty());

        let id = repo
            .insert_flight(&NewFlight::new("MAD", "BCN", "2024-03-01T07:30"))
            .await
            .unwrap();

        let found = repo.find_flight(id).await.unwrap().unwrap();
        assert_eq!(found.origin, "MAD");
        assert_eq!(repo.find_flights(&all).await.unwrap().len(), 1);

        let missing = FlightId::from_bytes([0; FlightId::LEN]);
        assert!(repo.find_flight(missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_keeps_insertion_order() {
        let repo = InMemoryFlightRepository::new();
        for dest in ["BCN", "LIS", "BCN"] {
            repo.insert_flight(&NewFlight::new("MAD", dest, "2024-03-01T07:30"))
                .await
                .unwrap();
        }

        let filter = FlightFilter::new(None, Some("BCN".into()));
        let flights = repo.find_flights(&filter).await.unwrap();
        assert_eq!(flights.len(), 2);
        assert!(flights.iter().all(|f| f.destination == "BCN"));
        assert_ne!(flights[0].id, flights[1].id);
    }
}
