pub mod flight;
pub mod memory;
pub mod repository;
pub mod service;

pub use flight::{Flight, FlightFilter, FlightId, NewFlight};
pub use memory::InMemoryFlightRepository;
pub use repository::FlightRepository;
pub use service::FlightService;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid flight identifier: '{0}'")]
    InvalidIdentifier(String),
    #[error("Flight store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
