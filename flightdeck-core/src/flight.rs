use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Store-assigned flight identifier.
///
/// Wraps the 12 raw bytes of the document store's native id and is exposed
/// externally as 24 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightId([u8; 12]);

impl FlightId {
    pub const LEN: usize = 12;

    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; Self::LEN] {
        self.0
    }
}

impl FromStr for FlightId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; Self::LEN];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|_| CoreError::InvalidIdentifier(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub id: FlightId,
    pub origin: String,
    pub destination: String,
    /// Opaque timestamp string, stored and returned as given.
    pub scheduled_at: String,
}

/// A flight that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlight {
    pub origin: String,
    pub destination: String,
    pub scheduled_at: String,
}

impl NewFlight {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        scheduled_at: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            scheduled_at: scheduled_at.into(),
        }
    }

    pub fn into_flight(self, id: FlightId) -> Flight {
        Flight {
            id,
            origin: self.origin,
            destination: self.destination,
            scheduled_at: self.scheduled_at,
        }
    }
}

/// Exact-match predicate over origin and destination.
///
/// An absent field places no constraint. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightFilter {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl FlightFilter {
    pub fn new(origin: Option<String>, destination: Option<String>) -> Self {
        Self {
            origin: origin.filter(|s| !s.is_empty()),
            destination: destination.filter(|s| !s.is_empty()),
        }
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        let origin_ok = self.origin.as_deref().map_or(true, |o| o == flight.origin);
        let destination_ok = self
            .destination
            .as_deref()
            .map_or(true, |d| d == flight.destination);
        origin_ok && destination_ok
    }
}
