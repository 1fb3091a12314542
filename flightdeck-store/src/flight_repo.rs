use async_trait::async_trait;
use flightdeck_core::repository::FlightRepository;
use flightdeck_core::{Flight, FlightFilter, FlightId, NewFlight};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Stored shape of a flight: `{ _id, origin, destination, scheduledAt }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub origin: String,
    pub destination: String,
    pub scheduled_at: String,
}

impl From<&NewFlight> for FlightDocument {
    fn from(flight: &NewFlight) -> Self {
        Self {
            id: None,
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            scheduled_at: flight.scheduled_at.clone(),
        }
    }
}

impl TryFrom<FlightDocument> for Flight {
    type Error = Box<dyn Error + Send + Sync>;

    fn try_from(doc: FlightDocument) -> Result<Self, Self::Error> {
        let id = doc.id.ok_or("flight document without _id")?;
        Ok(Flight {
            id: to_flight_id(id),
            origin: doc.origin,
            destination: doc.destination,
            scheduled_at: doc.scheduled_at,
        })
    }
}

pub fn to_object_id(id: FlightId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

pub fn to_flight_id(id: ObjectId) -> FlightId {
    FlightId::from_bytes(id.bytes())
}

/// Query document holding only the supplied filter fields.
pub fn filter_document(filter: &FlightFilter) -> Document {
    let mut query = Document::new();
    if let Some(origin) = &filter.origin {
        query.insert("origin", origin.as_str());
    }
    if let Some(destination) = &filter.destination {
        query.insert("destination", destination.as_str());
    }
    query
}

pub struct MongoFlightRepository {
    pub collection: Collection<FlightDocument>,
}

impl MongoFlightRepository {
    pub fn new(collection: Collection<FlightDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl FlightRepository for MongoFlightRepository {
    async fn find_flights(
        &self,
        filter: &FlightFilter,
    ) -> Result<Vec<Flight>, Box<dyn Error + Send + Sync>> {
        let cursor = self.collection.find(filter_document(filter)).await?;
        let docs: Vec<FlightDocument> = cursor.try_collect().await?;

        docs.into_iter().map(Flight::try_from).collect()
    }

    async fn find_flight(
        &self,
        id: FlightId,
    ) -> Result<Option<Flight>, Box<dyn Error + Send + Sync>> {
        let doc = self
            .collection
            .find_one(doc! { "_id": to_object_id(id) })
            .await?;

        doc.map(Flight::try_from).transpose()
    }

    async fn insert_flight(
        &self,
        flight: &NewFlight,
    ) -> Result<FlightId, Box<dyn Error + Send + Sync>> {
        let result = self
            .collection
            .insert_one(FlightDocument::from(flight))
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or("store returned a non-ObjectId _id")?;

        Ok(to_flight_id(id))
    }
}
