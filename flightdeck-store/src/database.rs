use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::info;

use crate::flight_repo::{FlightDocument, MongoFlightRepository};

#[derive(Clone)]
pub struct DbClient {
    database: Database,
}

impl DbClient {
    /// Builds the shared driver handle. The driver connects lazily; call
    /// [`DbClient::ping`] to verify the server is reachable.
    pub async fn new(
        connection_string: &str,
        database: &str,
    ) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(connection_string).await?;
        options.app_name = Some("flightdeck".into());
        options.server_selection_timeout = Some(Duration::from_secs(3));

        let database = Client::with_options(options)?.database(database);

        Ok(Self { database })
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database '{}'", self.database.name());
        Ok(())
    }

    pub fn flight_repository(&self, collection: &str) -> MongoFlightRepository {
        MongoFlightRepository::new(self.database.collection::<FlightDocument>(collection))
    }
}
