use crate::graphql::FlightSchema;

#[derive(Clone)]
pub struct AppState {
    pub schema: FlightSchema,
}
