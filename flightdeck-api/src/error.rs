use async_graphql::{Error, ErrorExtensions};
use flightdeck_core::CoreError;

/// GraphQL-facing wrapper around [`CoreError`].
///
/// Every failure carries an `extensions.code`; store failures hide their
/// detail behind a generic message (the detail is logged by the service).
#[derive(Debug)]
pub struct AppError(pub CoreError);

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> Error {
        match &self.0 {
            CoreError::InvalidIdentifier(id) => {
                Error::new(format!("Invalid flight id '{}'", id))
                    .extend_with(|_, e| e.set("code", "INVALID_IDENTIFIER"))
            }
            CoreError::StoreUnavailable(_) => Error::new("Internal server error")
                .extend_with(|_, e| e.set("code", "STORE_UNAVAILABLE")),
        }
    }
}

pub fn to_graphql(err: CoreError) -> Error {
    AppError::from(err).extend()
}
