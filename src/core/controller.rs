use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::LibraryService;
use crate::catalog::factory::{create_catalog, create_library_service};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub service: Arc<dyn LibraryService>,
}

impl AppState {
    pub fn new(branch: &str, via: GatewayPublisherVia) -> AppState {
        let config = Configuration::new(branch);
        let catalog = create_catalog(&config);
        let service = create_library_service(&config, catalog, via);
        AppState {
            config,
            service,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { retryable: false, .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Other { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}
