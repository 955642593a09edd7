use std::sync::{Arc, Mutex};
use crate::catalog::domain::{Catalog, LibraryService};
use crate::catalog::domain::service::LibraryServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_catalog(config: &Configuration) -> Arc<Mutex<Catalog>> {
    Arc::new(Mutex::new(Catalog::new(config)))
}

pub fn create_library_service(config: &Configuration, catalog: Arc<Mutex<Catalog>>,
                              via: GatewayPublisherVia) -> Arc<dyn LibraryService> {
    let publisher = create_publisher(via);
    Arc::new(LibraryServiceImpl::new(config, catalog, publisher))
}
