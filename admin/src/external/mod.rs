//! Backend API integrations

pub mod api_client;
pub mod catalog;
pub mod ofertas;

pub use api_client::ApiClient;
pub use catalog::CatalogBackend;
pub use ofertas::OfferBackend;
