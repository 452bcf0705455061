//! Offer administration client
//!
//! Typed access to the `/admin/ofertas` endpoints of the inventory backend
//! and the headless state controller behind the "Ofertas" admin screen.

pub mod config;
pub mod error;
pub mod external;
pub mod screen;
pub mod telemetry;

pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use external::{ApiClient, CatalogBackend, OfferBackend};
pub use screen::{
    Confirm, DeleteOutcome, DeleteRequest, OfferScreen, OffersRequest, SaveOutcome, SaveRequest,
    ScreenError,
};
