//! Offer endpoints (`/admin/ofertas`)

use async_trait::async_trait;
use reqwest::Method;
use shared::{NewOffer, Offer};

use super::ApiClient;
use crate::error::ClientResult;

const OFERTAS_PATH: &str = "/admin/ofertas";

/// The five offer operations exposed by the backend
///
/// Failures are propagated unchanged; callers decide how to report them.
#[async_trait]
pub trait OfferBackend: Send + Sync {
    /// Fetch one offer by its composite identifier
    async fn get_offer(&self, offer_id: i64) -> ClientResult<Offer>;

    /// Fetch every offer of a product, active or not, in backend order
    async fn offers_by_product(&self, product_id: i64) -> ClientResult<Vec<Offer>>;

    async fn create_offer(&self, offer: &NewOffer) -> ClientResult<()>;

    /// Replace an existing offer; the identifier travels in the body
    async fn update_offer(&self, offer: &Offer) -> ClientResult<()>;

    /// Ask the backend to mark an offer inactive
    async fn soft_delete_offer(&self, offer_id: i64) -> ClientResult<()>;
}

#[async_trait]
impl OfferBackend for ApiClient {
    async fn get_offer(&self, offer_id: i64) -> ClientResult<Offer> {
        self.get_json(&format!("{}/{}", OFERTAS_PATH, offer_id)).await
    }

    async fn offers_by_product(&self, product_id: i64) -> ClientResult<Vec<Offer>> {
        self.get_json(&format!("{}/producto/{}", OFERTAS_PATH, product_id))
            .await
    }

    async fn create_offer(&self, offer: &NewOffer) -> ClientResult<()> {
        self.send_json(Method::POST, OFERTAS_PATH, offer).await
    }

    async fn update_offer(&self, offer: &Offer) -> ClientResult<()> {
        self.send_json(Method::PUT, OFERTAS_PATH, offer).await
    }

    async fn soft_delete_offer(&self, offer_id: i64) -> ClientResult<()> {
        self.delete(&format!("{}/{}", OFERTAS_PATH, offer_id)).await
    }
}
