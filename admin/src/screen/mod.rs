//! Offer management screen
//!
//! Headless controller holding all transient state of the "Ofertas" screen:
//! reference lists, the selected product, its offer rows, the modal form and
//! the loading/busy/error flags. Every action mutates local state, optionally
//! calls the backend, and reloads the affected offer list.
//!
//! Offer list loads are tagged with a request token. A response carrying a
//! token older than the latest issued one is dropped, so a slow load for a
//! previously selected product never replaces the current rows.

mod view;

use shared::{
    active_only, CatalogEntry, Offer, OfferForm, OfferPayload, OfferValidationError, Product,
    Supplier, DELETE_CONFIRMATION, UNSELECTED,
};
use thiserror::Error;

use crate::config::Config;
use crate::error::ClientResult;
use crate::external::{ApiClient, CatalogBackend, OfferBackend};

pub use view::{
    ModalView, OfferRow, TableView, EMPTY_PLACEHOLDER, LOADING_PLACEHOLDER, TABLE_HEADERS,
};

/// Message shown in the screen's error banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScreenError {
    #[error("No se pudieron cargar productos/proveedores.")]
    ReferenceData,

    #[error("No se pudieron cargar las ofertas.")]
    OffersLoad,

    #[error("No se pudo guardar la oferta.")]
    Save,

    #[error("No se pudo eliminar la oferta.")]
    Delete,

    #[error(transparent)]
    Validation(#[from] OfferValidationError),
}

/// Result of a save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
    /// No product selected; nothing was done
    Skipped,
    /// Rejected locally, the backend was not called
    Invalid(OfferValidationError),
    Failed,
}

/// Result of a delete attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    Skipped,
    Failed,
}

/// Interactive yes/no prompt
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Handle for an in-flight offer list load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffersRequest {
    token: u64,
    product_id: i64,
}

impl OffersRequest {
    pub fn product_id(&self) -> i64 {
        self.product_id
    }
}

/// Handle for an in-flight create or update
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    product_id: i64,
    payload: OfferPayload,
}

impl SaveRequest {
    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    /// Validated body to submit
    pub fn payload(&self) -> &OfferPayload {
        &self.payload
    }
}

/// Handle for an in-flight soft delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRequest {
    offer_id: i64,
    product_id: i64,
}

impl DeleteRequest {
    pub fn offer_id(&self) -> i64 {
        self.offer_id
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }
}

/// State of the offer management screen
pub struct OfferScreen<B> {
    backend: B,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
    selected_product: Option<i64>,
    rows: Vec<Offer>,
    loading: bool,
    busy: bool,
    modal_open: bool,
    form: OfferForm,
    error: Option<ScreenError>,
    latest_offers_request: u64,
}

impl OfferScreen<ApiClient> {
    /// Screen backed by the HTTP client described by `config`
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        Ok(Self::new(ApiClient::from_config(&config.api)?))
    }

    /// Screen backed by the HTTP client configured from files and environment
    pub fn from_env() -> ClientResult<Self> {
        let config = Config::load()?;
        tracing::info!(
            environment = %config.environment,
            base_url = %config.api.base_url,
            "offer screen configured"
        );
        Self::from_config(&config)
    }
}

impl<B> OfferScreen<B> {
    /// Unmounted screen; `loading` stays set until `mount` completes
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            products: Vec::new(),
            suppliers: Vec::new(),
            selected_product: None,
            rows: Vec::new(),
            loading: true,
            busy: false,
            modal_open: false,
            form: OfferForm::blank(UNSELECTED),
            error: None,
            latest_offers_request: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Active products, in backend order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active suppliers, in backend order
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn selected_product(&self) -> Option<i64> {
        self.selected_product
    }

    /// Offers of the selected product as last loaded
    pub fn rows(&self) -> &[Offer] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn error(&self) -> Option<ScreenError> {
        self.error
    }

    /// Banner text, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    pub fn form(&self) -> &OfferForm {
        &self.form
    }

    /// Form fields bound to the modal inputs
    pub fn form_mut(&mut self) -> &mut OfferForm {
        &mut self.form
    }

    /// Whether the "Nueva" action is available
    pub fn can_create(&self) -> bool {
        self.selected_product.is_some()
    }

    /// Display name of a supplier, `#<id>` when unknown or inactive
    pub fn supplier_name(&self, supplier_id: i64) -> String {
        lookup_name(&self.suppliers, supplier_id)
    }

    /// Display name of a product, `#<id>` when unknown or inactive
    pub fn product_name(&self, product_id: i64) -> String {
        lookup_name(&self.products, product_id)
    }

    /// Open the modal with a blank form for the selected product
    ///
    /// Returns `false` when no product is selected.
    pub fn open_create(&mut self) -> bool {
        match self.selected_product {
            Some(product_id) => {
                self.form = OfferForm::blank(product_id);
                self.modal_open = true;
                true
            }
            None => false,
        }
    }

    /// Open the modal prefilled with an existing offer
    pub fn open_edit(&mut self, offer: &Offer) {
        self.form = OfferForm::from_offer(offer);
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Start an offer list load for `product_id`
    ///
    /// Supersedes any load still in flight.
    pub fn begin_offers_load(&mut self, product_id: i64) -> OffersRequest {
        self.latest_offers_request += 1;
        self.error = None;
        self.loading = true;
        OffersRequest {
            token: self.latest_offers_request,
            product_id,
        }
    }

    /// Apply the outcome of a load started with `begin_offers_load`
    ///
    /// Returns `false` when the request was superseded and its result dropped.
    /// On failure the previous rows are kept.
    pub fn finish_offers_load(
        &mut self,
        request: OffersRequest,
        result: ClientResult<Vec<Offer>>,
    ) -> bool {
        if request.token != self.latest_offers_request {
            tracing::debug!(
                product_id = request.product_id,
                "discarding stale offer list response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(rows) => {
                tracing::debug!(product_id = request.product_id, count = rows.len(), "offers loaded");
                self.rows = rows;
            }
            Err(e) => {
                tracing::warn!(product_id = request.product_id, error = %e, "failed to load offers");
                self.error = Some(ScreenError::OffersLoad);
            }
        }
        true
    }

    /// Validate the form and mark a write as in flight
    ///
    /// `Err` carries the final outcome when nothing should be submitted: no
    /// product selected, a write already in flight, or a rejected form.
    pub fn begin_save(&mut self) -> Result<SaveRequest, SaveOutcome> {
        self.error = None;

        let product_id = match self.selected_product {
            Some(product_id) if !self.busy => product_id,
            _ => return Err(SaveOutcome::Skipped),
        };

        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(reason) => {
                tracing::debug!(%reason, "offer form rejected");
                self.error = Some(reason.into());
                return Err(SaveOutcome::Invalid(reason));
            }
        };

        self.busy = true;
        Ok(SaveRequest {
            product_id,
            payload,
        })
    }

    /// Apply the backend's answer to a write started with `begin_save`
    ///
    /// Success closes the modal; the caller reloads the offer list.
    pub fn finish_save(
        &mut self,
        request: &SaveRequest,
        result: ClientResult<()>,
    ) -> SaveOutcome {
        self.busy = false;
        let update = request.payload.is_update();
        match result {
            Ok(()) => {
                tracing::info!(product_id = request.product_id, update, "offer saved");
                self.modal_open = false;
                if update {
                    SaveOutcome::Updated
                } else {
                    SaveOutcome::Created
                }
            }
            Err(e) => {
                tracing::warn!(product_id = request.product_id, error = %e, "failed to save offer");
                self.error = Some(ScreenError::Save);
                SaveOutcome::Failed
            }
        }
    }

    /// Ask for confirmation and mark a soft delete as in flight
    pub fn begin_delete<C>(
        &mut self,
        offer_id: i64,
        confirm: &C,
    ) -> Result<DeleteRequest, DeleteOutcome>
    where
        C: Confirm + ?Sized,
    {
        if self.busy {
            return Err(DeleteOutcome::Skipped);
        }
        if !confirm.confirm(DELETE_CONFIRMATION) {
            return Err(DeleteOutcome::Declined);
        }

        let product_id = self.selected_product.ok_or(DeleteOutcome::Skipped)?;

        self.error = None;
        self.busy = true;
        Ok(DeleteRequest {
            offer_id,
            product_id,
        })
    }

    /// Apply the backend's answer to a delete started with `begin_delete`
    pub fn finish_delete(
        &mut self,
        request: DeleteRequest,
        result: ClientResult<()>,
    ) -> DeleteOutcome {
        self.busy = false;
        match result {
            Ok(()) => {
                tracing::info!(offer_id = request.offer_id, "offer soft-deleted");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!(offer_id = request.offer_id, error = %e, "failed to delete offer");
                self.error = Some(ScreenError::Delete);
                DeleteOutcome::Failed
            }
        }
    }
}

impl<B> OfferScreen<B>
where
    B: OfferBackend + CatalogBackend,
{
    /// Load products and suppliers, select the first active product and
    /// load its offers
    pub async fn mount(&mut self) {
        self.error = None;
        self.loading = true;

        let (products, suppliers) =
            tokio::join!(self.backend.list_products(), self.backend.list_suppliers());

        match (products, suppliers) {
            (Ok(products), Ok(suppliers)) => {
                self.products = active_only(products);
                self.suppliers = active_only(suppliers);
                self.selected_product = self.products.first().map(|p| p.id);
                tracing::info!(
                    products = self.products.len(),
                    suppliers = self.suppliers.len(),
                    "reference data loaded"
                );
            }
            (products, suppliers) => {
                let cause = products.err().or(suppliers.err());
                tracing::warn!(error = ?cause, "failed to load products/suppliers");
                self.products.clear();
                self.suppliers.clear();
                self.selected_product = None;
                self.error = Some(ScreenError::ReferenceData);
            }
        }
        self.loading = false;

        if let Some(product_id) = self.selected_product {
            self.load_offers(product_id).await;
        }
    }

    /// Change the selected product, loading its offers when it changed
    ///
    /// `None` or the `UNSELECTED` sentinel clears the selection without a fetch.
    pub async fn select_product(&mut self, product_id: Option<i64>) {
        let product_id = product_id.filter(|id| *id > UNSELECTED);
        if product_id == self.selected_product {
            return;
        }
        self.selected_product = product_id;
        if let Some(product_id) = product_id {
            self.load_offers(product_id).await;
        }
    }

    /// Reload the selected product's offers
    pub async fn reload_offers(&mut self) -> bool {
        match self.selected_product {
            Some(product_id) => self.load_offers(product_id).await,
            None => false,
        }
    }

    async fn load_offers(&mut self, product_id: i64) -> bool {
        let request = self.begin_offers_load(product_id);
        let result = self.backend.offers_by_product(product_id).await;
        self.finish_offers_load(request, result)
    }

    /// Validate the form and create or update the offer
    ///
    /// On success the modal closes and the offer list is reloaded. Validation
    /// failures and backend failures leave the modal open.
    pub async fn save(&mut self) -> SaveOutcome {
        let request = match self.begin_save() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = match request.payload() {
            OfferPayload::Create(offer) => self.backend.create_offer(offer).await,
            OfferPayload::Update(offer) => self.backend.update_offer(offer).await,
        };

        let outcome = self.finish_save(&request, result);
        if matches!(outcome, SaveOutcome::Created | SaveOutcome::Updated) {
            self.load_offers(request.product_id()).await;
        }
        outcome
    }

    /// Soft-delete an offer after interactive confirmation
    pub async fn delete<C>(&mut self, offer_id: i64, confirm: &C) -> DeleteOutcome
    where
        C: Confirm + ?Sized,
    {
        let request = match self.begin_delete(offer_id, confirm) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = self.backend.soft_delete_offer(request.offer_id()).await;

        let outcome = self.finish_delete(request, result);
        if outcome == DeleteOutcome::Deleted {
            self.load_offers(request.product_id()).await;
        }
        outcome
    }
}

fn lookup_name<T: CatalogEntry>(entries: &[T], id: i64) -> String {
    entries
        .iter()
        .find(|entry| entry.id() == id)
        .map(CatalogEntry::display_name)
        .unwrap_or_else(|| shared::display_name(id, None))
}
