//! Render models for the offer screen

use std::collections::HashMap;
use std::fmt;

use shared::{format_price, yes_no, CatalogEntry, SelectOption};

use super::OfferScreen;

pub const LOADING_PLACEHOLDER: &str = "Cargando...";
pub const EMPTY_PLACEHOLDER: &str = "No hay ofertas para este producto";

pub const TABLE_HEADERS: [&str; 7] = [
    "Id Oferta",
    "Proveedor",
    "Lote",
    "Precio",
    "Stock disponible",
    "Activo",
    "Acciones",
];

/// One rendered offer row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRow {
    pub id: i64,
    pub supplier: String,
    /// Lot number or "-"
    pub lot: String,
    /// Two decimals
    pub price: String,
    pub available_stock: String,
    pub active: &'static str,
    /// Edit/delete buttons, disabled while a write is in flight
    pub actions_enabled: bool,
}

/// Body of the offer table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Empty,
    Rows(Vec<OfferRow>),
}

impl TableView {
    /// Text of the single placeholder row, if the table shows one
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            TableView::Loading => Some(LOADING_PLACEHOLDER),
            TableView::Empty => Some(EMPTY_PLACEHOLDER),
            TableView::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[OfferRow] {
        match self {
            TableView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TABLE_HEADERS.join(" | "))?;
        if let Some(placeholder) = self.placeholder() {
            return writeln!(f, "{}", placeholder);
        }
        for row in self.rows() {
            let actions = if row.actions_enabled {
                "Editar, Eliminar"
            } else {
                "-"
            };
            writeln!(
                f,
                "{} | {} | {} | {} | {} | {} | {}",
                row.id, row.supplier, row.lot, row.price, row.available_stock, row.active, actions
            )?;
        }
        Ok(())
    }
}

/// Create/edit dialog contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: &'static str,
    /// Read-only product field
    pub product: String,
    pub supplier_options: Vec<SelectOption>,
    pub save_label: &'static str,
    pub save_enabled: bool,
    pub cancel_enabled: bool,
}

impl<B> OfferScreen<B> {
    /// Current table body
    pub fn table(&self) -> TableView {
        if self.loading {
            return TableView::Loading;
        }
        if self.rows.is_empty() {
            return TableView::Empty;
        }

        let supplier_names: HashMap<i64, String> = self
            .suppliers
            .iter()
            .map(|s| (s.id, s.display_name()))
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|offer| OfferRow {
                id: offer.id,
                supplier: supplier_names
                    .get(&offer.supplier_id)
                    .cloned()
                    .unwrap_or_else(|| shared::display_name(offer.supplier_id, None)),
                lot: offer.lot_number.clone().unwrap_or_else(|| "-".to_string()),
                price: format_price(offer.unit_price),
                available_stock: offer.available_stock.to_string(),
                active: yes_no(offer.active),
                actions_enabled: !self.busy,
            })
            .collect();

        TableView::Rows(rows)
    }

    /// Product selector entries, headed by "Seleccione..."
    pub fn product_options(&self) -> Vec<SelectOption> {
        options(&self.products)
    }

    /// Supplier selector entries, headed by "Seleccione..."
    pub fn supplier_options(&self) -> Vec<SelectOption> {
        options(&self.suppliers)
    }

    /// Dialog contents while the modal is open
    pub fn modal(&self) -> Option<ModalView> {
        if !self.modal_open {
            return None;
        }

        let product = if self.form.product_id > shared::UNSELECTED {
            self.product_name(self.form.product_id)
        } else {
            String::new()
        };

        Some(ModalView {
            title: if self.form.is_new() {
                "Nueva oferta"
            } else {
                "Editar oferta"
            },
            product,
            supplier_options: self.supplier_options(),
            save_label: if self.busy { "Guardando..." } else { "Guardar" },
            save_enabled: !self.busy && self.selected_product.is_some(),
            cancel_enabled: !self.busy,
        })
    }
}

fn options<T: CatalogEntry>(entries: &[T]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::unselected())
        .chain(
            entries
                .iter()
                .map(|entry| SelectOption::new(entry.id(), entry.display_name())),
        )
        .collect()
}
