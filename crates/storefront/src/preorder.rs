//! Pre-order basket workflow.
//!
//! Per-product state machine: Not-in-basket ⇄ In-basket. Quantities carry
//! sale-unit semantics (0.1 minimum for weight-based products, 1 for
//! piece products) and are re-normalized on every read for rendering or
//! submission.

use farmstand_core::{CollectionKey, ProductId, collection};
use tracing::{debug, error, instrument};

use crate::banners::{BannerCategory, escape_html};
use crate::confirm::ConfirmRequest;
use crate::error::Result;
use crate::extract::product_from_dataset;
use crate::manager::CartManager;
use crate::page::{Dataset, attrs};
use crate::storage::Storage;
use crate::store;

const GENERIC_CONFIRM_FAILURE: &str = "Could not place the pre-order.";

impl<S: Storage> CartManager<S> {
    /// Toggle basket membership for the product carried on a control.
    ///
    /// Adding assigns the sale unit's default quantity (0.5 for
    /// weight-based products, 1 otherwise). Controls without a usable
    /// product id are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting or rendering fails.
    #[instrument(skip(self, dataset))]
    pub fn toggle_preorder(&mut self, dataset: &Dataset) -> Result<()> {
        let Some(mut product) = product_from_dataset(dataset) else {
            return Ok(());
        };

        let items = store::load(&self.storage, CollectionKey::Preorder);
        let name = escape_html(&product.name);

        if collection::contains(&items, product.id) {
            debug!(id = %product.id, "removing from pre-order");
            let items = collection::remove_by_id(items, product.id);
            store::save(&mut self.storage, CollectionKey::Preorder, &items)?;
            self.page.banners.push(
                BannerCategory::Secondary,
                format!("<strong>{name}</strong> removed from the pre-order."),
            );
        } else {
            debug!(id = %product.id, "adding to pre-order");
            product.quantity = Some(product.sale_unit().default_quantity());
            let items = collection::upsert_by_id(items, product);
            store::save(&mut self.storage, CollectionKey::Preorder, &items)?;
            self.page.banners.push(
                BannerCategory::Primary,
                format!("<strong>{name}</strong> added to the pre-order."),
            );
        }

        self.render_preorder()
    }

    /// Apply a quantity input change to the matching basket entry.
    ///
    /// The raw value is coerced to a number; unparseable or sub-minimum
    /// input clamps up to the entry's sale-unit minimum. Inputs that
    /// resolve to no basket entry are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting or rendering fails.
    #[instrument(skip(self, dataset, raw_value))]
    pub fn edit_quantity(&mut self, dataset: &Dataset, raw_value: &str) -> Result<()> {
        let Some(id) = dataset
            .get(attrs::PRODUCT_ID)
            .and_then(|raw| raw.trim().parse().ok())
            .map(ProductId::new)
        else {
            return Ok(());
        };

        let mut items = collection::normalize_quantities(store::load(
            &self.storage,
            CollectionKey::Preorder,
        ));
        let Some(entry) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(());
        };

        let value = raw_value.trim().parse::<f64>().unwrap_or(f64::NAN);
        entry.quantity = Some(entry.sale_unit().normalize(value));
        debug!(id = %id, quantity = entry.quantity, "quantity edited");

        store::save(&mut self.storage, CollectionKey::Preorder, &items)?;
        self.render_preorder()
    }

    /// Submit the pre-order collection to the confirm endpoint.
    ///
    /// An empty basket aborts with a warning banner and no network call.
    /// On acknowledged success the basket is cleared; on any failure it is
    /// left untouched for retry and a danger banner carries the
    /// best-available message. No in-flight guard is taken: a second
    /// submission may race the first.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting or rendering fails; confirm
    /// endpoint failures are reported through banners, not errors.
    #[instrument(skip(self))]
    pub async fn confirm_preorder(&mut self) -> Result<()> {
        let items = collection::normalize_quantities(store::load(
            &self.storage,
            CollectionKey::Preorder,
        ));
        if items.is_empty() {
            self.page.banners.push(
                BannerCategory::Warning,
                "Add products to the pre-order before confirming.",
            );
            return Ok(());
        }

        let request = ConfirmRequest {
            items,
            time: self.page.pickup_time.clone(),
            comment: self.page.comment.clone(),
        };

        match self.confirm.submit(&request).await {
            Ok(()) => {
                store::save(&mut self.storage, CollectionKey::Preorder, &[])?;
                self.render_preorder()?;
                self.page.banners.push(
                    BannerCategory::Success,
                    "Pre-order placed! We will be in touch soon.",
                );
            }
            Err(err) => {
                error!(error = %err, "pre-order confirm failed");
                let message = err.server_message().map_or_else(
                    || GENERIC_CONFIRM_FAILURE.to_string(),
                    |msg| escape_html(msg),
                );
                self.page.banners.push(BannerCategory::Danger, message);
            }
        }
        Ok(())
    }
}
