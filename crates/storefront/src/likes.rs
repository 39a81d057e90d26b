//! Favorites (likes) workflow.
//!
//! Per-product state machine: Unliked ⇄ Liked, where "Liked" is membership
//! in the likes collection. The unlike path hands the removed entry to an
//! Undo banner action so the exact payload can be re-inserted.

use farmstand_core::{CollectionKey, ProductEntry, ProductId, collection};
use tracing::{debug, instrument};

use crate::banners::{ActionCommand, BannerAction, BannerCategory, escape_html};
use crate::error::Result;
use crate::extract::product_from_dataset;
use crate::manager::CartManager;
use crate::page::Dataset;
use crate::storage::Storage;
use crate::store;

impl<S: Storage> CartManager<S> {
    /// Whether a product is currently liked.
    #[must_use]
    pub fn is_liked(&self, id: ProductId) -> bool {
        collection::contains(&store::load(&self.storage, CollectionKey::Likes), id)
    }

    /// Toggle the like state of the product carried on a control.
    ///
    /// Controls without a usable product id are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting or rendering fails.
    #[instrument(skip(self, dataset))]
    pub fn toggle_like(&mut self, dataset: &Dataset) -> Result<()> {
        let Some(product) = product_from_dataset(dataset) else {
            return Ok(());
        };

        let likes = store::load(&self.storage, CollectionKey::Likes);
        if collection::contains(&likes, product.id) {
            self.unlike(likes, &product)
        } else {
            self.like(likes, product)
        }
    }

    fn like(&mut self, likes: Vec<ProductEntry>, product: ProductEntry) -> Result<()> {
        debug!(id = %product.id, "liking product");
        let name = escape_html(&product.name);
        let likes = collection::upsert_by_id(likes, product);
        store::save(&mut self.storage, CollectionKey::Likes, &likes)?;

        self.sync_like_controls();
        self.page.banners.push(
            BannerCategory::Success,
            format!("<strong>{name}</strong> added to favorites."),
        );
        self.render_favorites()
    }

    fn unlike(&mut self, likes: Vec<ProductEntry>, product: &ProductEntry) -> Result<()> {
        debug!(id = %product.id, "unliking product");
        // Capture the stored entry before removal; the page attributes may
        // have drifted and Undo must restore the exact payload.
        let captured = collection::find_by_id(&likes, product.id)
            .cloned()
            .unwrap_or_else(|| product.clone());

        let likes = collection::remove_by_id(likes, product.id);
        store::save(&mut self.storage, CollectionKey::Likes, &likes)?;

        self.sync_like_controls();
        self.render_favorites()?;

        let name = escape_html(&captured.name);
        self.page.banners.push_with_actions(
            BannerCategory::Warning,
            format!("Like removed for <strong>{name}</strong>."),
            vec![BannerAction {
                label: "Undo".to_string(),
                css_class: "btn btn-sm btn-dark".to_string(),
                command: ActionCommand::RestoreLike(captured),
            }],
        );
        Ok(())
    }

    /// Re-insert an unliked entry (the Undo command).
    pub(crate) fn restore_like(&mut self, entry: ProductEntry) -> Result<()> {
        debug!(id = %entry.id, "restoring like");
        let likes = store::load(&self.storage, CollectionKey::Likes);
        let likes = collection::upsert_by_id(likes, entry);
        store::save(&mut self.storage, CollectionKey::Likes, &likes)?;

        self.sync_like_controls();
        self.render_favorites()
    }
}
