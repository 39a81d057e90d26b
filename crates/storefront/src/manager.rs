//! The cart engine: storage, page model, and event handling in one place.

use askama::Template as _;
use farmstand_core::{CollectionKey, ProductEntry, collection};
use tracing::instrument;

use crate::banners::{ActionCommand, BannerId};
use crate::config::StorefrontConfig;
use crate::confirm::ConfirmClient;
use crate::error::Result;
use crate::events::{ControlRole, UiEvent};
use crate::page::{LikeAppearance, PageModel};
use crate::storage::{FileStorage, Storage};
use crate::store;
use crate::views::{FavoritesTemplate, PreorderTemplate};

/// Client cart state manager.
///
/// Owns the injected storage, the headless page model, and the confirm
/// endpoint client. All mutations flow through [`CartManager::dispatch`]
/// or the explicit confirm/banner-action entry points.
pub struct CartManager<S: Storage> {
    pub(crate) storage: S,
    pub(crate) page: PageModel,
    pub(crate) confirm: ConfirmClient,
}

impl CartManager<FileStorage> {
    /// Build a manager over file-backed storage from configuration.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig, page: PageModel) -> Self {
        Self::new(
            FileStorage::new(config.storage_dir.clone()),
            page,
            ConfirmClient::new(config.confirm_url.clone()),
        )
    }
}

impl<S: Storage> CartManager<S> {
    /// Create a manager over the given storage and page.
    #[must_use]
    pub fn new(storage: S, page: PageModel, confirm: ConfirmClient) -> Self {
        Self {
            storage,
            page,
            confirm,
        }
    }

    /// The content-loaded pass: render both views and sync like controls.
    ///
    /// # Errors
    ///
    /// Returns an error when rendering fails.
    #[instrument(skip(self))]
    pub fn init(&mut self) -> Result<()> {
        self.render_favorites()?;
        self.render_preorder()?;
        self.sync_like_controls();
        Ok(())
    }

    /// Route a delegated UI event by control role.
    ///
    /// Events from controls without a recognized role marker fall through
    /// as no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error when a handler fails to persist or render.
    #[instrument(skip(self, event))]
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::Click { dataset } => match ControlRole::from_dataset(&dataset) {
                Some(ControlRole::Like) => self.toggle_like(&dataset),
                Some(ControlRole::Preorder) => self.toggle_preorder(&dataset),
                Some(ControlRole::QuantityEdit) | None => Ok(()),
            },
            UiEvent::Change { dataset, value } => match ControlRole::from_dataset(&dataset) {
                Some(ControlRole::QuantityEdit) => self.edit_quantity(&dataset, &value),
                Some(ControlRole::Like | ControlRole::Preorder) | None => Ok(()),
            },
        }
    }

    /// Execute a banner action, then dismiss the owning banner.
    ///
    /// Unknown banner handles or action indexes are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the executed command fails to persist or
    /// render.
    #[instrument(skip(self))]
    pub fn invoke_banner_action(&mut self, banner: BannerId, action: usize) -> Result<()> {
        let command = self
            .page
            .banners
            .get(banner)
            .and_then(|b| b.actions.get(action))
            .map(|a| a.command.clone());
        let Some(command) = command else {
            return Ok(());
        };

        match command {
            ActionCommand::RestoreLike(entry) => self.restore_like(entry)?,
        }

        self.page.banners.dismiss(banner);
        Ok(())
    }

    /// Dismiss a banner via its close control.
    pub fn dismiss_banner(&mut self, banner: BannerId) {
        self.page.banners.dismiss(banner);
    }

    /// The current page projection.
    #[must_use]
    pub fn page(&self) -> &PageModel {
        &self.page
    }

    /// Mutable page access (registering controls, confirm inputs).
    pub fn page_mut(&mut self) -> &mut PageModel {
        &mut self.page
    }

    /// Snapshot of the likes collection.
    #[must_use]
    pub fn likes(&self) -> Vec<ProductEntry> {
        store::load(&self.storage, CollectionKey::Likes)
    }

    /// Snapshot of the pre-order collection, as stored.
    #[must_use]
    pub fn preorders(&self) -> Vec<ProductEntry> {
        store::load(&self.storage, CollectionKey::Preorder)
    }

    /// Regenerate the favorites view. Skipped when the container is
    /// absent from this page.
    pub(crate) fn render_favorites(&mut self) -> Result<()> {
        if self.page.favorites.is_none() {
            return Ok(());
        }
        let likes = store::load(&self.storage, CollectionKey::Likes);
        let html = FavoritesTemplate::from_entries(&likes).render()?;
        if let Some(region) = self.page.favorites.as_mut() {
            region.html = html;
        }
        Ok(())
    }

    /// Regenerate the pre-order view (quantities re-normalized by the
    /// view). Skipped when the container is absent from this page.
    pub(crate) fn render_preorder(&mut self) -> Result<()> {
        if self.page.preorder.is_none() {
            return Ok(());
        }
        let items = store::load(&self.storage, CollectionKey::Preorder);
        let html = PreorderTemplate::from_entries(&items).render()?;
        if let Some(region) = self.page.preorder.as_mut() {
            region.html = html;
        }
        Ok(())
    }

    /// Recompute the displayed state of every registered like control,
    /// keyed by its numeric product-id attribute.
    pub(crate) fn sync_like_controls(&mut self) {
        let likes = store::load(&self.storage, CollectionKey::Likes);
        for control in &mut self.page.like_controls {
            let liked = control
                .dataset
                .get(crate::page::attrs::PRODUCT_ID)
                .and_then(|raw| raw.trim().parse().ok())
                .is_some_and(|id| collection::contains(&likes, farmstand_core::ProductId::new(id)));
            control.appearance = LikeAppearance::for_state(liked);
        }
    }
}
