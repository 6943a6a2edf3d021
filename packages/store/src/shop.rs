//! Shop session store: authentication, cart, and wishlist.
//!
//! All three collections stay in sync with the server. Every mutation is
//! confirmed remotely first and followed by a wholesale re-fetch of the
//! affected collection; nothing is patched locally ahead of the server.
//! The server owns pricing, so `cart_total` is always the value the last
//! refresh returned.
//!
//! Two mutations against the same collection may be in flight at once; each
//! completion re-fetches full authoritative state, so the last refresh to
//! land wins and the worst outcome is an extra round trip.

use api::{ApiError, CartItem, ShopApi, ShopUser, WishlistItem};
use futures::join;

use crate::error::StoreError;
use crate::reactive::Reactive;
use crate::storage::{keys, SessionStorage};

/// Observable shop session state.
#[derive(Clone, Debug, PartialEq)]
pub struct ShopSnapshot {
    pub user: Option<ShopUser>,
    pub cart: Vec<CartItem>,
    /// Server-computed order total, mirrored verbatim.
    pub cart_total: f64,
    pub wishlist: Vec<WishlistItem>,
    /// True only until the first [`ShopStore::hydrate`] completes.
    pub loading: bool,
}

impl Default for ShopSnapshot {
    fn default() -> Self {
        Self {
            user: None,
            cart: Vec::new(),
            cart_total: 0.0,
            wishlist: Vec::new(),
            loading: true,
        }
    }
}

/// Shop session store with injected API client and storage backend.
#[derive(Clone)]
pub struct ShopStore<A, S> {
    api: A,
    storage: S,
    state: Reactive<ShopSnapshot>,
}

impl<A, S> ShopStore<A, S>
where
    A: ShopApi,
    S: SessionStorage,
{
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            state: Reactive::new(ShopSnapshot::default()),
        }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> ShopSnapshot {
        self.state.get()
    }

    /// Register a callback invoked after every state change.
    pub fn subscribe(&self, listener: impl FnMut() + 'static) {
        self.state.subscribe(listener);
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().user.is_some()
    }

    /// Wishlist membership by product id. No network call, so views can
    /// toggle icon state synchronously.
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.state
            .get()
            .wishlist
            .iter()
            .any(|item| item.product_id == product_id)
    }

    /// Number of cart lines, for badge rendering. Never price math.
    pub fn cart_count(&self) -> usize {
        self.state.get().cart.len()
    }

    fn token(&self) -> Option<String> {
        self.storage.get(keys::SHOP_TOKEN)
    }

    fn require_token(&self) -> Result<String, StoreError> {
        self.token().ok_or(StoreError::NotAuthenticated)
    }

    /// Startup: establish who is signed in, then load cart and wishlist
    /// together. The user refresh must land first because the other two are
    /// conditioned on the token it validates.
    pub async fn hydrate(&self) {
        self.refresh_user().await;
        join!(self.refresh_cart(), self.refresh_wishlist());
        self.state.update(|state| state.loading = false);
    }

    /// Fetch the current user for the stored token.
    ///
    /// Any failure clears both the in-memory user and the stored token: a
    /// rejected token must not leave a stale authenticated-looking state.
    pub async fn refresh_user(&self) {
        let Some(token) = self.token() else {
            self.state.update(|state| state.user = None);
            return;
        };
        match self.api.current_user(&token).await {
            Ok(user) => self.state.update(|state| state.user = Some(user)),
            Err(err) => {
                tracing::warn!(%err, "shop token rejected, dropping session");
                self.storage.remove(keys::SHOP_TOKEN);
                self.state.update(|state| state.user = None);
            }
        }
    }

    /// Replace cart state wholesale with the server's. Without a token the
    /// cart is empty by definition.
    pub async fn refresh_cart(&self) {
        let Some(token) = self.token() else {
            self.state.update(|state| {
                state.cart.clear();
                state.cart_total = 0.0;
            });
            return;
        };
        match self.api.fetch_cart(&token).await {
            Ok(cart) => self.state.update(|state| {
                state.cart = cart.items;
                state.cart_total = cart.total;
            }),
            Err(ApiError::InvalidSession) => self.state.update(|state| {
                state.cart.clear();
                state.cart_total = 0.0;
            }),
            // Keep the last known-good state on transient failures.
            Err(err) => tracing::warn!(%err, "cart refresh failed"),
        }
    }

    /// Replace wishlist state wholesale with the server's. Symmetric to
    /// [`refresh_cart`](Self::refresh_cart).
    pub async fn refresh_wishlist(&self) {
        let Some(token) = self.token() else {
            self.state.update(|state| state.wishlist.clear());
            return;
        };
        match self.api.fetch_wishlist(&token).await {
            Ok(wishlist) => self.state.update(|state| state.wishlist = wishlist),
            Err(ApiError::InvalidSession) => {
                self.state.update(|state| state.wishlist.clear())
            }
            Err(err) => tracing::warn!(%err, "wishlist refresh failed"),
        }
    }

    /// Sign in and load the session's collections.
    pub async fn login(&self, email: &str, password: &str) -> Result<ShopUser, StoreError> {
        let auth = self.api.login(email, password).await?;
        self.storage.set(keys::SHOP_TOKEN, &auth.token);
        self.state.update(|state| state.user = Some(auth.user.clone()));
        join!(self.refresh_cart(), self.refresh_wishlist());
        Ok(auth.user)
    }

    /// Create an account server-side, then sign in as it.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<ShopUser, StoreError> {
        let auth = self.api.register(name, email, password).await?;
        self.storage.set(keys::SHOP_TOKEN, &auth.token);
        self.state.update(|state| state.user = Some(auth.user.clone()));
        join!(self.refresh_cart(), self.refresh_wishlist());
        Ok(auth.user)
    }

    /// End the server-tracked session, then drop local state regardless of
    /// whether the server call succeeded.
    pub async fn logout(&self) {
        if let Some(token) = self.token() {
            if let Err(err) = self.api.logout(&token).await {
                tracing::warn!(%err, "shop logout call failed");
            }
        }
        self.storage.remove(keys::SHOP_TOKEN);
        self.state.update(|state| {
            state.user = None;
            state.cart.clear();
            state.cart_total = 0.0;
            state.wishlist.clear();
        });
    }

    /// Add a product to the cart, then re-fetch the cart so the server's
    /// total stays authoritative.
    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<(), StoreError> {
        let token = self.require_token()?;
        self.api.add_to_cart(&token, product_id, quantity).await?;
        self.refresh_cart().await;
        Ok(())
    }

    /// Change the quantity of a cart line.
    pub async fn update_cart_item(&self, item_id: &str, quantity: u32) -> Result<(), StoreError> {
        let token = self.require_token()?;
        self.api.update_cart_item(&token, item_id, quantity).await?;
        self.refresh_cart().await;
        Ok(())
    }

    /// Remove a cart line.
    pub async fn remove_from_cart(&self, item_id: &str) -> Result<(), StoreError> {
        let token = self.require_token()?;
        self.api.remove_from_cart(&token, item_id).await?;
        self.refresh_cart().await;
        Ok(())
    }

    /// Empty the cart.
    pub async fn clear_cart(&self) -> Result<(), StoreError> {
        let token = self.require_token()?;
        self.api.clear_cart(&token).await?;
        self.refresh_cart().await;
        Ok(())
    }

    /// Save a product to the wishlist.
    pub async fn add_to_wishlist(&self, product_id: &str) -> Result<(), StoreError> {
        let token = self.require_token()?;
        self.api.add_to_wishlist(&token, product_id).await?;
        self.refresh_wishlist().await;
        Ok(())
    }

    /// Drop a product from the wishlist.
    pub async fn remove_from_wishlist(&self, product_id: &str) -> Result<(), StoreError> {
        let token = self.require_token()?;
        self.api.remove_from_wishlist(&token, product_id).await?;
        self.refresh_wishlist().await;
        Ok(())
    }
}
