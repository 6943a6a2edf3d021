//! Shop endpoints: session, cart, and wishlist.
//!
//! Mutating calls return `()` on success. The caller re-fetches the
//! affected collection afterwards instead of patching local state from the
//! response, so the server's pricing stays authoritative.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Cart, ShopUser, WishlistItem};

/// Payload returned by a successful shop login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopAuth {
    pub token: String,
    pub user: ShopUser,
}

#[derive(Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AddCartRequest<'a> {
    product_id: &'a str,
    quantity: u32,
}

#[derive(Serialize)]
struct UpdateCartRequest {
    quantity: u32,
}

#[derive(Serialize)]
struct AddWishlistRequest<'a> {
    product_id: &'a str,
}

/// Async interface to the shop endpoints.
pub trait ShopApi {
    fn current_user(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<ShopUser, ApiError>>;
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<ShopAuth, ApiError>>;
    fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<ShopAuth, ApiError>>;
    fn logout(&self, token: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn fetch_cart(&self, token: &str) -> impl std::future::Future<Output = Result<Cart, ApiError>>;
    fn add_to_cart(
        &self,
        token: &str,
        product_id: &str,
        quantity: u32,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn update_cart_item(
        &self,
        token: &str,
        item_id: &str,
        quantity: u32,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn remove_from_cart(
        &self,
        token: &str,
        item_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn clear_cart(&self, token: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;

    fn fetch_wishlist(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Vec<WishlistItem>, ApiError>>;
    fn add_to_wishlist(
        &self,
        token: &str,
        product_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn remove_from_wishlist(
        &self,
        token: &str,
        product_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

impl ShopApi for HttpClient {
    async fn current_user(&self, token: &str) -> Result<ShopUser, ApiError> {
        self.get_json("/shop/me", Some(token)).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<ShopAuth, ApiError> {
        self.post_json("/shop/auth/login", None, &CredentialsRequest { email, password })
            .await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<ShopAuth, ApiError> {
        self.post_json(
            "/shop/auth/register",
            None,
            &RegisterRequest {
                name,
                email,
                password,
            },
        )
        .await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.post_unit("/shop/auth/logout", Some(token), &()).await
    }

    async fn fetch_cart(&self, token: &str) -> Result<Cart, ApiError> {
        self.get_json("/shop/cart", Some(token)).await
    }

    async fn add_to_cart(
        &self,
        token: &str,
        product_id: &str,
        quantity: u32,
    ) -> Result<(), ApiError> {
        self.post_unit(
            "/shop/cart",
            Some(token),
            &AddCartRequest {
                product_id,
                quantity,
            },
        )
        .await
    }

    async fn update_cart_item(
        &self,
        token: &str,
        item_id: &str,
        quantity: u32,
    ) -> Result<(), ApiError> {
        self.put_unit(
            &format!("/shop/cart/{item_id}"),
            Some(token),
            &UpdateCartRequest { quantity },
        )
        .await
    }

    async fn remove_from_cart(&self, token: &str, item_id: &str) -> Result<(), ApiError> {
        self.delete_unit(&format!("/shop/cart/{item_id}"), Some(token))
            .await
    }

    async fn clear_cart(&self, token: &str) -> Result<(), ApiError> {
        self.delete_unit("/shop/cart", Some(token)).await
    }

    async fn fetch_wishlist(&self, token: &str) -> Result<Vec<WishlistItem>, ApiError> {
        self.get_json("/shop/wishlist", Some(token)).await
    }

    async fn add_to_wishlist(&self, token: &str, product_id: &str) -> Result<(), ApiError> {
        self.post_unit(
            "/shop/wishlist",
            Some(token),
            &AddWishlistRequest { product_id },
        )
        .await
    }

    async fn remove_from_wishlist(&self, token: &str, product_id: &str) -> Result<(), ApiError> {
        self.delete_unit(&format!("/shop/wishlist/{product_id}"), Some(token))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_cart_decodes_items_and_total() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shop/cart"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "id": "ci-1",
                    "product_id": "p-1",
                    "quantity": 2,
                    "product": {"id": "p-1", "name": "Icon pack", "price": 4.5}
                }],
                "total": 9.0
            })))
            .mount(&server)
            .await;

        let client = HttpClient::new(ApiConfig::new(server.uri()));
        let cart = client.fetch_cart("tok-1").await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total, 9.0);
    }

    #[tokio::test]
    async fn test_add_to_cart_posts_product_and_quantity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/shop/cart"))
            .and(body_json(json!({"product_id": "p-1", "quantity": 3})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(ApiConfig::new(server.uri()));
        client.add_to_cart("tok-1", "p-1", 3).await.unwrap();
    }

    #[tokio::test]
    async fn test_cart_item_routes_carry_the_item_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/shop/cart/ci-9"))
            .and(body_json(json!({"quantity": 5})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/shop/cart/ci-9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(ApiConfig::new(server.uri()));
        client.update_cart_item("tok-1", "ci-9", 5).await.unwrap();
        client.remove_from_cart("tok-1", "ci-9").await.unwrap();
    }

    #[tokio::test]
    async fn test_wishlist_roundtrip_routes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shop/wishlist"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "w-1", "product_id": "p-1"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/shop/wishlist"))
            .and(body_json(json!({"product_id": "p-2"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/shop/wishlist/p-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(ApiConfig::new(server.uri()));
        let wishlist = client.fetch_wishlist("tok-1").await.unwrap();
        assert_eq!(wishlist[0].product_id, "p-1");
        client.add_to_wishlist("tok-1", "p-2").await.unwrap();
        client.remove_from_wishlist("tok-1", "p-1").await.unwrap();
    }
}
