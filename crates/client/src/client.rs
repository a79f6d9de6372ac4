//! Typed client for the remote storefront API.
//!
//! One `reqwest`-backed client owns request construction, auth-header
//! injection, and response normalization; the endpoint methods are thin
//! typed wrappers over it, one per remote operation.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{error, instrument, warn};

use shoplite_core::{
    CartItem, CartItemId, Category, CategoryId, Order, OrderId, Paginated, Product, ProductId,
    User,
};

use crate::config::ApiConfig;
use crate::error::{ApiError, classify_status, is_fallback_message};
use crate::query::ProductQuery;
use crate::token::{FileTokenStore, MemoryTokenStore, TokenStore};

/// The only payment method the remote service currently accepts.
pub const PAYMENT_CASH_ON_DELIVERY: &str = "cash_on_delivery";

/// Banner message surfaced for a rejected login, regardless of the raw
/// server message.
const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Banner message for a rejected registration when the server supplied no
/// message of its own.
const REGISTER_VALIDATION_MESSAGE: &str = "Please fix the validation errors below.";

/// Checkout submission payload.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Free-text destination; must be non-empty before calling
    /// `create_order` (the caller's responsibility).
    pub shipping_address: String,
    /// Passed through opaquely; see [`PAYMENT_CASH_ON_DELIVERY`].
    pub payment_method: String,
}

impl NewOrder {
    /// A cash-on-delivery order to the given address.
    #[must_use]
    pub fn cash_on_delivery(shipping_address: impl Into<String>) -> Self {
        Self {
            shipping_address: shipping_address.into(),
            payment_method: PAYMENT_CASH_ON_DELIVERY.to_string(),
        }
    }
}

/// `{ "data": ... }` wrapper most resource endpoints respond with.
#[derive(Debug, Deserialize)]
struct Data<T> {
    data: T,
}

/// Successful login/register response.
#[derive(Debug, Deserialize)]
struct AuthPayload {
    token: String,
    user: User,
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the remote storefront API.
///
/// All outbound requests flow through one core path that attaches the
/// bearer token when present, serializes bodies as JSON, and normalizes
/// non-2xx responses into [`ApiError`]. The token lives in an explicit
/// [`TokenStore`] passed at construction rather than process-global state.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("tokens", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with the token store the configuration implies: a
    /// [`FileTokenStore`] when `token_file` is set, else in-memory.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let tokens: Arc<dyn TokenStore> = match &config.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path.clone())),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::with_store(config, tokens)
    }

    /// Create a client with an explicit token store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed.
    #[must_use]
    pub fn with_store(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let http = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.base_url.clone(),
                tokens,
            }),
        }
    }

    /// Store a bearer token; subsequent requests attach it.
    pub fn set_token(&self, token: &str) {
        self.inner.tokens.store(token);
    }

    /// Erase the stored bearer token; subsequent requests omit it.
    pub fn clear_token(&self) {
        self.inner.tokens.clear();
    }

    /// Whether a bearer token is currently stored.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner.tokens.load().is_some()
    }

    // =========================================================================
    // Request core
    // =========================================================================

    /// Build a request against the configured origin.
    ///
    /// Always sets `Content-Type: application/json` and
    /// `Accept: application/json`, attaches `Authorization: Bearer <token>`
    /// when a token is stored, and merges caller-supplied headers last so
    /// the caller wins on conflict.
    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<reqwest::Request, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = self.inner.http.request(method, url).headers(headers);

        if let Some(token) = self.inner.tokens.load() {
            builder = builder.bearer_auth(token.expose_secret());
        }
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        if let Some(extra) = extra_headers {
            builder = builder.headers(extra);
        }

        builder.build().map_err(ApiError::Network)
    }

    /// Issue a request and decode the response.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<T, ApiError> {
        let response = self.inner.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| {
                error!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "response body violated the JSON contract"
                );
                ApiError::Parse(format!("failed to parse response: {e}"))
            })
        } else {
            Err(classify_status(status.as_u16(), &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.build_request(Method::GET, path, &[], None, None)?;
        self.execute(request).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.build_request(Method::GET, path, query, None, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let request = self.build_request(Method::POST, path, &[], body, None)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        let request = self.build_request(Method::PUT, path, &[], Some(body), None)?;
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.build_request(Method::DELETE, path, &[], None, None)?;
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Authenticate with email and password.
    ///
    /// On success the returned token is stored so subsequent requests carry
    /// it. A 401 surfaces a fixed banner message regardless of the raw
    /// server message, with field errors preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are
    /// rejected.
    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = json!({ "email": email, "password": password });
        let auth: AuthPayload = self
            .post("/login", Some(body))
            .await
            .map_err(rewrite_login_error)?;

        self.inner.tokens.store(&auth.token);
        Ok(auth.user)
    }

    /// Register a new account.
    ///
    /// On success the returned token is stored. A 422 keeps a
    /// server-supplied message when present; otherwise a generic
    /// fix-the-errors-below message is surfaced, with field errors
    /// preserved verbatim for per-field display.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or validation is rejected.
    #[instrument(skip_all)]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<User, ApiError> {
        let body = json!({
            "name": name,
            "email": email,
            "password": password,
            "password_confirmation": password_confirmation,
        });
        let auth: AuthPayload = self
            .post("/register", Some(body))
            .await
            .map_err(rewrite_register_error)?;

        self.inner.tokens.store(&auth.token);
        Ok(auth.user)
    }

    /// End the session on the server, then clear the local token.
    ///
    /// The token is cleared only after the request settles successfully; a
    /// failed logout call leaves it intact rather than producing a false
    /// logged-out state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the token is untouched in
    /// that case.
    #[instrument(skip_all)]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post("/logout", None).await?;
        self.inner.tokens.clear();
        Ok(())
    }

    /// Fetch the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no session is active.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/user").await
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch one page of products matching the query.
    ///
    /// Unset or empty filters are omitted from the request entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn products(&self, query: &ProductQuery) -> Result<Paginated<Product>, ApiError> {
        self.get_with_query("/products", &query.to_pairs()).await
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        let envelope: Data<Product> = self.get(&format!("/products/{id}")).await?;
        Ok(envelope.data)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Fetch all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: Data<Vec<Category>> = self.get("/categories").await?;
        Ok(envelope.data)
    }

    /// Fetch categories for incidental UI (filter dropdowns and the like).
    ///
    /// A failed fetch here should not block unrelated UI, so failures are
    /// logged and surfaced as `None`; callers decide the fallback.
    #[instrument(skip(self))]
    pub async fn categories_best_effort(&self) -> Option<Vec<Category>> {
        match self.categories().await {
            Ok(categories) => Some(categories),
            Err(e) => {
                warn!(error = %e, "category fetch failed, degrading to none");
                None
            }
        }
    }

    /// Fetch a single category.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn category(&self, id: CategoryId) -> Result<Category, ApiError> {
        let envelope: Data<Category> = self.get(&format!("/categories/{id}")).await?;
        Ok(envelope.data)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Fetch the authenticated user's cart lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no session is active.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Vec<CartItem>, ApiError> {
        let envelope: Data<Vec<CartItem>> = self.get("/cart").await?;
        Ok(envelope.data)
    }

    /// Add a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product cannot be
    /// added.
    #[instrument(skip(self), fields(product_id = %product_id, quantity = quantity))]
    pub async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: u64,
    ) -> Result<CartItem, ApiError> {
        let body = json!({ "product_id": product_id, "quantity": quantity });
        let envelope: Data<CartItem> = self.post("/cart", Some(body)).await?;
        Ok(envelope.data)
    }

    /// Change the quantity of an existing cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the line does not exist.
    #[instrument(skip(self), fields(id = %id, quantity = quantity))]
    pub async fn update_cart_item(
        &self,
        id: CartItemId,
        quantity: u64,
    ) -> Result<CartItem, ApiError> {
        let body = json!({ "quantity": quantity });
        let envelope: Data<CartItem> = self.put(&format!("/cart/{id}"), body).await?;
        Ok(envelope.data)
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the line does not exist.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn remove_from_cart(&self, id: CartItemId) -> Result<(), ApiError> {
        self.delete(&format!("/cart/{id}")).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Fetch the authenticated user's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no session is active.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        let envelope: Data<Vec<Order>> = self.get("/orders").await?;
        Ok(envelope.data)
    }

    /// Submit checkout, creating an order from the current cart.
    ///
    /// The caller is responsible for the shipping address being non-empty;
    /// the payment method is passed through opaquely.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is rejected.
    #[instrument(skip_all)]
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        let body = json!({
            "shipping_address": order.shipping_address,
            "payment_method": order.payment_method,
        });
        let envelope: Data<Order> = self.post("/orders", Some(body)).await?;
        Ok(envelope.data)
    }

    /// Fetch a single order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn order(&self, id: OrderId) -> Result<Order, ApiError> {
        let envelope: Data<Order> = self.get(&format!("/orders/{id}")).await?;
        Ok(envelope.data)
    }
}

// =============================================================================
// Endpoint-specific error rewrites
// =============================================================================

/// Rewrite a rejected login: a 401 always surfaces the fixed banner
/// message, with field errors preserved.
fn rewrite_login_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Http {
            status: 401,
            field_errors,
            ..
        } => ApiError::Http {
            status: 401,
            message: LOGIN_FAILED_MESSAGE.to_string(),
            field_errors,
        },
        other => other,
    }
}

/// Rewrite a rejected registration: a 422 keeps a server-supplied message
/// and only replaces the static per-status fallback, with field errors
/// preserved verbatim.
fn rewrite_register_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Http {
            status: 422,
            message,
            field_errors,
        } => {
            let message = if is_fallback_message(422, &message) {
                REGISTER_VALIDATION_MESSAGE.to_string()
            } else {
                message
            };
            ApiError::Http {
                status: 422,
                message,
                field_errors,
            }
        }
        other => other,
    }
}
