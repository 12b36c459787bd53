//! REST helpers for the storefront API.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics: a fetch that
//! fails degrades the page (empty list, inline message) without crashing
//! the app. Mutating calls distinguish "no connection" from a
//! server-provided message so forms can show the right text.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::types::{
    ApiMessage, ApiUser, LoginRequest, LoginResponse, MonthlySales, NewOrder, Order, Product,
    ProductForm, ProductPage, RegisterRequest, TopProduct,
};
use crate::net::types::OrderStats;

/// Host serving both the API and uploaded product images.
pub const SERVER_BASE: &str = "http://localhost:5000";
const API_BASE: &str = "http://localhost:5000/api";

/// Failure reported by a mutating call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server.
    Network,
    /// The server answered with an error body.
    Message(String),
}

/// Extract the server's error message from a non-2xx response.
async fn error_message(resp: gloo_net::http::Response) -> ApiError {
    let msg = resp.json::<ApiMessage>().await.map(|m| m.msg).unwrap_or_default();
    ApiError::Message(msg)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Option<T> {
    get_json_with(url, &[]).await
}

async fn get_json_with<T: DeserializeOwned>(url: &str, params: &[(&str, &str)]) -> Option<T> {
    let resp = Request::get(url)
        .query(params.iter().copied())
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

// =============================================================
// Auth
// =============================================================

/// Log in with email/password; returns the credential token.
///
/// # Errors
///
/// `ApiError::Network` if unreachable, otherwise the server's message.
pub async fn login(req: &LoginRequest) -> Result<String, ApiError> {
    let resp = Request::post(&format!("{API_BASE}/usuarios/login"))
        .json(req)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    let body: LoginResponse = resp.json().await.map_err(|_| ApiError::Network)?;
    Ok(body.token)
}

/// Create a new account.
///
/// # Errors
///
/// `ApiError::Network` if unreachable, otherwise the server's message.
pub async fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    let resp = Request::post(&format!("{API_BASE}/usuarios/register"))
        .json(req)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    Ok(())
}

/// Search registered users (back office).
pub async fn fetch_users(search: &str) -> Option<Vec<ApiUser>> {
    get_json_with(&format!("{API_BASE}/usuarios"), &[("search", search)]).await
}

// =============================================================
// Catalog
// =============================================================

/// Fetch one catalog page for a category.
pub async fn fetch_products(category: &str, page: u32, limit: u32) -> Option<ProductPage> {
    let page = page.to_string();
    let limit = limit.to_string();
    get_json_with(
        &format!("{API_BASE}/productos"),
        &[("page", &page), ("limit", &limit), ("category", category)],
    )
    .await
}

/// Fetch the unpaginated product list (back office).
pub async fn fetch_all_products() -> Option<Vec<Product>> {
    let page: ProductPage = get_json(&format!("{API_BASE}/productos")).await?;
    Some(page.products)
}

/// Fetch a single product by id.
pub async fn fetch_product(id: &str) -> Option<Product> {
    get_json(&format!("{API_BASE}/productos/{id}")).await
}

/// Create a catalog product (back office).
///
/// # Errors
///
/// `ApiError::Network` if unreachable, otherwise the server's message.
pub async fn create_product(form: &ProductForm) -> Result<(), ApiError> {
    let resp = Request::post(&format!("{API_BASE}/productos"))
        .json(form)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    Ok(())
}

/// Update a catalog product (back office).
///
/// # Errors
///
/// `ApiError::Network` if unreachable, otherwise the server's message.
pub async fn update_product(id: &str, form: &ProductForm) -> Result<(), ApiError> {
    let resp = Request::put(&format!("{API_BASE}/productos/{id}"))
        .json(form)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    Ok(())
}

/// Delete a catalog product (back office). Returns whether it succeeded.
pub async fn delete_product(id: &str) -> bool {
    match Request::delete(&format!("{API_BASE}/productos/{id}")).send().await {
        Ok(resp) => resp.ok(),
        Err(_) => false,
    }
}

// =============================================================
// Orders
// =============================================================

/// Create an order at checkout. The bearer token authenticates the buyer.
///
/// # Errors
///
/// `ApiError::Network` if unreachable, otherwise the server's message.
pub async fn create_order(order: &NewOrder, token: &str) -> Result<(), ApiError> {
    let resp = Request::post(&format!("{API_BASE}/pedidos"))
        .header("Authorization", &format!("Bearer {token}"))
        .json(order)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    Ok(())
}

/// Fetch every order (back office).
pub async fn fetch_orders() -> Option<Vec<Order>> {
    get_json(&format!("{API_BASE}/pedidos")).await
}

/// Fetch one user's orders (back office).
pub async fn fetch_user_orders(user_id: &str) -> Option<Vec<Order>> {
    get_json_with(&format!("{API_BASE}/pedidos"), &[("userId", user_id)]).await
}

/// Move an order to a new fulfillment status. Returns whether it succeeded.
pub async fn update_order_status(id: &str, status: &str) -> bool {
    let body = serde_json::json!({ "status": status });
    let Ok(req) = Request::put(&format!("{API_BASE}/pedidos/{id}/status")).json(&body) else {
        return false;
    };
    match req.send().await {
        Ok(resp) => resp.ok(),
        Err(_) => false,
    }
}

// =============================================================
// Dashboard aggregates (computed server-side)
// =============================================================

pub async fn fetch_order_stats() -> Option<OrderStats> {
    get_json(&format!("{API_BASE}/pedidos/estadisticas")).await
}

pub async fn fetch_sales_by_month() -> Option<Vec<MonthlySales>> {
    get_json(&format!("{API_BASE}/pedidos/dashboard/ventas-mes")).await
}

pub async fn fetch_top_products() -> Option<Vec<TopProduct>> {
    get_json(&format!("{API_BASE}/pedidos/dashboard/top-productos")).await
}