//! Wire types exchanged with the storefront API.
//!
//! Response shapes are deserialized tolerantly (`#[serde(default)]`) so a
//! missing optional field degrades instead of failing the whole page.

use serde::{Deserialize, Serialize};

/// Catalog item as served by the products endpoint. Cart lines freeze a
/// copy of this at add time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
}

/// One page of catalog results.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
}

/// Fields sent when creating or editing a product from the back office.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub pages: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Registration form payload.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub carrera: String,
    pub telefono: String,
}

/// Error body the API returns alongside non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub msg: String,
}

/// Line item sent when creating an order: product id plus quantity.
#[derive(Clone, Debug, Serialize)]
pub struct OrderItem {
    pub product: String,
    pub quantity: u32,
}

/// Payload for creating an order at checkout.
#[derive(Clone, Debug, Serialize)]
pub struct NewOrder {
    pub user: String,
    pub products: Vec<OrderItem>,
    pub total: f64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

/// Order as listed in the back office.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<OrderUser>,
    #[serde(default)]
    pub products: Vec<OrderLine>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrderUser {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
}

/// Populated order line: the referenced product may have been deleted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrderLine {
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub quantity: u32,
}

/// Order lifecycle states, in fulfillment order.
pub const ORDER_STATUSES: [&str; 4] =
    ["pendiente", "en proceso", "listo para retirar", "entregado"];

/// Registered user as listed in the back office.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub carrera: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

/// Aggregate sales statistics for the admin dashboard.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrderStats {
    #[serde(default, rename = "totalFacturacion")]
    pub total_facturacion: f64,
    #[serde(default)]
    pub diaria: f64,
    #[serde(default)]
    pub semanal: f64,
    #[serde(default)]
    pub mensual: f64,
    #[serde(default, rename = "pedidosTotales")]
    pub pedidos_totales: u64,
    #[serde(default, rename = "pedidosPorEstado")]
    pub pedidos_por_estado: std::collections::HashMap<String, u64>,
    #[serde(default)]
    pub recientes: Vec<Order>,
}

/// One bar of the monthly sales chart.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MonthlySales {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub total: f64,
}

/// One row of the best-sellers chart.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TopProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub count: u64,
}
