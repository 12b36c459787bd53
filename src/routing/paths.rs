//! Route path constants shared by the router and the access guard.

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/registro";
pub const CATEGORY_SELECTION: &str = "/seleccionar-categoria";
pub const CART: &str = "/carrito";
pub const CHECKOUT: &str = "/checkout";
pub const ACCOUNT: &str = "/cuenta";
pub const ADMIN: &str = "/admin";

/// Catalog page for a category.
#[must_use]
pub fn catalog(category: &str) -> String {
    format!("/catalogo/{category}")
}

/// Detail page for a product.
#[must_use]
pub fn product(id: &str) -> String {
    format!("/producto/{id}")
}
