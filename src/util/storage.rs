//! Durable client-side storage behind a small key/value trait.
//!
//! All storage failures are swallowed: a failed read behaves as if nothing
//! was persisted and a failed write leaves the in-memory state authoritative.
//! The stores own their backend and never touch `localStorage` directly.

/// Slot holding the raw credential token string.
pub const TOKEN_KEY: &str = "token";
/// Slot holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Keyed string storage. Implementations must not panic; absence and
/// failure are indistinguishable on purpose.
pub trait KeyValueStorage: Clone + 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` adapter. Outside a browser every read yields
/// `None` and every write is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// In-memory backend for exercising persistence behavior in tests. Clones
/// share the same underlying map, so a "fresh" store can be rehydrated from
/// what a previous one persisted.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
