use gloo_storage::{LocalStorage, Storage};
use shared::{KeyValueStorage, StorageError};

fn unavailable(action: &str, key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{action} `{key}`: {err:?}"))
}

/// `localStorage` as a [`KeyValueStorage`].
///
/// Values are stored verbatim. The typed `gloo` accessors would JSON-quote
/// them, which breaks the plain `"dark"`/`"light"` theme entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| unavailable("read", key, &err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| unavailable("write", key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| unavailable("remove", key, &err))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn values_round_trip_verbatim() {
        let storage = BrowserStorage;
        storage.set("dropwatch-test", "light").unwrap();
        assert_eq!(
            storage.get("dropwatch-test").unwrap().as_deref(),
            Some("light")
        );
        storage.remove("dropwatch-test").unwrap();
        assert_eq!(storage.get("dropwatch-test").unwrap(), None);
    }
}
