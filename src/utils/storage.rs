// ============================================================================
// STORAGE - Acceso al almacenamiento persistente (localStorage / memoria)
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// Backend de almacenamiento clave→valor.
///
/// Abstrae localStorage para que los stores compilen y se prueben fuera del
/// navegador. Las claves son nombres fijos (ver `utils::constants`).
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

/// Guarda un valor serializado como JSON bajo la clave indicada.
pub fn save_json<T: Serialize>(
    storage: &dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set_item(key, &json)
}

/// Carga un valor JSON desde la clave indicada.
///
/// Falla abierto: devuelve `None` tanto si la clave no existe como si el
/// contenido no se puede parsear (el dato corrupto se descarta, nunca se
/// propaga un error al llamador).
pub fn load_json<T: DeserializeOwned>(storage: &dyn StorageBackend, key: &str) -> Option<T> {
    let json = storage.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Dato corrupto en '{}', se descarta: {}", key, e);
            None
        }
    }
}

/// Backend en memoria para pruebas y ejecución fuera del navegador.
///
/// `Clone` comparte el mismo mapa subyacente, igual que dos handles al mismo
/// localStorage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Backend sobre window.localStorage.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }

    fn remove_item(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let storage = MemoryStorage::new();
        save_json(&storage, "k", &vec![1, 2, 3]).unwrap();
        let loaded: Option<Vec<i32>> = load_json(&storage, "k");
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_load_missing_key_is_none() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<i32>> = load_json(&storage, "nada");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_corrupt_json_fails_open() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "{esto no es json").unwrap();
        let loaded: Option<Vec<i32>> = load_json(&storage, "k");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clone_shares_underlying_map() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set_item("k", "v").unwrap();
        assert_eq!(handle.get_item("k"), Some("v".to_string()));
    }
}
