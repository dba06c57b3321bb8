// ============================================================================
// PERSISTED COLLECTION - Colección ordenada con write-through a storage
// ============================================================================
// Patrón común a todos los stores de dominio: secuencia de registros más
// reciente primero, cargada una vez al construir y re-serializada al storage
// después de cada mutación.
// ============================================================================

use std::rc::Rc;

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};

use crate::utils::storage::{load_json, save_json, StorageBackend};

/// Registro que puede vivir en una `PersistedCollection`.
pub trait CollectionRecord: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> &str;

    /// Los registros protegidos (datos de demostración) no se eliminan
    /// individualmente.
    fn protected(&self) -> bool {
        false
    }
}

/// Resultado de eliminar un registro por id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// El registro está protegido; la negativa es visible para el usuario
    /// pero no es un error.
    Protected,
    /// El id no existe (pudo haber sido eliminado por otra acción).
    NotFound,
}

/// Colección de registros de un tipo, sincronizada al almacenamiento después
/// de cada mutación. El orden canónico es más reciente primero.
pub struct PersistedCollection<T: CollectionRecord> {
    key: &'static str,
    items: Vec<T>,
    storage: Rc<dyn StorageBackend>,
    last_id: i64,
}

impl<T: CollectionRecord> PersistedCollection<T> {
    /// Carga la colección desde su clave de storage.
    ///
    /// Falla abierto: si la clave no existe o el JSON está corrupto se parte
    /// de una colección vacía.
    pub fn load(storage: Rc<dyn StorageBackend>, key: &'static str) -> Self {
        let items: Vec<T> = load_json(storage.as_ref(), key).unwrap_or_default();
        Self { key, items, storage, last_id: 0 }
    }

    /// Genera un id único derivado del timestamp en milisegundos.
    ///
    /// Dos asignaciones en el mismo milisegundo avanzan el contador para
    /// mantener unicidad y monotonía.
    pub fn allocate_id(&mut self) -> String {
        let mut id = Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id.to_string()
    }

    /// Inserta al frente (el registro más nuevo queda primero) y persiste.
    pub fn push_front(&mut self, record: T) {
        self.items.insert(0, record);
        self.persist();
    }

    /// Inserta al final y persiste. Usado para sembrar datos de demostración
    /// detrás de los registros del usuario.
    pub fn push_back(&mut self, record: T) {
        self.items.push(record);
        self.persist();
    }

    /// Busca por id y aplica la mutación. Si el id no existe es un no-op
    /// silencioso, no un error. Devuelve si hubo mutación.
    pub fn find_and_mutate<F>(&mut self, id: &str, mutation: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                mutation(item);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Elimina el registro con el id dado, salvo que esté protegido.
    pub fn remove(&mut self, id: &str) -> RemoveOutcome {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                if self.items[index].protected() {
                    return RemoveOutcome::Protected;
                }
                self.items.remove(index);
                self.persist();
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Vacía la colección por completo, protegidos incluidos.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Elimina todos los registros no protegidos.
    pub fn clear_unprotected(&mut self) {
        self.items.retain(|item| item.protected());
        self.persist();
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Los N registros más recientes (prefijo de la secuencia, sin reordenar).
    pub fn recent(&self, n: usize) -> &[T] {
        &self.items[..self.items.len().min(n)]
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write-through síncrono. Un fallo de escritura se registra y se sigue:
    /// el último estado persistido queda como estaba.
    fn persist(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), self.key, &self.items) {
            log::error!("❌ Error persistiendo '{}': {}", self.key, e);
        }
    }
}
