// ============================================================================
// SAVED ROUTES STORE - Rutas favoritas del usuario
// ============================================================================

use std::rc::Rc;

use chrono::Utc;

use crate::models::SavedRouteRecord;
use crate::stores::collection::{CollectionRecord, PersistedCollection, RemoveOutcome};
use crate::utils::constants::SAVED_ROUTES_KEY;
use crate::utils::storage::StorageBackend;

impl CollectionRecord for SavedRouteRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct SavedRoutesStore {
    routes: PersistedCollection<SavedRouteRecord>,
}

impl SavedRoutesStore {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        Self {
            routes: PersistedCollection::load(storage, SAVED_ROUTES_KEY),
        }
    }

    pub fn route_exists(&self, origin: &str, destination: &str) -> bool {
        self.routes
            .all()
            .iter()
            .any(|r| r.origin == origin && r.destination == destination)
    }

    /// Guarda una ruta si el par (origen, destino) no existe todavía.
    /// Devuelve si se agregó.
    pub fn add_route(&mut self, origin: &str, destination: &str) -> bool {
        if self.route_exists(origin, destination) {
            return false;
        }
        let id = self.routes.allocate_id();
        self.routes.push_front(SavedRouteRecord {
            id,
            origin: origin.to_string(),
            destination: destination.to_string(),
            saved_at: Utc::now(),
        });
        true
    }

    pub fn remove_route(&mut self, route_id: &str) -> RemoveOutcome {
        self.routes.remove(route_id)
    }

    pub fn clear_all(&mut self) {
        self.routes.clear();
    }

    pub fn all_routes(&self) -> &[SavedRouteRecord] {
        self.routes.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn store(storage: &MemoryStorage) -> SavedRoutesStore {
        SavedRoutesStore::new(Rc::new(storage.clone()))
    }

    #[test]
    fn test_duplicate_route_is_rejected() {
        let storage = MemoryStorage::new();
        let mut routes = store(&storage);

        assert!(routes.add_route("A", "B"));
        assert!(!routes.add_route("A", "B"));
        assert_eq!(routes.all_routes().len(), 1);

        // Mismo origen, destino distinto: sí se agrega
        assert!(routes.add_route("A", "C"));
        assert_eq!(routes.all_routes().len(), 2);
    }

    #[test]
    fn test_remove_route_by_id() {
        let storage = MemoryStorage::new();
        let mut routes = store(&storage);
        routes.add_route("A", "B");
        let id = routes.all_routes()[0].id.clone();

        assert_eq!(routes.remove_route(&id), RemoveOutcome::Removed);
        assert!(routes.all_routes().is_empty());
        assert_eq!(routes.remove_route(&id), RemoveOutcome::NotFound);
    }

    #[test]
    fn test_routes_survive_reload() {
        let storage = MemoryStorage::new();
        let mut routes = store(&storage);
        routes.add_route("A", "B");
        routes.add_route("C", "D");

        let reloaded = store(&storage);
        assert_eq!(reloaded.all_routes().len(), 2);
        assert!(reloaded.route_exists("A", "B"));
        assert_eq!(reloaded.all_routes()[0].origin, "C");
    }
}
