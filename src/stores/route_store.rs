// ============================================================================
// ROUTE STORE - Rutas obtenidas del recurso REST externo
// ============================================================================
// Secuencia en memoria, sin persistencia local: la fuente de verdad es el
// backend. Los fallos de red se acumulan en la lista de errores en lugar de
// propagarse al llamador.
// ============================================================================

use crate::models::{Route, RouteResource};
use crate::services::route_assembler::RouteAssembler;

pub struct RouteStore {
    routes: Vec<Route>,
    errors: Vec<String>,
    routes_loaded: bool,
    is_loading: bool,
}

impl RouteStore {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            errors: Vec::new(),
            routes_loaded: false,
            is_loading: false,
        }
    }

    /// Marca el inicio de un fetch. No hay cancelación: si un fetch nuevo
    /// arranca con otro en vuelo, gana la última respuesta en llegar.
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
    }

    /// Aplica el resultado de un fetch. Una respuesta exitosa reemplaza la
    /// secuencia completa; un fallo se agrega a la lista de errores y la
    /// secuencia previa queda intacta.
    pub fn finish_fetch(&mut self, result: Result<Vec<RouteResource>, String>) {
        match result {
            Ok(resources) => {
                self.routes = RouteAssembler::to_entities(resources);
                self.routes_loaded = true;
            }
            Err(error) => {
                log::error!("❌ Error obteniendo rutas: {}", error);
                self.errors.push(error);
            }
        }
        self.is_loading = false;
    }

    /// Incorpora la ruta creada por el backend.
    pub fn apply_created(&mut self, resource: RouteResource) {
        self.routes.push(RouteAssembler::to_entity(resource));
    }

    /// Reemplaza la ruta actualizada; id ausente es un no-op silencioso.
    pub fn apply_updated(&mut self, resource: RouteResource) {
        let updated = RouteAssembler::to_entity(resource);
        if let Some(route) = self.routes.iter_mut().find(|r| r.id == updated.id) {
            *route = updated;
        }
    }

    pub fn apply_deleted(&mut self, route_id: &str) {
        self.routes.retain(|r| r.id != route_id);
    }

    pub fn record_error(&mut self, error: String) {
        log::error!("❌ {}", error);
        self.errors.push(error);
    }

    /// Búsqueda por nombre, sin mayúsculas ni espacios alrededor.
    pub fn get_route_by_name(&self, name: &str) -> Option<&Route> {
        let target = name.trim().to_lowercase();
        self.routes
            .iter()
            .find(|r| r.name.trim().to_lowercase() == target)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Cantidad de rutas; 0 mientras no se haya completado ninguna carga.
    pub fn routes_count(&self) -> usize {
        if self.routes_loaded {
            self.routes.len()
        } else {
            0
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn routes_loaded(&self) -> bool {
        self.routes_loaded
    }
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str, name: &str) -> RouteResource {
        RouteResource {
            id: id.to_string(),
            name: name.to_string(),
            estimated_time: Some("40 min".to_string()),
            frequency: Some("10 min".to_string()),
        }
    }

    #[test]
    fn test_successful_fetch_replaces_routes() {
        let mut store = RouteStore::new();
        store.begin_fetch();
        assert!(store.is_loading());
        assert_eq!(store.routes_count(), 0);

        store.finish_fetch(Ok(vec![resource("1", "Santa María"), resource("2", "San Ignacio")]));
        assert!(!store.is_loading());
        assert!(store.routes_loaded());
        assert_eq!(store.routes_count(), 2);
    }

    #[test]
    fn test_failed_fetch_accumulates_error_and_keeps_routes() {
        let mut store = RouteStore::new();
        store.finish_fetch(Ok(vec![resource("1", "Santa María")]));

        store.begin_fetch();
        store.finish_fetch(Err("Network error".to_string()));
        assert_eq!(store.errors().len(), 1);
        assert_eq!(store.routes_count(), 1);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_overlapping_fetches_last_response_wins() {
        let mut store = RouteStore::new();
        // Dos fetch en vuelo; las respuestas llegan fuera de orden
        store.begin_fetch();
        store.begin_fetch();
        store.finish_fetch(Ok(vec![resource("1", "Segunda petición")]));
        store.finish_fetch(Ok(vec![resource("2", "Primera petición")]));

        // Gana la última respuesta en llegar, no la última petición
        assert_eq!(store.routes()[0].name, "Primera petición");
    }

    #[test]
    fn test_get_route_by_name_is_case_insensitive() {
        let mut store = RouteStore::new();
        store.finish_fetch(Ok(vec![resource("1", "Santa María")]));

        assert!(store.get_route_by_name("  santa maría ").is_some());
        assert!(store.get_route_by_name("san ignacio").is_none());
    }

    #[test]
    fn test_apply_update_and_delete() {
        let mut store = RouteStore::new();
        store.finish_fetch(Ok(vec![resource("1", "Santa María")]));

        store.apply_updated(resource("1", "Santa María Express"));
        assert_eq!(store.routes()[0].name, "Santa María Express");

        // Id ausente: no-op
        store.apply_updated(resource("9", "Fantasma"));
        assert_eq!(store.routes().len(), 1);

        store.apply_deleted("1");
        assert!(store.routes().is_empty());
    }
}
