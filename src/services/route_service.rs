// ============================================================================
// ROUTE SERVICE - Orquestación asíncrona entre el API y el RouteStore
// ============================================================================

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::models::RouteResource;
use crate::services::route_api::SearchRouteApi;
use crate::stores::route_store::RouteStore;

/// Lanza las operaciones del recurso de rutas y aplica sus resultados al
/// store. Todas son fire-and-forget: el llamador no espera; la respuesta (o
/// el error acumulado) llega al store cuando llega.
#[derive(Clone)]
pub struct RouteService {
    api: SearchRouteApi,
    store: Rc<RefCell<RouteStore>>,
}

impl RouteService {
    pub fn new(store: Rc<RefCell<RouteStore>>) -> Self {
        Self { api: SearchRouteApi::new(), store }
    }

    /// Busca rutas (opcionalmente filtradas por nombre). Sin cancelación: si
    /// hay dos fetch en vuelo gana la última respuesta en llegar.
    pub fn fetch_routes(&self, search_text: &str) {
        let api = self.api.clone();
        let store = self.store.clone();
        let search = search_text.to_string();

        store.borrow_mut().begin_fetch();
        spawn_local(async move {
            let result = api.get_routes(&search).await;
            store.borrow_mut().finish_fetch(result);
        });
    }

    pub fn add_route(&self, resource: RouteResource) {
        let api = self.api.clone();
        let store = self.store.clone();

        spawn_local(async move {
            match api.create_route(&resource).await {
                Ok(created) => store.borrow_mut().apply_created(created),
                Err(error) => store.borrow_mut().record_error(error),
            }
        });
    }

    pub fn update_route(&self, resource: RouteResource) {
        let api = self.api.clone();
        let store = self.store.clone();

        spawn_local(async move {
            match api.update_route(&resource).await {
                Ok(updated) => store.borrow_mut().apply_updated(updated),
                Err(error) => store.borrow_mut().record_error(error),
            }
        });
    }

    pub fn delete_route(&self, route_id: &str) {
        let api = self.api.clone();
        let store = self.store.clone();
        let id = route_id.to_string();

        spawn_local(async move {
            match api.delete_route(&id).await {
                Ok(()) => store.borrow_mut().apply_deleted(&id),
                Err(error) => store.borrow_mut().record_error(error),
            }
        });
    }
}
