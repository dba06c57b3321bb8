// ============================================================================
// APP CONTEXT - Raíz de composición (inyección explícita de dependencias)
// ============================================================================
// Los stores se construyen una sola vez aquí y se reparten como handles
// Rc<RefCell<_>> a quien los necesite; no hay singletons ambientales.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::stores::{
    AlertsStore, NotificationsStore, RouteStore, SavedRoutesStore, TravelHistoryStore, UserStore,
};
use crate::utils::storage::StorageBackend;

pub struct AppContext {
    pub alerts: Rc<RefCell<AlertsStore>>,
    pub notifications: Rc<RefCell<NotificationsStore>>,
    pub saved_routes: Rc<RefCell<SavedRoutesStore>>,
    pub travel_history: Rc<RefCell<TravelHistoryStore>>,
    pub routes: Rc<RefCell<RouteStore>>,
    pub user: Rc<RefCell<UserStore>>,
}

impl AppContext {
    /// Construye todos los stores sobre el mismo backend de almacenamiento.
    /// Cada colección se carga una única vez; no hay re-sincronización entre
    /// pestañas.
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        Self {
            alerts: Rc::new(RefCell::new(AlertsStore::new(storage.clone()))),
            notifications: Rc::new(RefCell::new(NotificationsStore::new(storage.clone()))),
            saved_routes: Rc::new(RefCell::new(SavedRoutesStore::new(storage.clone()))),
            travel_history: Rc::new(RefCell::new(TravelHistoryStore::new(storage.clone()))),
            routes: Rc::new(RefCell::new(RouteStore::new())),
            user: Rc::new(RefCell::new(UserStore::new(storage))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripPayload;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn test_context_stores_share_storage() {
        let storage = MemoryStorage::new();
        let ctx = AppContext::new(Rc::new(storage.clone()));

        ctx.saved_routes.borrow_mut().add_route("A", "B");
        ctx.travel_history.borrow_mut().add_trip(TripPayload {
            origin: "A".to_string(),
            destination: "B".to_string(),
            ..Default::default()
        });

        // Un segundo contexto sobre el mismo storage ve lo persistido
        let ctx2 = AppContext::new(Rc::new(storage));
        assert_eq!(ctx2.saved_routes.borrow().all_routes().len(), 1);
        assert_eq!(ctx2.travel_history.borrow().all_trips().len(), 3);
    }
}
