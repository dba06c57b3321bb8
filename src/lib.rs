// ============================================================================
// BUSTRACK FRONTEND - Capa de estado del cliente web (RUST PURO)
// ============================================================================
// - Models: registros planos compartidos con el almacenamiento y el API
// - Stores: colecciones persistidas + sesión (estado con Rc<RefCell>)
// - Services: SOLO comunicación con el recurso REST de rutas
// - App: raíz de composición; los stores se inyectan, no son globales
// ============================================================================

pub mod app;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod wasm_entry {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::app::AppContext;
    use crate::services::RouteService;
    use crate::utils::storage::LocalStorage;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Panic hook para mejor debugging en consola
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
        log::info!("🚌 BusTrack - capa de estado inicializada");

        let storage = LocalStorage::new()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let ctx = AppContext::new(Rc::new(storage));

        // Restaurar la sesión persistida (decide la vista inicial)
        let restored = ctx.user.borrow_mut().restore_session();
        if restored {
            log::info!("📂 Sesión restaurada");
        }

        // Carga inicial de rutas, fire-and-forget
        let route_service = RouteService::new(ctx.routes.clone());
        route_service.fetch_routes("");

        Ok(())
    }
}
