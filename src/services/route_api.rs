// ============================================================================
// ROUTE API - Solo comunicación HTTP con el recurso de rutas (stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// ============================================================================

#![cfg(target_arch = "wasm32")]

use gloo_net::http::Request;

use crate::models::RouteResource;
use crate::utils::constants::{BACKEND_URL, ROUTES_ENDPOINT_PATH};

/// Cliente del recurso REST de rutas.
#[derive(Clone)]
pub struct SearchRouteApi {
    base_url: String,
}

impl SearchRouteApi {
    pub fn new() -> Self {
        Self { base_url: BACKEND_URL.to_string() }
    }

    /// Obtiene rutas. Si se pasa `search_text`, filtra por nombre usando
    /// name_like.
    pub async fn get_routes(&self, search_text: &str) -> Result<Vec<RouteResource>, String> {
        let url = if search_text.is_empty() {
            format!("{}/{}", self.base_url, ROUTES_ENDPOINT_PATH)
        } else {
            format!(
                "{}/{}?name_like={}",
                self.base_url, ROUTES_ENDPOINT_PATH, search_text
            )
        };

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Vec<RouteResource>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn create_route(&self, resource: &RouteResource) -> Result<RouteResource, String> {
        let url = format!("{}/{}", self.base_url, ROUTES_ENDPOINT_PATH);
        let response = Request::post(&url)
            .json(resource)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<RouteResource>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    pub async fn update_route(&self, resource: &RouteResource) -> Result<RouteResource, String> {
        let url = format!("{}/{}/{}", self.base_url, ROUTES_ENDPOINT_PATH, resource.id);
        let response = Request::put(&url)
            .json(resource)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<RouteResource>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    pub async fn delete_route(&self, route_id: &str) -> Result<(), String> {
        let url = format!("{}/{}/{}", self.base_url, ROUTES_ENDPOINT_PATH, route_id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }
}

impl Default for SearchRouteApi {
    fn default() -> Self {
        Self::new()
    }
}
