// ============================================================================
// ROUTE ASSEMBLER - Mapeo recurso REST → entidad de dominio
// ============================================================================

use crate::models::{Route, RouteResource};

pub struct RouteAssembler;

impl RouteAssembler {
    /// Convierte un recurso plano del endpoint en una entidad `Route`.
    pub fn to_entity(resource: RouteResource) -> Route {
        Route {
            id: resource.id,
            name: resource.name,
            estimated_time: resource.estimated_time,
            frequency: resource.frequency,
        }
    }

    /// Convierte el array de recursos de la respuesta en entidades.
    pub fn to_entities(resources: Vec<RouteResource>) -> Vec<Route> {
        resources.into_iter().map(Self::to_entity).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_entity_preserves_fields() {
        let route = RouteAssembler::to_entity(RouteResource {
            id: "7".to_string(),
            name: "Santa María".to_string(),
            estimated_time: Some("40 min".to_string()),
            frequency: None,
        });
        assert_eq!(route.id, "7");
        assert_eq!(route.name, "Santa María");
        assert_eq!(route.estimated_time.as_deref(), Some("40 min"));
        assert!(route.frequency.is_none());
    }

    #[test]
    fn test_to_entities_maps_all() {
        let resources: Vec<RouteResource> = serde_json::from_str(
            r#"[{"id":"1","name":"A"},{"id":"2","name":"B","estimatedTime":"15 min"}]"#,
        )
        .unwrap();
        let routes = RouteAssembler::to_entities(resources);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[1].estimated_time.as_deref(), Some("15 min"));
    }
}
