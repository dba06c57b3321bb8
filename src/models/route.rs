use serde::{Deserialize, Serialize};

/// Recurso de ruta tal como lo expone el endpoint REST externo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// Entidad de ruta en memoria.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub estimated_time: Option<String>,
    pub frequency: Option<String>,
}
