use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ruta guardada por el usuario para acceso rápido.
///
/// El par (origin, destination) es único dentro de la colección; la unicidad
/// la verifica el store antes de insertar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRouteRecord {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub saved_at: DateTime<Utc>,
}
