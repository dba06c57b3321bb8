use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Prefijo del espacio de ids reservado para viajes de demostración.
pub const DEMO_ID_PREFIX: &str = "demo-";

/// Tipo de tramo dentro de un viaje.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Walk,
    Bus,
    Stop,
}

/// Tramo de un viaje: caminata, paradero o tramo en bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStep {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_number: Option<String>,
}

impl TripStep {
    pub fn walk(name: &str) -> Self {
        Self { kind: StepKind::Walk, name: name.to_string(), bus_number: None }
    }

    pub fn stop(name: &str) -> Self {
        Self { kind: StepKind::Stop, name: name.to_string(), bus_number: None }
    }

    pub fn bus(name: &str, bus_number: &str) -> Self {
        Self {
            kind: StepKind::Bus,
            name: name.to_string(),
            bus_number: Some(bus_number.to_string()),
        }
    }
}

/// Viaje del historial. `duration` y `distance` son textos de presentación
/// opacos ("45 min", "12.5 km").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: String,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub steps: Vec<TripStep>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
}

impl TripRecord {
    /// Los viajes de demostración no se pueden eliminar individualmente.
    pub fn is_demo(&self) -> bool {
        self.id.starts_with(DEMO_ID_PREFIX)
    }
}

/// Datos para registrar un viaje nuevo.
#[derive(Debug, Clone, Default)]
pub struct TripPayload {
    pub origin: String,
    pub destination: String,
    pub steps: Vec<TripStep>,
    pub duration: Option<String>,
    pub distance: Option<String>,
}

/// Viajes de demostración que se siembran con la aplicación.
pub fn demo_trips() -> Vec<TripRecord> {
    vec![
        TripRecord {
            id: "demo-1".to_string(),
            origin: "UPC - San Miguel Campus".to_string(),
            destination: "UPC - San Isidro Campus".to_string(),
            timestamp: Utc
                .with_ymd_and_hms(2024, 11, 20, 14, 30, 0)
                .single()
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            steps: vec![
                TripStep::walk("On foot"),
                TripStep::stop("Rafael Escardó Stop"),
                TripStep::bus("Santa María", "OM22"),
                TripStep::stop("Cádiz"),
                TripStep::walk("On foot"),
            ],
            duration: Some("45 min".to_string()),
            distance: Some("12.5 km".to_string()),
        },
        TripRecord {
            id: "demo-2".to_string(),
            origin: "UPC - San Isidro Campus".to_string(),
            destination: "UPC - Monterrico Campus".to_string(),
            timestamp: Utc
                .with_ymd_and_hms(2024, 11, 19, 9, 15, 0)
                .single()
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            steps: vec![
                TripStep::walk("On foot"),
                TripStep::stop("Cádiz"),
                TripStep::bus("San Ignacio", "1272"),
                TripStep::stop("La Encalada"),
                TripStep::walk("On foot"),
            ],
            duration: Some("38 min".to_string()),
            distance: Some("10.2 km".to_string()),
        },
    ]
}
