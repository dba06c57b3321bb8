use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tipo de alerta reportada sobre un bus o ruta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Detour,
    Traffic,
    Delay,
    Info,
    Incident,
}

/// Severidad de una alerta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Estado de una alerta. Solo transiciona pending → resolved, nunca al revés.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Pending,
    Resolved,
}

/// Alerta del sistema (desvíos, tráfico, retrasos, incidentes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub id: String,
    pub title: String,
    pub bus_id: String,
    pub route: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub status: AlertStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Campos opcionales para crear una alerta; lo que falte toma el valor por
/// defecto del store.
#[derive(Debug, Clone, Default)]
pub struct AlertPayload {
    pub title: Option<String>,
    pub bus_id: Option<String>,
    pub route: Option<String>,
    pub kind: Option<AlertKind>,
    pub severity: Option<Severity>,
    pub details: Option<String>,
}

/// Datos de un incidente de tráfico reportado por el usuario.
#[derive(Debug, Clone)]
pub struct IncidentReport {
    pub bus_id: String,
    pub route: String,
    pub severity: Option<Severity>,
    pub description: Option<String>,
}
