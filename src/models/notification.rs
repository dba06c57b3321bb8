use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tipo de notificación para el usuario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Prioridad de una notificación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Notificación dirigida al usuario.
///
/// `message_key` es una clave opaca del catálogo de mensajes externo y
/// `message_params` los valores a interpolar; el store no los interpreta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message_key: String,
    #[serde(default)]
    pub message_params: HashMap<String, String>,
    pub priority: Priority,
    pub icon: String,
    pub read: bool,
    pub timestamp: DateTime<Utc>,
}

/// Campos opcionales para crear una notificación.
#[derive(Debug, Clone, Default)]
pub struct NotificationPayload {
    pub kind: Option<NotificationKind>,
    pub message_key: Option<String>,
    pub message_params: Option<HashMap<String, String>>,
    pub priority: Option<Priority>,
    pub icon: Option<String>,
}
