// ============================================================================
// ALERTS STORE - Alertas del sistema (desvíos, tráfico, retrasos)
// ============================================================================

use std::rc::Rc;

use chrono::Utc;

use crate::models::{
    AlertKind, AlertPayload, AlertRecord, AlertStatus, IncidentReport, Severity,
};
use crate::stores::collection::{CollectionRecord, PersistedCollection, RemoveOutcome};
use crate::utils::constants::{ALERTS_ENABLED_KEY, ALERTS_KEY};
use crate::utils::storage::StorageBackend;

impl CollectionRecord for AlertRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct AlertsStore {
    items: PersistedCollection<AlertRecord>,
    enabled: bool,
    storage: Rc<dyn StorageBackend>,
}

impl AlertsStore {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        // Ausente significa habilitado; solo el valor "false" desactiva
        let enabled = storage.get_item(ALERTS_ENABLED_KEY).as_deref() != Some("false");
        Self {
            items: PersistedCollection::load(storage.clone(), ALERTS_KEY),
            enabled,
            storage,
        }
    }

    /// Crea una alerta combinando el payload con los valores por defecto.
    pub fn add_alert(&mut self, payload: AlertPayload) {
        let id = self.items.allocate_id();
        let alert = AlertRecord {
            id,
            title: payload.title.unwrap_or_else(|| "Alerta del Sistema".to_string()),
            bus_id: payload.bus_id.unwrap_or_else(|| "N/A".to_string()),
            route: payload.route.unwrap_or_else(|| "Sin Ruta".to_string()),
            kind: payload.kind.unwrap_or(AlertKind::Info),
            severity: payload.severity.unwrap_or(Severity::Medium),
            status: AlertStatus::Pending,
            details: payload.details,
            timestamp: Utc::now(),
        };
        self.items.push_front(alert);
    }

    pub fn report_route_detour(&mut self, bus_id: &str, route_name: &str) {
        self.add_alert(AlertPayload {
            title: Some("Desvío de Ruta Detectado".to_string()),
            bus_id: Some(bus_id.to_string()),
            route: Some(route_name.to_string()),
            kind: Some(AlertKind::Detour),
            severity: Some(Severity::High),
            ..Default::default()
        });
    }

    pub fn report_heavy_traffic(&mut self, bus_id: &str, route_name: &str) {
        self.add_alert(AlertPayload {
            title: Some("Tráfico Intenso".to_string()),
            bus_id: Some(bus_id.to_string()),
            route: Some(route_name.to_string()),
            kind: Some(AlertKind::Traffic),
            severity: Some(Severity::Medium),
            ..Default::default()
        });
    }

    pub fn report_minor_delay(&mut self, bus_id: &str, route_name: &str) {
        self.add_alert(AlertPayload {
            title: Some("Retraso Menor".to_string()),
            bus_id: Some(bus_id.to_string()),
            route: Some(route_name.to_string()),
            kind: Some(AlertKind::Delay),
            severity: Some(Severity::Low),
            ..Default::default()
        });
    }

    /// Reporta un retraso mayor. Solo genera alerta cuando supera los 10
    /// minutos.
    pub fn report_major_delay(
        &mut self,
        bus_id: &str,
        route_name: &str,
        delay_minutes: u32,
        stop_name: &str,
    ) {
        if delay_minutes <= 10 {
            return;
        }
        self.add_alert(AlertPayload {
            title: Some(format!("Retraso de {} minutos", delay_minutes)),
            bus_id: Some(bus_id.to_string()),
            route: Some(route_name.to_string()),
            kind: Some(AlertKind::Delay),
            severity: Some(Severity::High),
            details: Some(format!(
                "Bus {} tiene un retraso de {} minutos en {}",
                bus_id, delay_minutes, stop_name
            )),
        });
    }

    /// Activa o desactiva la recepción de alertas; el flag se persiste como
    /// el escalar "true"/"false".
    pub fn toggle_alerts(&mut self, enabled: bool) {
        self.enabled = enabled;
        let value = if enabled { "true" } else { "false" };
        if let Err(e) = self.storage.set_item(ALERTS_ENABLED_KEY, value) {
            log::error!("❌ Error persistiendo '{}': {}", ALERTS_ENABLED_KEY, e);
        }
        log::info!(
            "{}",
            if enabled { "✅ Alertas activadas" } else { "❌ Alertas desactivadas" }
        );
    }

    pub fn alerts_enabled(&self) -> bool {
        self.enabled
    }

    /// Reporta un incidente de tráfico solo si las alertas están habilitadas.
    /// Devuelve si el incidente llegó a reportarse.
    pub fn report_traffic_incident(&mut self, incident: IncidentReport) -> bool {
        if !self.enabled {
            log::info!("❌ Alertas desactivadas, no se reportó el incidente");
            return false;
        }

        self.add_alert(AlertPayload {
            title: Some("Incidente de Tráfico".to_string()),
            bus_id: Some(incident.bus_id),
            route: Some(incident.route),
            kind: Some(AlertKind::Traffic),
            severity: Some(incident.severity.unwrap_or(Severity::High)),
            details: Some(
                incident
                    .description
                    .unwrap_or_else(|| "Incidente reportado".to_string()),
            ),
        });
        true
    }

    /// Marca una alerta como resuelta. La transición es pending → resolved
    /// una sola vez; sobre una alerta ya resuelta (o un id ausente) es un
    /// no-op silencioso.
    pub fn mark_as_resolved(&mut self, alert_id: &str) {
        let pending = self
            .items
            .find(alert_id)
            .map(|a| a.status == AlertStatus::Pending)
            .unwrap_or(false);
        if !pending {
            return;
        }
        self.items
            .find_and_mutate(alert_id, |alert| alert.status = AlertStatus::Resolved);
    }

    pub fn remove_alert(&mut self, alert_id: &str) -> RemoveOutcome {
        self.items.remove(alert_id)
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn all_alerts(&self) -> &[AlertRecord] {
        self.items.all()
    }

    pub fn pending_alerts(&self) -> Vec<&AlertRecord> {
        self.items
            .all()
            .iter()
            .filter(|a| a.status == AlertStatus::Pending)
            .collect()
    }

    pub fn recent_alerts(&self) -> &[AlertRecord] {
        self.items.recent(10)
    }
}
