// ============================================================================
// NOTIFICATIONS STORE - Notificaciones al usuario
// ============================================================================

use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;

use crate::models::{NotificationKind, NotificationPayload, NotificationRecord, Priority};
use crate::stores::collection::{CollectionRecord, PersistedCollection, RemoveOutcome};
use crate::utils::constants::{
    NOTIFICATIONS_ENABLED_KEY, NOTIFICATIONS_KEY, NOTIFICATION_STOPS_KEY,
};
use crate::utils::storage::{load_json, save_json, StorageBackend};

impl CollectionRecord for NotificationRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct NotificationsStore {
    items: PersistedCollection<NotificationRecord>,
    enabled: bool,
    /// Paraderos para los que el usuario pidió aviso de llegada.
    watched_stops: Vec<String>,
    storage: Rc<dyn StorageBackend>,
}

impl NotificationsStore {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        let enabled = storage.get_item(NOTIFICATIONS_ENABLED_KEY).as_deref() != Some("false");
        let watched_stops =
            load_json(storage.as_ref(), NOTIFICATION_STOPS_KEY).unwrap_or_default();
        Self {
            items: PersistedCollection::load(storage.clone(), NOTIFICATIONS_KEY),
            enabled,
            watched_stops,
            storage,
        }
    }

    /// Crea una notificación combinando el payload con los valores por
    /// defecto y la inserta al frente.
    pub fn add_notification(&mut self, payload: NotificationPayload) {
        let id = self.items.allocate_id();
        let notification = NotificationRecord {
            id,
            kind: payload.kind.unwrap_or(NotificationKind::Info),
            message_key: payload
                .message_key
                .unwrap_or_else(|| "notifications.messages.default".to_string()),
            message_params: payload.message_params.unwrap_or_default(),
            priority: payload.priority.unwrap_or(Priority::Medium),
            icon: payload.icon.unwrap_or_else(|| "📍".to_string()),
            read: false,
            timestamp: Utc::now(),
        };
        self.items.push_front(notification);
    }

    pub fn notify_route_saved(&mut self, route_name: &str) {
        self.add_notification(NotificationPayload {
            message_key: Some("notifications.messages.routeSaved".to_string()),
            message_params: Some(params(&[("routeName", route_name)])),
            icon: Some("⭐".to_string()),
            priority: Some(Priority::Medium),
            ..Default::default()
        });
    }

    pub fn notify_route_removed(&mut self, route_name: &str) {
        self.add_notification(NotificationPayload {
            message_key: Some("notifications.messages.routeRemoved".to_string()),
            message_params: Some(params(&[("routeName", route_name)])),
            icon: Some("🗑️".to_string()),
            priority: Some(Priority::Low),
            ..Default::default()
        });
    }

    pub fn notify_bus_arriving(&mut self, bus_number: &str, minutes: u32) {
        self.add_notification(NotificationPayload {
            message_key: Some("notifications.messages.busArriving".to_string()),
            message_params: Some(params(&[
                ("busNumber", bus_number),
                ("minutes", &minutes.to_string()),
            ])),
            icon: Some("🚌".to_string()),
            priority: Some(Priority::High),
            ..Default::default()
        });
    }

    pub fn notify_favorite_added(&mut self) {
        self.add_notification(NotificationPayload {
            message_key: Some("notifications.messages.favoriteAdded".to_string()),
            icon: Some("⭐".to_string()),
            priority: Some(Priority::Medium),
            ..Default::default()
        });
    }

    pub fn notify_favorite_removed(&mut self) {
        self.add_notification(NotificationPayload {
            message_key: Some("notifications.messages.favoriteRemoved".to_string()),
            icon: Some("🗑️".to_string()),
            priority: Some(Priority::Low),
            ..Default::default()
        });
    }

    /// Avisa de un retraso de bus. Los retrasos de 10 minutos o menos no
    /// generan notificación; por encima del umbral se agrega exactamente una
    /// con prioridad alta.
    pub fn notify_delay(&mut self, bus_number: &str, route_name: &str, delay_minutes: u32) {
        if delay_minutes <= 10 {
            return;
        }
        self.add_notification(NotificationPayload {
            kind: Some(NotificationKind::Warning),
            message_key: Some("notifications.messages.busDelayed".to_string()),
            message_params: Some(params(&[
                ("busNumber", bus_number),
                ("routeName", route_name),
                ("minutes", &delay_minutes.to_string()),
            ])),
            icon: Some("⏰".to_string()),
            priority: Some(Priority::High),
        });
    }

    /// Marca como leída (false → true). Id ausente: no-op silencioso.
    pub fn mark_as_read(&mut self, notification_id: &str) {
        self.items
            .find_and_mutate(notification_id, |n| n.read = true);
    }

    pub fn remove_notification(&mut self, notification_id: &str) -> RemoveOutcome {
        self.items.remove(notification_id)
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn all_notifications(&self) -> &[NotificationRecord] {
        self.items.all()
    }

    pub fn recent_notifications(&self) -> &[NotificationRecord] {
        self.items.recent(10)
    }

    pub fn unread_count(&self) -> usize {
        self.items.all().iter().filter(|n| !n.read).count()
    }

    pub fn toggle_notifications(&mut self, enabled: bool) {
        self.enabled = enabled;
        let value = if enabled { "true" } else { "false" };
        if let Err(e) = self.storage.set_item(NOTIFICATIONS_ENABLED_KEY, value) {
            log::error!("❌ Error persistiendo '{}': {}", NOTIFICATIONS_ENABLED_KEY, e);
        }
    }

    pub fn notifications_enabled(&self) -> bool {
        self.enabled
    }

    /// Suscribe un paradero para recibir avisos de llegada.
    pub fn watch_stop(&mut self, stop_name: &str) {
        if self.watched_stops.iter().any(|s| s == stop_name) {
            return;
        }
        self.watched_stops.push(stop_name.to_string());
        self.persist_stops();
    }

    pub fn unwatch_stop(&mut self, stop_name: &str) {
        self.watched_stops.retain(|s| s != stop_name);
        self.persist_stops();
    }

    pub fn watched_stops(&self) -> &[String] {
        &self.watched_stops
    }

    fn persist_stops(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), NOTIFICATION_STOPS_KEY, &self.watched_stops)
        {
            log::error!("❌ Error persistiendo '{}': {}", NOTIFICATION_STOPS_KEY, e);
        }
    }
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn store(storage: &MemoryStorage) -> NotificationsStore {
        NotificationsStore::new(Rc::new(storage.clone()))
    }

    #[test]
    fn test_add_notification_applies_defaults() {
        let storage = MemoryStorage::new();
        let mut notifications = store(&storage);
        notifications.add_notification(NotificationPayload::default());

        let n = &notifications.all_notifications()[0];
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.message_key, "notifications.messages.default");
        assert_eq!(n.priority, Priority::Medium);
        assert_eq!(n.icon, "📍");
        assert!(!n.read);
    }

    #[test]
    fn test_notify_delay_below_threshold_produces_nothing() {
        let storage = MemoryStorage::new();
        let mut notifications = store(&storage);
        notifications.notify_delay("OM22", "Santa María", 5);
        assert!(notifications.all_notifications().is_empty());
    }

    #[test]
    fn test_notify_delay_above_threshold_is_high_priority() {
        let storage = MemoryStorage::new();
        let mut notifications = store(&storage);
        notifications.notify_delay("OM22", "Santa María", 15);

        assert_eq!(notifications.all_notifications().len(), 1);
        let n = &notifications.all_notifications()[0];
        assert_eq!(n.priority, Priority::High);
        assert_eq!(n.message_params.get("minutes").map(String::as_str), Some("15"));
    }

    #[test]
    fn test_mark_as_read_and_unread_count() {
        let storage = MemoryStorage::new();
        let mut notifications = store(&storage);
        notifications.notify_favorite_added();
        notifications.notify_favorite_removed();
        assert_eq!(notifications.unread_count(), 2);

        let id = notifications.all_notifications()[0].id.clone();
        notifications.mark_as_read(&id);
        assert_eq!(notifications.unread_count(), 1);

        // Id ausente: no-op
        notifications.mark_as_read("999");
        assert_eq!(notifications.unread_count(), 1);
    }

    #[test]
    fn test_recent_caps_at_ten() {
        let storage = MemoryStorage::new();
        let mut notifications = store(&storage);
        for _ in 0..12 {
            notifications.notify_favorite_added();
        }
        assert_eq!(notifications.recent_notifications().len(), 10);
        assert_eq!(notifications.all_notifications().len(), 12);
    }

    #[test]
    fn test_watched_stops_persist_and_dedupe() {
        let storage = MemoryStorage::new();
        let mut notifications = store(&storage);
        notifications.watch_stop("Cádiz");
        notifications.watch_stop("Cádiz");
        notifications.watch_stop("La Encalada");

        let reloaded = store(&storage);
        assert_eq!(reloaded.watched_stops(), ["Cádiz", "La Encalada"]);

        let mut reloaded = reloaded;
        reloaded.unwatch_stop("Cádiz");
        assert_eq!(reloaded.watched_stops(), ["La Encalada"]);
    }

    #[test]
    fn test_reload_preserves_newest_first() {
        let storage = MemoryStorage::new();
        let mut notifications = store(&storage);
        notifications.notify_route_saved("Ruta A");
        notifications.notify_route_saved("Ruta B");

        let reloaded = store(&storage);
        assert_eq!(reloaded.all_notifications().len(), 2);
        assert_eq!(
            reloaded.all_notifications()[0]
                .message_params
                .get("routeName")
                .map(String::as_str),
            Some("Ruta B")
        );
    }
}
