// ============================================================================
// TRAVEL HISTORY STORE - Historial de viajes (con registros de demostración)
// ============================================================================

use std::rc::Rc;

use chrono::{NaiveDate, Utc};

use crate::models::{demo_trips, TripPayload, TripRecord};
use crate::stores::collection::{CollectionRecord, PersistedCollection, RemoveOutcome};
use crate::utils::constants::TRAVEL_HISTORY_KEY;
use crate::utils::storage::StorageBackend;

impl CollectionRecord for TripRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn protected(&self) -> bool {
        self.is_demo()
    }
}

pub struct TravelHistoryStore {
    trips: PersistedCollection<TripRecord>,
}

impl TravelHistoryStore {
    /// Carga el historial y siembra los viajes de demostración si aún no
    /// están. La siembra es idempotente: recargar no los duplica.
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        let mut trips = PersistedCollection::load(storage, TRAVEL_HISTORY_KEY);
        for demo in demo_trips() {
            if trips.find(&demo.id).is_none() {
                // Detrás de los viajes del usuario
                trips.push_back(demo);
            }
        }
        Self { trips }
    }

    pub fn add_trip(&mut self, payload: TripPayload) {
        let id = self.trips.allocate_id();
        self.trips.push_front(TripRecord {
            id,
            origin: payload.origin,
            destination: payload.destination,
            steps: payload.steps,
            timestamp: Utc::now(),
            duration: payload.duration,
            distance: payload.distance,
        });
    }

    /// Elimina un viaje. Los viajes de demostración están protegidos: la
    /// negativa se muestra al usuario y no es un error.
    pub fn remove_trip(&mut self, trip_id: &str) -> RemoveOutcome {
        let outcome = self.trips.remove(trip_id);
        if outcome == RemoveOutcome::Protected {
            log::warn!("⚠️ No puedes eliminar las rutas de ejemplo");
        }
        outcome
    }

    /// Vacía el historial del usuario; los viajes de demostración quedan.
    pub fn clear_history(&mut self) {
        self.trips.clear_unprotected();
    }

    /// Vacía todo, demostración incluida.
    pub fn clear_all_including_demo(&mut self) {
        self.trips.clear();
    }

    pub fn all_trips(&self) -> &[TripRecord] {
        self.trips.all()
    }

    pub fn recent_trips(&self) -> &[TripRecord] {
        self.trips.recent(10)
    }

    pub fn trips_by_date(&self, date: NaiveDate) -> Vec<&TripRecord> {
        self.trips
            .all()
            .iter()
            .filter(|t| t.timestamp.date_naive() == date)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripStep;
    use crate::utils::storage::MemoryStorage;

    fn store(storage: &MemoryStorage) -> TravelHistoryStore {
        TravelHistoryStore::new(Rc::new(storage.clone()))
    }

    fn payload(origin: &str, destination: &str) -> TripPayload {
        TripPayload {
            origin: origin.to_string(),
            destination: destination.to_string(),
            steps: vec![TripStep::walk("On foot"), TripStep::bus("Santa María", "OM22")],
            duration: Some("20 min".to_string()),
            distance: Some("5 km".to_string()),
        }
    }

    #[test]
    fn test_demo_trips_seeded_once() {
        let storage = MemoryStorage::new();
        let history = store(&storage);
        assert_eq!(history.all_trips().len(), 2);

        // Reconstruir sobre el mismo storage no duplica la siembra
        let history = store(&storage);
        assert_eq!(history.all_trips().len(), 2);
        assert!(history.all_trips().iter().all(|t| t.is_demo()));
    }

    #[test]
    fn test_user_trips_come_before_demo() {
        let storage = MemoryStorage::new();
        let mut history = store(&storage);
        history.add_trip(payload("Casa", "Trabajo"));

        assert_eq!(history.all_trips().len(), 3);
        assert_eq!(history.all_trips()[0].origin, "Casa");
        assert_eq!(history.all_trips()[1].id, "demo-1");
    }

    #[test]
    fn test_demo_trip_cannot_be_removed() {
        let storage = MemoryStorage::new();
        let mut history = store(&storage);
        assert_eq!(history.remove_trip("demo-1"), RemoveOutcome::Protected);
        assert_eq!(history.all_trips().len(), 2);
    }

    #[test]
    fn test_remove_user_trip_removes_exactly_that_one() {
        let storage = MemoryStorage::new();
        let mut history = store(&storage);
        history.add_trip(payload("Casa", "Trabajo"));
        history.add_trip(payload("Trabajo", "Casa"));
        let id = history.all_trips()[1].id.clone();

        assert_eq!(history.remove_trip(&id), RemoveOutcome::Removed);
        assert_eq!(history.all_trips().len(), 3);
        assert!(history.all_trips().iter().all(|t| t.id != id));
    }

    #[test]
    fn test_clear_history_preserves_demo() {
        let storage = MemoryStorage::new();
        let mut history = store(&storage);
        history.add_trip(payload("Casa", "Trabajo"));

        history.clear_history();
        assert_eq!(history.all_trips().len(), 2);
        assert!(history.all_trips().iter().all(|t| t.is_demo()));

        history.clear_all_including_demo();
        assert!(history.all_trips().is_empty());
    }

    #[test]
    fn test_trips_by_date_matches_calendar_day() {
        let storage = MemoryStorage::new();
        let mut history = store(&storage);
        history.add_trip(payload("Casa", "Trabajo"));

        let today = Utc::now().date_naive();
        assert_eq!(history.trips_by_date(today).len(), 1);

        let demo_day = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        assert_eq!(history.trips_by_date(demo_day).len(), 1);
        assert_eq!(history.trips_by_date(demo_day)[0].id, "demo-1");
    }

    #[test]
    fn test_history_survives_reload_in_order() {
        let storage = MemoryStorage::new();
        let mut history = store(&storage);
        history.add_trip(payload("A", "B"));
        history.add_trip(payload("B", "C"));

        let reloaded = store(&storage);
        assert_eq!(reloaded.all_trips().len(), 4);
        assert_eq!(reloaded.all_trips()[0].origin, "B");
        assert_eq!(reloaded.all_trips()[1].origin, "A");
    }
}
