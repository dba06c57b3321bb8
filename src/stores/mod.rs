pub mod collection;

pub mod alerts_store;
pub mod notifications_store;
pub mod route_store;
pub mod saved_routes_store;
pub mod travel_history_store;
pub mod user_store;

pub use alerts_store::AlertsStore;
pub use collection::{CollectionRecord, PersistedCollection, RemoveOutcome};
pub use notifications_store::NotificationsStore;
pub use route_store::RouteStore;
pub use saved_routes_store::SavedRoutesStore;
pub use travel_history_store::TravelHistoryStore;
pub use user_store::UserStore;
