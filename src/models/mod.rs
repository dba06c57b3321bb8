pub mod alert;
pub mod notification;
pub mod route;
pub mod saved_route;
pub mod trip;
pub mod user;

pub use alert::{AlertKind, AlertPayload, AlertRecord, AlertStatus, IncidentReport, Severity};
pub use notification::{NotificationKind, NotificationPayload, NotificationRecord, Priority};
pub use route::{Route, RouteResource};
pub use saved_route::SavedRouteRecord;
pub use trip::{demo_trips, StepKind, TripPayload, TripRecord, TripStep, DEMO_ID_PREFIX};
pub use user::{
    Company, CompanyUpdate, NewCompany, Passenger, PassengerUpdate, Principal, StoredSession,
    UserType,
};
