// ============================================================================
// CONSTANTES - Claves de almacenamiento y configuración
// ============================================================================

/// URL base del recurso de rutas
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Producción: via BUSTRACK_API_URL en .env
pub const BACKEND_URL: &str = match option_env!("BUSTRACK_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Path del recurso de rutas dentro del backend
pub const ROUTES_ENDPOINT_PATH: &str = "routes";

// Claves de localStorage (espacio de nombres compartido, sin versionado)
pub const ALERTS_KEY: &str = "alerts";
pub const ALERTS_ENABLED_KEY: &str = "alertsEnabled";
pub const NOTIFICATIONS_KEY: &str = "notifications";
pub const NOTIFICATIONS_ENABLED_KEY: &str = "notificationsEnabled";
pub const NOTIFICATION_STOPS_KEY: &str = "notificationStops";
pub const SAVED_ROUTES_KEY: &str = "savedRoutes";
pub const TRAVEL_HISTORY_KEY: &str = "travelHistory";
pub const CURRENT_USER_KEY: &str = "bustrack_current_user";
pub const PASSENGER_USERS_KEY: &str = "bustrack_passenger_users";
pub const COMPANY_USERS_KEY: &str = "bustrack_company_users";
