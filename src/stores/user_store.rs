// ============================================================================
// USER STORE - Sesión y registros de pasajeros/empresas
// ============================================================================
// Mantiene el principal autenticado (pasajero o empresa) y los dos registros
// de cuentas conocidas usados para el lookup de credenciales. La sesión se
// persiste al iniciar y se restaura al arrancar la aplicación.
//
// Las contraseñas se guardan y comparan en texto plano; el login depende de
// la igualdad exacta.
// ============================================================================

use std::rc::Rc;

use chrono::Utc;

use crate::error::AuthError;
use crate::models::{
    Company, CompanyUpdate, NewCompany, Passenger, PassengerUpdate, Principal, StoredSession,
};
use crate::utils::constants::{COMPANY_USERS_KEY, CURRENT_USER_KEY, PASSENGER_USERS_KEY};
use crate::utils::storage::{load_json, save_json, StorageBackend};

pub struct UserStore {
    session: Option<Principal>,
    registered_users: Vec<Passenger>,
    registered_companies: Vec<Company>,
    storage: Rc<dyn StorageBackend>,
    last_company_id: i64,
}

impl UserStore {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        let mut store = Self {
            session: None,
            registered_users: Vec::new(),
            registered_companies: Vec::new(),
            storage,
            last_company_id: 0,
        };
        store.load_from_storage();
        store
    }

    // ------------------------------------------------------------------
    // Autenticación
    // ------------------------------------------------------------------

    /// Login de pasajero por username o email más contraseña exacta.
    /// Gana la primera coincidencia del registro.
    pub fn login(&mut self, username_or_email: &str, password: &str) -> Result<(), AuthError> {
        let found = self.registered_users.iter().find(|u| {
            (u.username == username_or_email || u.email == username_or_email)
                && u.password == password
        });

        match found {
            Some(user) => {
                log::info!("✅ Login de pasajero exitoso: {}", user.username);
                self.session = Some(Principal::Passenger(user.clone()));
                self.persist_session();
                Ok(())
            }
            None => {
                log::info!("❌ Login fallido: usuario no encontrado o contraseña incorrecta");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Login de empresa por par exacto (email, contraseña).
    pub fn login_company(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let found = self
            .registered_companies
            .iter()
            .find(|c| c.email == email && c.password == password);

        match found {
            Some(company) => {
                log::info!("✅ Login de empresa exitoso: {}", company.company_name);
                self.session = Some(Principal::Company(company.clone()));
                self.persist_session();
                Ok(())
            }
            None => Err(AuthError::InvalidCredentials),
        }
    }

    /// Registro de pasajero con semántica de upsert: si ya existe una cuenta
    /// con el mismo username o email se reemplaza en su posición, si no se
    /// agrega al final. Siempre persiste el registro completo.
    pub fn register(&mut self, user: Passenger) {
        let existing = self
            .registered_users
            .iter()
            .position(|u| u.username == user.username || u.email == user.email);

        match existing {
            Some(index) => {
                log::info!("⚠️ Usuario actualizado: {}", user.username);
                self.registered_users[index] = user;
            }
            None => {
                log::info!("✅ Usuario registrado: {}", user.username);
                self.registered_users.push(user);
            }
        }
        self.persist_users();
    }

    /// Registro de empresa. A diferencia del pasajero no hay upsert: un email
    /// ya registrado se rechaza. Asigna id y fecha de creación.
    pub fn register_company(&mut self, data: NewCompany) -> Result<Company, AuthError> {
        if self.registered_companies.iter().any(|c| c.email == data.email) {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let company = Company {
            id: self.allocate_company_id(),
            company_name: data.company_name,
            ruc: data.ruc,
            email: data.email,
            address: data.address,
            password: data.password,
            fleet_size: data.fleet_size,
            created_at: Utc::now(),
        };

        log::info!("✅ Empresa registrada: {}", company.company_name);
        self.registered_companies.push(company.clone());
        self.persist_companies();
        Ok(company)
    }

    /// Cierra la sesión: estado en memoria a anónimo y slot de sesión fuera
    /// del storage. Los registros no se tocan.
    pub fn logout(&mut self) {
        if let Some(principal) = &self.session {
            log::info!("👋 Cerrando sesión de: {}", principal.display_name());
        }
        self.session = None;
        self.storage.remove_item(CURRENT_USER_KEY);
    }

    // ------------------------------------------------------------------
    // Persistencia y restauración
    // ------------------------------------------------------------------

    /// Rehidrata sesión y ambos registros desde el storage. Idempotente;
    /// se llama al construir y es seguro repetirla.
    pub fn load_from_storage(&mut self) {
        if let Some(stored) = load_json::<StoredSession>(self.storage.as_ref(), CURRENT_USER_KEY) {
            log::info!("📂 Sesión cargada: {}", stored.user.display_name());
            self.session = Some(stored.user);
        }

        if let Some(users) = load_json::<Vec<Passenger>>(self.storage.as_ref(), PASSENGER_USERS_KEY)
        {
            log::info!("📂 Pasajeros cargados: {}", users.len());
            self.registered_users = users;
        }

        if let Some(companies) =
            load_json::<Vec<Company>>(self.storage.as_ref(), COMPANY_USERS_KEY)
        {
            log::info!("📂 Empresas cargadas: {}", companies.len());
            self.registered_companies = companies;
        }
    }

    /// Restaura solo la sesión. Devuelve si había una sesión persistida;
    /// se usa al arrancar para decidir la vista inicial.
    pub fn restore_session(&mut self) -> bool {
        match load_json::<StoredSession>(self.storage.as_ref(), CURRENT_USER_KEY) {
            Some(stored) => {
                self.session = Some(stored.user);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Actualizaciones del principal en sesión
    // ------------------------------------------------------------------

    /// Actualiza los datos del pasajero en sesión (los campos ausentes
    /// conservan su valor) y propaga el cambio al registro, ubicado por el
    /// email previo.
    pub fn update_user(&mut self, updates: PassengerUpdate) -> Result<(), AuthError> {
        let passenger = match &mut self.session {
            Some(Principal::Passenger(p)) => p,
            Some(Principal::Company(_)) => return Err(AuthError::NotAPassenger),
            None => return Err(AuthError::NotAuthenticated),
        };

        let old_email = passenger.email.clone();
        if let Some(username) = updates.username {
            passenger.username = username;
        }
        if let Some(email) = updates.email {
            passenger.email = email;
        }
        if let Some(password) = updates.password {
            passenger.password = password;
        }
        let updated = passenger.clone();

        if let Some(entry) = self.registered_users.iter_mut().find(|u| u.email == old_email) {
            *entry = updated;
            self.persist_users();
        }
        self.persist_session();
        Ok(())
    }

    /// Actualiza los datos de la empresa en sesión y propaga al registro,
    /// ubicado por id. Rechazada si la sesión no es de empresa.
    pub fn update_company_info(&mut self, updates: CompanyUpdate) -> Result<(), AuthError> {
        let company = match &mut self.session {
            Some(Principal::Company(c)) => c,
            Some(Principal::Passenger(_)) => return Err(AuthError::NotACompany),
            None => return Err(AuthError::NotAuthenticated),
        };

        if let Some(company_name) = updates.company_name {
            company.company_name = company_name;
        }
        if let Some(ruc) = updates.ruc {
            company.ruc = ruc;
        }
        if let Some(address) = updates.address {
            company.address = address;
        }
        let updated = company.clone();

        if let Some(entry) = self
            .registered_companies
            .iter_mut()
            .find(|c| c.id == updated.id)
        {
            *entry = updated;
            self.persist_companies();
        }
        self.persist_session();
        log::info!("✅ Información de la empresa actualizada");
        Ok(())
    }

    /// Cambia la contraseña del principal en sesión y la propaga al registro
    /// que corresponda según la variante.
    pub fn update_password(&mut self, new_password: &str) -> Result<(), AuthError> {
        match &mut self.session {
            Some(Principal::Passenger(p)) => {
                p.password = new_password.to_string();
                let email = p.email.clone();
                if let Some(entry) =
                    self.registered_users.iter_mut().find(|u| u.email == email)
                {
                    entry.password = new_password.to_string();
                    self.persist_users();
                }
            }
            Some(Principal::Company(c)) => {
                c.password = new_password.to_string();
                let id = c.id.clone();
                if let Some(entry) =
                    self.registered_companies.iter_mut().find(|c| c.id == id)
                {
                    entry.password = new_password.to_string();
                    self.persist_companies();
                }
            }
            None => return Err(AuthError::NotAuthenticated),
        }
        self.persist_session();
        log::info!("✅ Contraseña actualizada");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_passenger(&self) -> bool {
        matches!(self.session, Some(Principal::Passenger(_)))
    }

    pub fn is_company(&self) -> bool {
        matches!(self.session, Some(Principal::Company(_)))
    }

    pub fn current_user(&self) -> Option<&Principal> {
        self.session.as_ref()
    }

    pub fn registered_users(&self) -> &[Passenger] {
        &self.registered_users
    }

    pub fn registered_companies(&self) -> &[Company] {
        &self.registered_companies
    }

    /// Email enmascarado para la UI: dos primeros caracteres + dominio.
    pub fn masked_email(&self) -> String {
        const MASK: &str = "••••••••••";
        let email = match &self.session {
            Some(principal) => principal.email(),
            None => return MASK.to_string(),
        };
        match email.split_once('@') {
            Some((name, domain)) if !name.is_empty() && !domain.is_empty() => {
                let prefix: String = name.chars().take(2).collect();
                format!("{}••••@{}", prefix, domain)
            }
            _ => MASK.to_string(),
        }
    }

    pub fn masked_password(&self) -> String {
        "••••••••••".to_string()
    }

    // ------------------------------------------------------------------
    // Internos
    // ------------------------------------------------------------------

    fn allocate_company_id(&mut self) -> String {
        let mut id = Utc::now().timestamp_millis();
        if id <= self.last_company_id {
            id = self.last_company_id + 1;
        }
        self.last_company_id = id;
        id.to_string()
    }

    fn persist_session(&self) {
        if let Some(principal) = &self.session {
            let stored = StoredSession {
                kind: principal.kind(),
                user: principal.clone(),
            };
            if let Err(e) = save_json(self.storage.as_ref(), CURRENT_USER_KEY, &stored) {
                log::error!("❌ Error persistiendo la sesión: {}", e);
            }
        }
    }

    fn persist_users(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), PASSENGER_USERS_KEY, &self.registered_users)
        {
            log::error!("❌ Error persistiendo '{}': {}", PASSENGER_USERS_KEY, e);
        }
    }

    fn persist_companies(&self) {
        if let Err(e) =
            save_json(self.storage.as_ref(), COMPANY_USERS_KEY, &self.registered_companies)
        {
            log::error!("❌ Error persistiendo '{}': {}", COMPANY_USERS_KEY, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn store(storage: &MemoryStorage) -> UserStore {
        UserStore::new(Rc::new(storage.clone()))
    }

    fn bob() -> Passenger {
        Passenger {
            username: "bob".to_string(),
            email: "b@x.com".to_string(),
            password: "p".to_string(),
        }
    }

    fn transit_co() -> NewCompany {
        NewCompany {
            company_name: "Transportes Lima".to_string(),
            ruc: "20123456789".to_string(),
            email: "flota@tlima.pe".to_string(),
            address: "Av. Brasil 123".to_string(),
            password: "secreto".to_string(),
            fleet_size: "25".to_string(),
        }
    }

    #[test]
    fn test_register_is_upsert() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register(bob());
        users.register(Passenger { password: "p2".to_string(), ..bob() });

        assert_eq!(users.registered_users().len(), 1);
        assert_eq!(users.registered_users()[0].password, "p2");

        // La contraseña nueva queda persistida
        let reloaded = store(&storage);
        assert_eq!(reloaded.registered_users()[0].password, "p2");
    }

    #[test]
    fn test_login_by_username_or_email() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register(bob());

        assert!(users.login("bob", "p").is_ok());
        assert!(users.is_passenger());

        users.logout();
        assert!(users.login("b@x.com", "p").is_ok());
        assert!(users.is_logged_in());
    }

    #[test]
    fn test_login_wrong_password_leaves_session_anonymous() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register(bob());

        assert_eq!(users.login("bob", "wrong"), Err(AuthError::InvalidCredentials));
        assert!(!users.is_logged_in());
        assert!(storage.get_item(CURRENT_USER_KEY).is_none());
    }

    #[test]
    fn test_company_login_requires_exact_pair() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register_company(transit_co()).unwrap();

        assert_eq!(
            users.login_company("flota@tlima.pe", "otra"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(users.login_company("flota@tlima.pe", "secreto").is_ok());
        assert!(users.is_company());
    }

    #[test]
    fn test_register_company_rejects_duplicate_email() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register_company(transit_co()).unwrap();

        let result = users.register_company(transit_co());
        assert_eq!(result, Err(AuthError::EmailAlreadyRegistered));
        assert_eq!(users.registered_companies().len(), 1);
    }

    #[test]
    fn test_logout_removes_session_slot_keeps_registries() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register(bob());
        users.login("bob", "p").unwrap();
        assert!(storage.get_item(CURRENT_USER_KEY).is_some());

        users.logout();
        assert!(!users.is_logged_in());
        assert!(storage.get_item(CURRENT_USER_KEY).is_none());
        assert_eq!(users.registered_users().len(), 1);
    }

    #[test]
    fn test_restore_session_for_both_variants() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register(bob());
        users.login("bob", "p").unwrap();

        // Nueva instancia sobre el mismo storage: la sesión se restaura
        let mut fresh = store(&storage);
        assert!(fresh.is_passenger());
        assert!(fresh.restore_session());

        fresh.logout();
        fresh.register_company(transit_co()).unwrap();
        fresh.login_company("flota@tlima.pe", "secreto").unwrap();

        let fresh = store(&storage);
        assert!(fresh.is_company());
    }

    #[test]
    fn test_restore_session_without_slot_is_false() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        assert!(!users.restore_session());
        assert!(!users.is_logged_in());
    }

    #[test]
    fn test_update_user_propagates_to_registry_by_prior_email() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register(bob());
        users.login("bob", "p").unwrap();

        users
            .update_user(PassengerUpdate {
                email: Some("nuevo@x.com".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(users.registered_users()[0].email, "nuevo@x.com");
        // El username no especificado conserva su valor
        assert_eq!(users.registered_users()[0].username, "bob");

        let reloaded = store(&storage);
        assert_eq!(reloaded.current_user().unwrap().email(), "nuevo@x.com");
    }

    #[test]
    fn test_update_company_info_rejected_for_passenger() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register(bob());
        users.login("bob", "p").unwrap();

        let result = users.update_company_info(CompanyUpdate::default());
        assert_eq!(result, Err(AuthError::NotACompany));
    }

    #[test]
    fn test_update_password_branches_on_variant() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        users.register(bob());
        users.register_company(transit_co()).unwrap();

        users.login("bob", "p").unwrap();
        users.update_password("p9").unwrap();
        assert_eq!(users.registered_users()[0].password, "p9");
        assert_eq!(users.registered_companies()[0].password, "secreto");

        users.login_company("flota@tlima.pe", "secreto").unwrap();
        users.update_password("s9").unwrap();
        assert_eq!(users.registered_companies()[0].password, "s9");

        // El login posterior usa la contraseña nueva
        users.logout();
        assert!(users.login("bob", "p9").is_ok());
    }

    #[test]
    fn test_update_password_without_session_fails() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        assert_eq!(users.update_password("x"), Err(AuthError::NotAuthenticated));
    }

    #[test]
    fn test_masked_email() {
        let storage = MemoryStorage::new();
        let mut users = store(&storage);
        assert_eq!(users.masked_email(), "••••••••••");

        users.register(bob());
        users.login("bob", "p").unwrap();
        assert_eq!(users.masked_email(), "b••••@x.com");
    }
}
