use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pasajero registrado. La contraseña se guarda en texto plano y el login
/// compara igualdad exacta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Empresa registrada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub company_name: String,
    /// RUC: identificador tributario de la empresa.
    pub ruc: String,
    pub email: String,
    pub address: String,
    pub password: String,
    pub fleet_size: String,
    pub created_at: DateTime<Utc>,
}

/// Datos de registro de una empresa (el store asigna id y fecha de creación).
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub company_name: String,
    pub ruc: String,
    pub email: String,
    pub address: String,
    pub password: String,
    pub fleet_size: String,
}

/// Variante del principal autenticado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Passenger,
    Company,
}

/// Principal autenticado: pasajero o empresa.
///
/// Untagged: el objeto persistido es el registro plano; la variante se
/// distingue por sus campos (Company lleva id y companyName) y el slot de
/// sesión guarda además la etiqueta `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Principal {
    Company(Company),
    Passenger(Passenger),
}

impl Principal {
    pub fn kind(&self) -> UserType {
        match self {
            Principal::Passenger(_) => UserType::Passenger,
            Principal::Company(_) => UserType::Company,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Passenger(p) => &p.email,
            Principal::Company(c) => &c.email,
        }
    }

    /// Nombre visible: username del pasajero o razón social de la empresa.
    pub fn display_name(&self) -> &str {
        match self {
            Principal::Passenger(p) => &p.username,
            Principal::Company(c) => &c.company_name,
        }
    }
}

/// Forma persistida del slot de sesión `bustrack_current_user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: Principal,
    #[serde(rename = "type")]
    pub kind: UserType,
}

/// Actualización parcial del pasajero en sesión.
#[derive(Debug, Clone, Default)]
pub struct PassengerUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Actualización parcial de la empresa en sesión.
#[derive(Debug, Clone, Default)]
pub struct CompanyUpdate {
    pub company_name: Option<String>,
    pub ruc: Option<String>,
    pub address: Option<String>,
}
