//! Errores del núcleo: autenticación/registro y almacenamiento.
//!
//! La convención de señalización está normalizada: toda acción falible sobre
//! los registros de usuarios devuelve `Result<_, AuthError>` en lugar de
//! mezclar booleanos y errores lanzados.

/// Error de autenticación o de registro de usuarios.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Usuario no encontrado o contraseña incorrecta.
    #[error("Incorrect credentials")]
    InvalidCredentials,

    /// El correo ya existe en el registro de empresas.
    #[error("This email is already registered")]
    EmailAlreadyRegistered,

    /// La acción requiere una sesión activa.
    #[error("No active session")]
    NotAuthenticated,

    /// La acción solo aplica a sesiones de empresa.
    #[error("Only companies can update this information")]
    NotACompany,

    /// La acción solo aplica a sesiones de pasajero.
    #[error("Only passengers can update this information")]
    NotAPassenger,
}

/// Error de acceso al almacenamiento persistente.
///
/// Los stores lo registran en el log y continúan: una escritura fallida deja
/// intacto el último estado persistido, nunca tumba la aplicación.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("No se pudo acceder a localStorage")]
    Unavailable,

    #[error("Error guardando '{0}' en el almacenamiento")]
    WriteFailed(String),

    #[error("Error serializando datos: {0}")]
    Serialize(String),
}
