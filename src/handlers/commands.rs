//! Command definitions
//!
//! Commands represent intentions to change the system state.

use chrono::NaiveDate;

use crate::domain::cliente::{EDAD_MAX, EDAD_MIN};
use crate::domain::validation::{check_edad, check_fecha_pasada, check_nombre};
use crate::domain::{NewCliente, ValidationErrors};

// =========================================================================
// CreateClienteCommand
// =========================================================================

/// Command to create a new cliente.
///
/// Fields are optional because they arrive straight from the request body;
/// `validate` turns a complete, valid command into a [`NewCliente`].
#[derive(Debug, Clone, Default)]
pub struct CreateClienteCommand {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub edad: Option<i32>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

impl CreateClienteCommand {
    pub fn new(
        nombre: impl Into<String>,
        apellido: impl Into<String>,
        edad: i32,
        fecha_nacimiento: NaiveDate,
    ) -> Self {
        Self {
            nombre: Some(nombre.into()),
            apellido: Some(apellido.into()),
            edad: Some(edad),
            fecha_nacimiento: Some(fecha_nacimiento),
        }
    }

    /// Run every field check and build the cliente to persist.
    ///
    /// The stored age is recomputed from the birth date as of `today`; the
    /// requested `edad` only has to be present and non-negative.
    pub fn validate(&self, today: NaiveDate) -> Result<NewCliente, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_nombre(&mut errors, "nombre", "nombre", self.nombre.as_deref());
        check_nombre(&mut errors, "apellido", "apellido", self.apellido.as_deref());
        check_edad(&mut errors, "edad", self.edad, EDAD_MIN, None);
        check_fecha_pasada(&mut errors, "fechaNacimiento", self.fecha_nacimiento, today);

        let cliente = match (
            self.nombre.as_deref(),
            self.apellido.as_deref(),
            self.edad,
            self.fecha_nacimiento,
        ) {
            (Some(nombre), Some(apellido), Some(_), Some(fecha_nacimiento)) if errors.is_empty() => {
                NewCliente::new(nombre, apellido, fecha_nacimiento, today)
            }
            // any missing field has already been recorded
            _ => return Err(errors),
        };

        let mut errors = ValidationErrors::new();
        check_edad(&mut errors, "edad", Some(cliente.edad()), EDAD_MIN, Some(EDAD_MAX));
        errors.into_result()?;

        Ok(cliente)
    }
}
