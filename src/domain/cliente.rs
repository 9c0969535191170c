//! Cliente entity
//!
//! A stored customer record and its pre-persistence form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum accepted age
pub const EDAD_MIN: i32 = 0;

/// Maximum accepted age
pub const EDAD_MAX: i32 = 150;

/// A persisted cliente.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub edad: i32,
    pub fecha_nacimiento: NaiveDate,
}

/// A cliente that has not been stored yet.
///
/// # Invariants
/// - `set_fecha_nacimiento` always recomputes `edad` from the birth date
/// - `set_edad` does not touch the birth date, so both may diverge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCliente {
    nombre: String,
    apellido: String,
    edad: i32,
    fecha_nacimiento: NaiveDate,
}

impl NewCliente {
    /// Build a cliente whose age is derived from `fecha_nacimiento` as of `today`.
    pub fn new(
        nombre: impl Into<String>,
        apellido: impl Into<String>,
        fecha_nacimiento: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        Self {
            nombre: nombre.into(),
            apellido: apellido.into(),
            edad: edad_en(fecha_nacimiento, today),
            fecha_nacimiento,
        }
    }

    /// Set the birth date and recalculate the age as of `today`.
    pub fn set_fecha_nacimiento(&mut self, fecha_nacimiento: NaiveDate, today: NaiveDate) {
        self.fecha_nacimiento = fecha_nacimiento;
        self.edad = edad_en(fecha_nacimiento, today);
    }

    pub fn set_edad(&mut self, edad: i32) {
        self.edad = edad;
    }

    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    pub fn apellido(&self) -> &str {
        &self.apellido
    }

    pub fn edad(&self) -> i32 {
        self.edad
    }

    pub fn fecha_nacimiento(&self) -> NaiveDate {
        self.fecha_nacimiento
    }

    /// Attach the store-assigned identifier.
    pub fn into_cliente(self, id: i64) -> Cliente {
        Cliente {
            id,
            nombre: self.nombre,
            apellido: self.apellido,
            edad: self.edad,
            fecha_nacimiento: self.fecha_nacimiento,
        }
    }
}

/// Whole years elapsed between `fecha_nacimiento` and `today`.
///
/// A birth date after `today` yields 0.
pub fn edad_en(fecha_nacimiento: NaiveDate, today: NaiveDate) -> i32 {
    today
        .years_since(fecha_nacimiento)
        .and_then(|years| i32::try_from(years).ok())
        .unwrap_or(0)
}
