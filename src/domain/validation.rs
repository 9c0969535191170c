//! Field-level validation
//!
//! Declarative checks for inbound cliente data. Checks never short-circuit:
//! every failing field is reported.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Minimum length of `nombre` / `apellido`, in characters
pub const NOMBRE_MIN_LEN: usize = 2;

/// Maximum length of `nombre` / `apellido`, in characters
pub const NOMBRE_MAX_LEN: usize = 50;

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Accumulated validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether any violation was recorded for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Non-blank name of 2–50 characters.
///
/// `label` is the human-readable noun used in messages ("nombre", "apellido").
pub fn check_nombre(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<&str>,
) {
    let value = value.unwrap_or_default();

    if value.trim().is_empty() {
        errors.add(field, format!("El {label} es obligatorio"));
    }

    let len = value.chars().count();
    if !(NOMBRE_MIN_LEN..=NOMBRE_MAX_LEN).contains(&len) {
        errors.add(
            field,
            format!("El {label} debe tener entre {NOMBRE_MIN_LEN} y {NOMBRE_MAX_LEN} caracteres"),
        );
    }
}

/// Present and within `[min, max]`.
pub fn check_edad(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<i32>,
    min: i32,
    max: Option<i32>,
) {
    let Some(edad) = value else {
        errors.add(field, "La edad es obligatoria");
        return;
    };

    if edad < min {
        errors.add(field, format!("La edad debe ser mayor o igual a {min}"));
    }
    if let Some(max) = max {
        if edad > max {
            errors.add(field, format!("La edad debe ser menor o igual a {max}"));
        }
    }
}

/// Present and strictly before `today`.
pub fn check_fecha_pasada(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<NaiveDate>,
    today: NaiveDate,
) {
    match value {
        None => errors.add(field, "La fecha de nacimiento es obligatoria"),
        Some(fecha) if fecha >= today => {
            errors.add(field, "La fecha de nacimiento debe ser anterior a hoy")
        }
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 24).unwrap()
    }

    #[test]
    fn test_valid_nombre() {
        let mut errors = ValidationErrors::new();
        check_nombre(&mut errors, "nombre", "nombre", Some("Ana"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_nombre_reports_blank_and_size() {
        let mut errors = ValidationErrors::new();
        check_nombre(&mut errors, "nombre", "nombre", Some(""));
        assert_eq!(errors.violations().len(), 2);
        assert!(errors.has_field("nombre"));
    }

    #[test]
    fn test_missing_nombre() {
        let mut errors = ValidationErrors::new();
        check_nombre(&mut errors, "apellido", "apellido", None);
        assert!(errors.has_field("apellido"));
        assert!(errors.to_string().contains("El apellido es obligatorio"));
    }

    #[test]
    fn test_blank_nombre_within_size() {
        let mut errors = ValidationErrors::new();
        check_nombre(&mut errors, "nombre", "nombre", Some("   "));
        assert_eq!(errors.violations().len(), 1);
    }

    #[test]
    fn test_nombre_length_counts_characters() {
        let mut errors = ValidationErrors::new();
        check_nombre(&mut errors, "nombre", "nombre", Some("Ñu"));
        assert!(errors.is_empty());

        check_nombre(&mut errors, "nombre", "nombre", Some(&"a".repeat(51)));
        assert!(errors.has_field("nombre"));
    }

    #[test]
    fn test_edad_bounds() {
        let mut errors = ValidationErrors::new();
        check_edad(&mut errors, "edad", Some(0), 0, Some(150));
        check_edad(&mut errors, "edad", Some(150), 0, Some(150));
        assert!(errors.is_empty());

        check_edad(&mut errors, "edad", Some(-1), 0, None);
        check_edad(&mut errors, "edad", Some(151), 0, Some(150));
        check_edad(&mut errors, "edad", None, 0, None);
        assert_eq!(errors.violations().len(), 3);
    }

    #[test]
    fn test_fecha_must_be_strictly_past() {
        let mut errors = ValidationErrors::new();
        check_fecha_pasada(&mut errors, "fechaNacimiento", today().pred_opt(), today());
        assert!(errors.is_empty());

        check_fecha_pasada(&mut errors, "fechaNacimiento", Some(today()), today());
        check_fecha_pasada(&mut errors, "fechaNacimiento", None, today());
        assert_eq!(errors.violations().len(), 2);
    }

    #[test]
    fn test_display_joins_violations() {
        let mut errors = ValidationErrors::new();
        errors.add("nombre", "a");
        errors.add("edad", "b");
        assert_eq!(errors.to_string(), "nombre: a; edad: b");
        assert!(errors.into_result().is_err());
    }
}
