//! Age KPIs
//!
//! Mean and population standard deviation over the ages of every stored
//! cliente.

use serde::Serialize;

/// KPI summary returned by `GET /api/kpideclientes`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiClientes {
    pub promedio_edad: f64,
    pub desviacion_estandar: f64,
}

impl KpiClientes {
    /// Result for an empty age set.
    pub const EMPTY: KpiClientes = KpiClientes {
        promedio_edad: 0.0,
        desviacion_estandar: 0.0,
    };

    /// Compute the KPIs for a set of ages.
    ///
    /// Uses the population variance (divisor = count). Both values are
    /// rounded to two decimals.
    pub fn from_edades(edades: &[i32]) -> Self {
        if edades.is_empty() {
            return Self::EMPTY;
        }

        let count = edades.len() as f64;
        let promedio = edades.iter().map(|&e| f64::from(e)).sum::<f64>() / count;
        let varianza = edades
            .iter()
            .map(|&e| (f64::from(e) - promedio).powi(2))
            .sum::<f64>()
            / count;

        Self {
            promedio_edad: round_to_cents(promedio),
            desviacion_estandar: round_to_cents(varianza.sqrt()),
        }
    }
}

/// Round to two decimal places (`round(x * 100) / 100`).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
