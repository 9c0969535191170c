//! Domain module
//!
//! Core domain types and business logic.

pub mod cliente;
pub mod clock;
pub mod error;
pub mod kpi;
pub mod longevity;
pub mod random;
pub mod validation;

pub use cliente::{edad_en, Cliente, NewCliente};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use kpi::KpiClientes;
pub use longevity::{fecha_probable_muerte, remaining_years};
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use validation::{FieldViolation, ValidationErrors};
