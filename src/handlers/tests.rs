//! Handler tests
//!
//! Run against the in-memory store with a pinned clock.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::{DomainError, FixedClock};
    use crate::error::AppError;
    use crate::handlers::{CreateClienteCommand, CreateClienteHandler};
    use crate::repository::{ClienteStore, InMemoryClienteRepository};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 24).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn handler() -> (CreateClienteHandler, Arc<InMemoryClienteRepository>) {
        let store = Arc::new(InMemoryClienteRepository::new());
        let handler = CreateClienteHandler::new(store.clone(), Arc::new(FixedClock(today())));
        (handler, store)
    }

    // =========================================================================
    // Command validation
    // =========================================================================

    #[test]
    fn test_valid_command_recomputes_edad() {
        let cmd = CreateClienteCommand::new("Juan", "Perez", 10, date(1987, 6, 24));
        let cliente = cmd.validate(today()).unwrap();

        assert_eq!(cliente.edad(), 37);
        assert_eq!(cliente.nombre(), "Juan");
    }

    #[test]
    fn test_empty_command_reports_every_field() {
        let errors = CreateClienteCommand::default().validate(today()).unwrap_err();

        assert!(errors.has_field("nombre"));
        assert!(errors.has_field("apellido"));
        assert!(errors.has_field("edad"));
        assert!(errors.has_field("fechaNacimiento"));
    }

    #[test]
    fn test_negative_edad_rejected() {
        let cmd = CreateClienteCommand::new("Juan", "Perez", -1, date(1987, 6, 24));
        let errors = cmd.validate(today()).unwrap_err();

        assert_eq!(errors.violations().len(), 1);
        assert!(errors.has_field("edad"));
    }

    #[test]
    fn test_birth_date_today_rejected() {
        let cmd = CreateClienteCommand::new("Juan", "Perez", 0, today());
        let errors = cmd.validate(today()).unwrap_err();

        assert!(errors.has_field("fechaNacimiento"));
    }

    #[test]
    fn test_yesterday_is_age_zero() {
        let cmd = CreateClienteCommand::new("Bebe", "Nuevo", 0, today().pred_opt().unwrap());
        assert_eq!(cmd.validate(today()).unwrap().edad(), 0);
    }

    #[test]
    fn test_derived_edad_over_150_rejected() {
        let cmd = CreateClienteCommand::new("Muy", "Viejo", 30, date(1870, 1, 1));
        let errors = cmd.validate(today()).unwrap_err();

        assert!(errors.has_field("edad"));
        assert!(errors.to_string().contains("150"));
    }

    // =========================================================================
    // CreateClienteHandler
    // =========================================================================

    #[tokio::test]
    async fn test_create_persists_and_assigns_id() {
        let (handler, store) = handler();

        let cliente = handler
            .execute(CreateClienteCommand::new("Juan", "Perez", 37, date(1987, 6, 24)))
            .await
            .unwrap();

        assert_eq!(cliente.id, 1);
        assert_eq!(cliente.edad, 37);
        assert_eq!(store.find_by_id(cliente.id).await.unwrap(), Some(cliente));
    }

    #[tokio::test]
    async fn test_invalid_command_writes_nothing() {
        let (handler, store) = handler();

        let result = handler
            .execute(CreateClienteCommand::new("", "Perez", 37, date(1987, 6, 24)))
            .await;

        match result {
            Err(AppError::Domain(DomainError::Validation(errors))) => {
                assert!(errors.has_field("nombre"));
            }
            Err(e) => panic!("Expected validation error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
