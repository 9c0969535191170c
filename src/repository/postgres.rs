//! PostgreSQL cliente store
//!
//! Single-table access to `clientes`. Each method is one statement, so the
//! database's per-statement isolation is all the coordination needed.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{Cliente, NewCliente};

use super::{ClienteFilter, ClienteStore, StoreError};

type ClienteRow = (i64, String, String, i32, NaiveDate);

fn from_row((id, nombre, apellido, edad, fecha_nacimiento): ClienteRow) -> Cliente {
    Cliente {
        id,
        nombre,
        apellido,
        edad,
        fecha_nacimiento,
    }
}

/// Escape `%`, `_` and `\` so user input is matched literally by `ILIKE`.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Cliente store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgClienteRepository {
    pool: PgPool,
}

impl PgClienteRepository {
    /// Create a new PgClienteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClienteStore for PgClienteRepository {
    async fn insert(&self, cliente: NewCliente) -> Result<Cliente, StoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO clientes (nombre, apellido, edad, fecha_nacimiento)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(cliente.nombre())
        .bind(cliente.apellido())
        .bind(cliente.edad())
        .bind(cliente.fecha_nacimiento())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(cliente_id = id, "Cliente row inserted");

        Ok(cliente.into_cliente(id))
    }

    async fn find_all(&self) -> Result<Vec<Cliente>, StoreError> {
        let rows: Vec<ClienteRow> = sqlx::query_as(
            r#"
            SELECT id, nombre, apellido, edad, fecha_nacimiento
            FROM clientes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>, StoreError> {
        let row: Option<ClienteRow> = sqlx::query_as(
            r#"
            SELECT id, nombre, apellido, edad, fecha_nacimiento
            FROM clientes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(from_row))
    }

    async fn find_all_edades(&self) -> Result<Vec<i32>, StoreError> {
        let edades: Vec<i32> = sqlx::query_scalar("SELECT edad FROM clientes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(edades)
    }

    async fn average_edad(&self) -> Result<Option<f64>, StoreError> {
        // AVG over INTEGER yields NUMERIC
        let avg: Option<f64> = sqlx::query_scalar("SELECT AVG(edad)::FLOAT8 FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        Ok(avg)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn search(&self, filter: &ClienteFilter) -> Result<Vec<Cliente>, StoreError> {
        let rows: Vec<ClienteRow> = sqlx::query_as(
            r#"
            SELECT id, nombre, apellido, edad, fecha_nacimiento
            FROM clientes
            WHERE ($1::TEXT IS NULL OR nombre ILIKE $1)
              AND ($2::TEXT IS NULL OR apellido ILIKE $2)
            ORDER BY id
            "#,
        )
        .bind(filter.nombre().map(like_pattern))
        .bind(filter.apellido().map(like_pattern))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(from_row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_needle() {
        assert_eq!(like_pattern("gar"), "%gar%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
    }
}
