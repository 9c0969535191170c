//! Command Handlers module
//!
//! Handlers that orchestrate write operations: validate the command, then
//! persist through the store.

mod cliente_handler;
mod commands;

#[cfg(test)]
mod tests;

pub use cliente_handler::CreateClienteHandler;
pub use commands::*;
