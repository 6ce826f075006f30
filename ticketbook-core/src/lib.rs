pub mod ticket;
pub mod repository;

pub use ticket::{Ticket, TicketId};
pub use repository::TicketRepository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Storage backend failure: {0}")]
    StorageError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
