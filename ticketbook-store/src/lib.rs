pub mod app_config;
pub mod ticket_repo;

pub use ticket_repo::InMemoryTicketRepository;
