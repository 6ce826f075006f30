use std::sync::Arc;
use ticketbook_core::TicketRepository;
use ticketbook_store::InMemoryTicketRepository;

#[derive(Clone)]
pub struct AppState {
    pub tickets: Arc<dyn TicketRepository>,
}

impl AppState {
    pub fn new(tickets: Arc<dyn TicketRepository>) -> Self {
        Self { tickets }
    }

    /// State backed by a fresh, empty in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTicketRepository::new()))
    }
}
