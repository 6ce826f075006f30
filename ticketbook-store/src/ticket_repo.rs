use async_trait::async_trait;
use ticketbook_core::{CoreResult, Ticket, TicketId, TicketRepository};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    key: TicketId,
    ticket: Ticket,
}

/// Process-memory ticket registry.
///
/// Entries keep insertion order. The key of an entry is fixed when it is
/// first inserted; a later `replace` may store a ticket whose `id` field
/// differs from that key.
#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    entries: RwLock<Vec<Entry>>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every ticket.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

fn position(entries: &[Entry], id: TicketId) -> Option<usize> {
    entries.iter().position(|entry| entry.key == id)
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn list(&self) -> CoreResult<Vec<Ticket>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().map(|entry| entry.ticket.clone()).collect())
    }

    async fn insert(&self, ticket: Ticket) -> CoreResult<Ticket> {
        let mut entries = self.entries.write().await;
        match position(&entries, ticket.id) {
            Some(idx) => {
                debug!("Overwriting ticket {}", ticket.id);
                entries[idx].ticket = ticket.clone();
            }
            None => entries.push(Entry {
                key: ticket.id,
                ticket: ticket.clone(),
            }),
        }
        Ok(ticket)
    }

    async fn replace(&self, id: TicketId, ticket: Ticket) -> CoreResult<Option<Ticket>> {
        let mut entries = self.entries.write().await;
        let Some(idx) = position(&entries, id) else {
            return Ok(None);
        };
        entries[idx].ticket = ticket.clone();
        Ok(Some(ticket))
    }

    async fn remove(&self, id: TicketId) -> CoreResult<Option<Ticket>> {
        let mut entries = self.entries.write().await;
        Ok(position(&entries, id).map(|idx| entries.remove(idx).ticket))
    }
}
