use async_trait::async_trait;
use crate::{CoreResult, Ticket, TicketId};

/// Repository trait for ticket data access.
///
/// `None` from `replace` and `remove` means the id was not present and
/// nothing was changed.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// All tickets in storage order.
    async fn list(&self) -> CoreResult<Vec<Ticket>>;

    /// Store under the ticket's own id, overwriting any existing entry.
    async fn insert(&self, ticket: Ticket) -> CoreResult<Ticket>;

    /// Overwrite the entry at `id` with `ticket` as given. The payload's own
    /// `id` field is not reconciled with `id`.
    async fn replace(&self, id: TicketId, ticket: Ticket) -> CoreResult<Option<Ticket>>;

    async fn remove(&self, id: TicketId) -> CoreResult<Option<Ticket>>;
}
