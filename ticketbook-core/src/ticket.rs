use serde::{Deserialize, Serialize};

pub type TicketId = i64;

/// A flight booking record.
///
/// Date and time are kept exactly as the client sent them; nothing here
/// parses or normalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub flight_name: String,
    pub flight_date: String,
    pub flight_time: String,
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserialization() {
        let json = r#"
            {
                "id": 1,
                "flight_name": "AI101",
                "flight_date": "2025-10-15",
                "flight_time": "14:30",
                "destination": "New York"
            }
        "#;
        let ticket: Ticket = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(ticket.id, 1);
        assert_eq!(ticket.flight_name, "AI101");
        assert_eq!(ticket.flight_date, "2025-10-15");
        assert_eq!(ticket.destination, "New York");
    }

    #[test]
    fn test_ticket_serializes_flat_object() {
        let ticket = Ticket {
            id: 7,
            flight_name: "AI102".to_string(),
            flight_date: "2025-10-16".to_string(),
            flight_time: "16:30".to_string(),
            destination: "London".to_string(),
        };

        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "flight_name": "AI102",
                "flight_date": "2025-10-16",
                "flight_time": "16:30",
                "destination": "London"
            })
        );
    }

    #[test]
    fn test_ticket_missing_field_rejected() {
        let json = r#"{"id": 1, "flight_name": "AI101"}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }
}
