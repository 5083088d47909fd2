//! Builders for domain values used across tests.

use crate::domain::agent::Agent;
use crate::domain::message::ConversationMessage;

/// A small support-desk roster: `tech-agent`, `billing`, `travel`.
pub fn support_agents() -> Vec<Agent> {
    vec![
        Agent::new("Tech Agent", "Software, hardware and connectivity problems"),
        Agent::new("Billing", "Invoices, refunds and payment methods"),
        Agent::new("Travel", "Flight and hotel bookings"),
    ]
}

/// Alternate user/assistant turns, starting with the user.
pub fn history(turns: &[&str]) -> Vec<ConversationMessage> {
    turns
        .iter()
        .enumerate()
        .map(|(i, text)| {
            if i % 2 == 0 {
                ConversationMessage::user(*text)
            } else {
                ConversationMessage::assistant(*text)
            }
        })
        .collect()
}
