//! Fixed content for the simulated chat: reply pool, suggested prompts
//! and the example conversation the store starts with.

use super::conversation::{Conversation, NEW_CHAT_TITLE};
use super::message::{Message, Role};
use crate::domain::foundation::Timestamp;

/// Replies the simulated assistant picks from, uniformly at random.
pub const ASSISTANT_REPLIES: [&str; 10] = [
    "I'm analyzing your request and finding the most relevant information for you.",
    "That's an interesting question! Here's what I know about this topic.",
    "I've processed your request and have some insights to share.",
    "Based on my knowledge, I can provide the following information.",
    "I understand what you're asking. Let me explain this concept for you.",
    "Great question! I'm happy to help you understand this better.",
    "I've analyzed multiple sources to give you the most accurate answer.",
    "Let me think about this from different perspectives to give you a comprehensive response.",
    "I've considered various approaches to your question. Here's what I think would work best.",
    "I'm examining this topic in detail to provide you with a thorough explanation.",
];

/// Prompts offered under the message input.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "Explain how AI image generation works",
    "What will technology look like in 2050?",
    "Help me write a short story about time travel",
    "Design a sustainable smart home system",
];

const EXAMPLE_TITLE: &str = "Quantum Computing Basics";

const EXAMPLE_EXCHANGE: [(Role, &str, i64); 3] = [
    (Role::Assistant, "Hello! How can I help you today?", 5),
    (
        Role::User,
        "I'm looking for information about quantum computing. Can you explain the basics?",
        4,
    ),
    (
        Role::Assistant,
        "Quantum computing uses quantum bits or 'qubits' that can exist in multiple states simultaneously, unlike classical bits which are either 0 or 1. This quantum property of superposition, along with entanglement, allows quantum computers to perform certain calculations exponentially faster than classical computers. While still in early stages, quantum computers show promise for cryptography, optimization problems, and simulating quantum systems that are impossible for classical computers to model efficiently.",
        3,
    ),
];

/// The conversations a fresh session starts with: the quantum computing
/// example followed by an empty "New Chat".
pub fn example_conversations() -> Vec<Conversation> {
    let now = Timestamp::now();

    let messages = EXAMPLE_EXCHANGE
        .iter()
        .map(|(role, content, minutes_ago)| Message::seeded(*role, content, now.minus_minutes(*minutes_ago)))
        .collect();
    let example = Conversation::seeded(EXAMPLE_TITLE, messages, now.minus_minutes(60), now.minus_minutes(3));
    let blank = Conversation::seeded(NEW_CHAT_TITLE, Vec::new(), now, now);

    vec![example, blank]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_set_has_quantum_chat_then_blank() {
        let conversations = example_conversations();

        assert_eq!(conversations.len(), 2);
        assert_eq!(conversations[0].title(), EXAMPLE_TITLE);
        assert_eq!(conversations[0].messages().len(), 3);
        assert!(conversations[1].is_empty());
        assert_eq!(conversations[1].title(), NEW_CHAT_TITLE);
    }

    #[test]
    fn example_messages_are_in_chronological_order() {
        let conversations = example_conversations();
        let stamps: Vec<_> = conversations[0].messages().iter().map(|m| *m.timestamp()).collect();
        assert!(stamps.windows(2).all(|pair| pair[0].is_before(&pair[1])));
    }

    #[test]
    fn reply_pool_has_no_empty_entries() {
        assert!(ASSISTANT_REPLIES.iter().all(|reply| !reply.trim().is_empty()));
    }
}
