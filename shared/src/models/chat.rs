//! Chat assistant transcript
//!
//! Pure state for the simulated assistant. Timing (the reply delay and the
//! voice capture delay) belongs to whoever drives the session.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::i18n::CHAT;
use crate::types::Language;
use crate::validation::is_sendable_message;

/// One line of the transcript
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

/// The assistant's conversation while the overlay is open
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    language: Language,
    messages: Vec<ChatMessage>,
    input: String,
    is_listening: bool,
    #[serde(skip)]
    next_id: u64,
}

impl ChatSession {
    /// Open a session seeded with the greeting in `language`
    pub fn open(language: Language) -> Self {
        let mut session = Self {
            language,
            messages: Vec::new(),
            input: String::new(),
            is_listening: false,
            next_id: 1,
        };
        session.push(CHAT.get(language).greeting.to_string(), false);
        session
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Send the current input as a user message
    ///
    /// Blank input is ignored. The text is kept as typed and the input box is
    /// cleared.
    pub fn submit(&mut self) -> Option<ChatMessage> {
        if !is_sendable_message(&self.input) {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        Some(self.push(text, true))
    }

    /// Append a canned reply picked from `language`'s pool
    pub fn push_reply<R: Rng + ?Sized>(&mut self, language: Language, rng: &mut R) -> ChatMessage {
        let text = pick(&CHAT.get(language).responses, rng);
        self.push(text.to_string(), false)
    }

    /// Flip the listening flag, returning the new value
    pub fn toggle_listening(&mut self) -> bool {
        self.is_listening = !self.is_listening;
        self.is_listening
    }

    /// Finish a simulated voice capture: fill the input with a sample question
    /// in `language`, the language active when listening started, and stop
    /// listening.
    pub fn complete_voice_capture<R: Rng + ?Sized>(
        &mut self,
        language: Language,
        rng: &mut R,
    ) -> &str {
        let sample = pick(&CHAT.get(language).samples, rng);
        self.input = sample.to_string();
        self.is_listening = false;
        &self.input
    }

    fn push(&mut self, text: String, is_user: bool) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            text,
            is_user,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}

fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_open_seeds_greeting() {
        let session = ChatSession::open(Language::Hindi);
        assert_eq!(session.messages().len(), 1);
        assert!(!session.messages()[0].is_user);
        assert_eq!(session.messages()[0].text, CHAT.get(Language::Hindi).greeting);
    }

    #[test]
    fn test_untranslated_language_greets_in_english() {
        let session = ChatSession::open(Language::Bengali);
        assert_eq!(session.messages()[0].text, CHAT.get(Language::English).greeting);
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_input() {
        let mut session = ChatSession::open(Language::English);
        session.set_input("When to plant wheat?");
        let sent = session.submit().unwrap();
        assert!(sent.is_user);
        assert_eq!(sent.text, "When to plant wheat?");
        assert_eq!(session.input(), "");
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let mut session = ChatSession::open(Language::English);
        session.set_input("   ");
        assert!(session.submit().is_none());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.input(), "   ");
    }

    #[test]
    fn test_ids_increase() {
        let mut session = ChatSession::open(Language::English);
        session.set_input("hi");
        let user = session.submit().unwrap();
        let bot = session.push_reply(Language::English, &mut rng());
        assert!(bot.id > user.id);
        assert!(user.id > session.messages()[0].id);
    }

    #[test]
    fn test_reply_comes_from_pool() {
        let mut session = ChatSession::open(Language::English);
        let reply = session.push_reply(Language::Hindi, &mut rng());
        assert!(!reply.is_user);
        assert!(CHAT.get(Language::Hindi).responses.iter().any(|r| *r == reply.text));
    }

    #[test]
    fn test_voice_capture_fills_input_and_stops_listening() {
        let mut session = ChatSession::open(Language::English);
        assert!(session.toggle_listening());
        let heard = session
            .complete_voice_capture(Language::English, &mut rng())
            .to_string();
        assert!(CHAT.get(Language::English).samples.iter().any(|s| *s == heard));
        assert_eq!(session.input(), heard);
        assert!(!session.is_listening());
    }

    #[test]
    fn test_voice_capture_uses_given_language() {
        let mut session = ChatSession::open(Language::Hindi);
        session.toggle_listening();
        session.set_language(Language::English);
        let heard = session
            .complete_voice_capture(Language::Hindi, &mut rng())
            .to_string();
        assert!(CHAT.get(Language::Hindi).samples.iter().any(|s| *s == heard));
    }

    #[test]
    fn test_toggle_listening_twice_stops() {
        let mut session = ChatSession::open(Language::English);
        assert!(session.toggle_listening());
        assert!(!session.toggle_listening());
    }
}
