//! Chat assistant overlay
//!
//! One [`ChatOverlay`] exists per open chat window. Delayed work (the
//! assistant's reply and the simulated voice capture) runs as tasks owned by
//! the overlay, so closing it cancels everything still pending.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use shared::{ChatMessage, ChatSession, Language};
use tokio::sync::{mpsc, Mutex};
use tokio::task::{AbortHandle, JoinSet};
use uuid::Uuid;

use crate::config::ChatConfig;
use crate::error::ErrorDetail;

/// Delays applied by an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatTiming {
    pub reply_delay: Duration,
    pub voice_delay: Duration,
}

impl Default for ChatTiming {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}

impl From<&ChatConfig> for ChatTiming {
    fn from(config: &ChatConfig) -> Self {
        Self {
            reply_delay: config.reply_delay(),
            voice_delay: config.voice_delay(),
        }
    }
}

// ===== Wire frames =====

/// Frames sent by the browser
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// The input box changed
    Input { text: String },
    /// Send the input box, optionally replacing it first
    Send {
        #[serde(default)]
        text: Option<String>,
    },
    ToggleVoice,
    ToggleLanguage,
    Close,
}

/// Frames pushed to the browser
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// Full session state, sent once when the overlay opens
    Snapshot { session: ChatSession },
    Message { message: ChatMessage },
    /// A voice capture finished and filled the input box
    VoiceInput { text: String },
    Listening { listening: bool },
    Language { language: Language },
    Error { error: ErrorDetail },
}

// ===== Overlay =====

pub struct ChatOverlay {
    id: Uuid,
    session: Arc<Mutex<ChatSession>>,
    events: mpsc::UnboundedSender<ChatEvent>,
    tasks: JoinSet<()>,
    voice: Option<AbortHandle>,
    timing: ChatTiming,
}

impl ChatOverlay {
    /// Open an overlay greeting in `language`
    ///
    /// The returned receiver yields a `Snapshot` first, then every event the
    /// overlay produces until it is closed.
    pub fn open(
        language: Language,
        timing: ChatTiming,
    ) -> (Self, mpsc::UnboundedReceiver<ChatEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let session = ChatSession::open(language);
        let _ = events.send(ChatEvent::Snapshot {
            session: session.clone(),
        });

        let overlay = Self {
            id: Uuid::new_v4(),
            session: Arc::new(Mutex::new(session)),
            events,
            tasks: JoinSet::new(),
            voice: None,
            timing,
        };
        tracing::info!(overlay = %overlay.id, %language, "Chat overlay opened");
        (overlay, receiver)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current session state
    pub async fn snapshot(&self) -> ChatSession {
        self.session.lock().await.clone()
    }

    /// Apply one client frame; returns `false` once the client asked to close
    pub async fn handle(&mut self, frame: ClientFrame) -> bool {
        match frame {
            ClientFrame::Input { text } => self.set_input(text).await,
            ClientFrame::Send { text } => self.send(text).await,
            ClientFrame::ToggleVoice => self.toggle_voice().await,
            ClientFrame::ToggleLanguage => self.toggle_language().await,
            ClientFrame::Close => return false,
        }
        true
    }

    pub async fn set_input(&mut self, text: String) {
        self.session.lock().await.set_input(text);
    }

    /// Send the input box and schedule the assistant's reply
    ///
    /// The reply uses the language active at send time, even if the user
    /// toggles language before it arrives. Blank input sends nothing.
    pub async fn send(&mut self, text: Option<String>) {
        self.reap();

        let (sent, language) = {
            let mut session = self.session.lock().await;
            if let Some(text) = text {
                session.set_input(text);
            }
            (session.submit(), session.language())
        };

        let Some(message) = sent else {
            tracing::debug!(overlay = %self.id, "Ignoring blank chat message");
            return;
        };
        self.emit(ChatEvent::Message { message });

        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        let delay = self.timing.reply_delay;
        self.tasks.spawn(async move {
            tokio::time::sleep(delay).await;
            let message = session
                .lock()
                .await
                .push_reply(language, &mut StdRng::from_entropy());
            let _ = events.send(ChatEvent::Message { message });
        });
    }

    /// Start or stop a simulated voice capture
    ///
    /// Stopping before the capture completes cancels it; the input box is
    /// left as it was.
    pub async fn toggle_voice(&mut self) {
        self.reap();

        let (listening, language) = {
            let mut session = self.session.lock().await;
            (session.toggle_listening(), session.language())
        };
        self.emit(ChatEvent::Listening { listening });

        if !listening {
            if let Some(capture) = self.voice.take() {
                capture.abort();
                tracing::debug!(overlay = %self.id, "Voice capture cancelled");
            }
            return;
        }

        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        let delay = self.timing.voice_delay;
        let capture = self.tasks.spawn(async move {
            tokio::time::sleep(delay).await;
            let text = {
                let mut session = session.lock().await;
                if !session.is_listening() {
                    return;
                }
                session
                    .complete_voice_capture(language, &mut StdRng::from_entropy())
                    .to_string()
            };
            let _ = events.send(ChatEvent::VoiceInput { text });
            let _ = events.send(ChatEvent::Listening { listening: false });
        });
        self.voice = Some(capture);
    }

    /// Switch the chat between English and Hindi
    pub async fn toggle_language(&mut self) {
        let language = {
            let mut session = self.session.lock().await;
            let language = session.language().toggled();
            session.set_language(language);
            language
        };
        tracing::debug!(overlay = %self.id, %language, "Chat language toggled");
        self.emit(ChatEvent::Language { language });
    }

    /// Report a problem to the client without closing the overlay
    pub fn report(&self, error: ErrorDetail) {
        self.emit(ChatEvent::Error { error });
    }

    /// Close the overlay, cancelling pending replies and voice captures
    pub fn close(mut self) {
        let pending = self.tasks.len();
        self.tasks.abort_all();
        tracing::info!(overlay = %self.id, pending, "Chat overlay closed");
    }

    fn emit(&self, event: ChatEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!(overlay = %self.id, "Chat event dropped, receiver gone");
        }
    }

    /// Drop bookkeeping for tasks that already finished
    fn reap(&mut self) {
        while self.tasks.try_join_next().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::i18n::CHAT;
    use tokio::time::Instant;

    fn open(language: Language) -> (ChatOverlay, mpsc::UnboundedReceiver<ChatEvent>) {
        let (overlay, mut events) = ChatOverlay::open(language, ChatTiming::default());
        match events.try_recv() {
            Ok(ChatEvent::Snapshot { session }) => assert_eq!(session.messages().len(), 1),
            other => panic!("expected snapshot, got {:?}", other),
        }
        (overlay, events)
    }

    fn sent_text(event: ChatEvent) -> (String, bool) {
        match event {
            ChatEvent::Message { message } => (message.text, message.is_user),
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_client_frames_parse() {
        let frame: ClientFrame = serde_json::from_str(r#"{"type":"send"}"#).unwrap();
        assert_eq!(frame, ClientFrame::Send { text: None });

        let frame: ClientFrame =
            serde_json::from_str(r#"{"type":"input","text":"hello"}"#).unwrap();
        assert_eq!(
            frame,
            ClientFrame::Input {
                text: "hello".to_string()
            }
        );

        let frame: ClientFrame = serde_json::from_str(r#"{"type":"toggle_voice"}"#).unwrap();
        assert_eq!(frame, ClientFrame::ToggleVoice);
    }

    #[test]
    fn test_events_are_tagged() {
        let json = serde_json::to_value(ChatEvent::Listening { listening: true }).unwrap();
        assert_eq!(json["type"], "listening");
        assert_eq!(json["listening"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_one_second() {
        let (mut overlay, mut events) = open(Language::English);

        overlay.send(Some("When should I sow wheat?".to_string())).await;
        let (text, is_user) = sent_text(events.recv().await.unwrap());
        assert!(is_user);
        assert_eq!(text, "When should I sow wheat?");

        let start = Instant::now();
        let (reply, is_user) = sent_text(events.recv().await.unwrap());
        let waited = start.elapsed();

        assert!(!is_user);
        assert!(waited >= Duration::from_millis(1000));
        assert!(waited < Duration::from_millis(1100));
        assert!(CHAT.get(Language::English).responses.iter().any(|r| *r == reply));
        assert_eq!(overlay.snapshot().await.messages().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_message_is_ignored() {
        let (mut overlay, mut events) = open(Language::English);

        overlay.send(Some("   ".to_string())).await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(events.try_recv().is_err());
        assert_eq!(overlay.snapshot().await.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_keeps_language_of_send_time() {
        let (mut overlay, mut events) = open(Language::English);

        overlay.send(Some("hello".to_string())).await;
        overlay.toggle_language().await;
        events.recv().await.unwrap();
        assert!(matches!(
            events.recv().await,
            Some(ChatEvent::Language {
                language: Language::Hindi
            })
        ));

        let (reply, _) = sent_text(events.recv().await.unwrap());
        assert!(CHAT.get(Language::English).responses.iter().any(|r| *r == reply));
    }

    #[tokio::test(start_paused = true)]
    async fn test_voice_capture_fills_input_after_two_seconds() {
        let (mut overlay, mut events) = open(Language::Hindi);

        overlay.toggle_voice().await;
        assert!(matches!(
            events.recv().await,
            Some(ChatEvent::Listening { listening: true })
        ));

        let start = Instant::now();
        let heard = match events.recv().await {
            Some(ChatEvent::VoiceInput { text }) => text,
            other => panic!("expected voice input, got {:?}", other),
        };
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(2000));
        assert!(waited < Duration::from_millis(2100));
        assert!(CHAT.get(Language::Hindi).samples.iter().any(|s| *s == heard));

        assert!(matches!(
            events.recv().await,
            Some(ChatEvent::Listening { listening: false })
        ));
        let session = overlay.snapshot().await;
        assert_eq!(session.input(), heard);
        assert!(!session.is_listening());
    }

    #[tokio::test(start_paused = true)]
    async fn test_voice_capture_keeps_language_of_start() {
        let (mut overlay, mut events) = open(Language::Hindi);

        overlay.toggle_voice().await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        overlay.toggle_language().await;
        events.recv().await.unwrap();
        assert!(matches!(
            events.recv().await,
            Some(ChatEvent::Language {
                language: Language::English
            })
        ));

        let heard = match events.recv().await {
            Some(ChatEvent::VoiceInput { text }) => text,
            other => panic!("expected voice input, got {:?}", other),
        };
        assert!(CHAT.get(Language::Hindi).samples.iter().any(|s| *s == heard));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopping_voice_cancels_capture() {
        let (mut overlay, mut events) = open(Language::English);
        overlay.set_input("typed".to_string()).await;

        overlay.toggle_voice().await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        overlay.toggle_voice().await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }
        assert_eq!(seen.len(), 2);
        assert!(seen
            .iter()
            .all(|event| matches!(event, ChatEvent::Listening { .. })));
        assert_eq!(overlay.snapshot().await.input(), "typed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_pending_reply() {
        let (mut overlay, mut events) = open(Language::English);

        overlay.send(Some("hello".to_string())).await;
        overlay.toggle_voice().await;
        events.recv().await.unwrap();
        events.recv().await.unwrap();

        overlay.close();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(events.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_reports_close() {
        let (mut overlay, _events) = open(Language::English);
        assert!(overlay.handle(ClientFrame::ToggleLanguage).await);
        assert!(!overlay.handle(ClientFrame::Close).await);
    }
}
