//! WebSocket endpoint for the chat assistant overlay

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};

use super::LanguageQuery;
use crate::error::AppError;
use crate::services::chat::{ChatEvent, ChatOverlay, ChatTiming, ClientFrame};
use crate::AppState;

/// Upgrade to a chat session; one overlay lives as long as the socket
pub async fn chat_socket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let language = query.language();
    let timing = ChatTiming::from(&state.config.chat);
    ws.on_upgrade(move |socket| run_overlay(socket, language, timing))
}

async fn run_overlay(mut socket: WebSocket, language: shared::Language, timing: ChatTiming) {
    let (mut overlay, mut events) = ChatOverlay::open(language, timing);
    let overlay_id = overlay.id();

    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                if let Err(e) = send_event(&mut socket, &event).await {
                    tracing::debug!(overlay = %overlay_id, "Chat socket write failed: {}", e);
                    break;
                }
            }
            frame = socket.recv() => match frame {
                Some(Ok(Message::Text(text))) => {
                    if !dispatch_text(&mut overlay, &text).await {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::debug!(overlay = %overlay_id, "Chat socket read failed: {}", e);
                    break;
                }
            },
        }
    }

    overlay.close();
}

/// Apply one text frame; false once the client asked to close
///
/// Frames that do not parse are answered with an `error` event and the
/// overlay stays open.
async fn dispatch_text(overlay: &mut ChatOverlay, text: &str) -> bool {
    match serde_json::from_str::<ClientFrame>(text) {
        Ok(frame) => overlay.handle(frame).await,
        Err(e) => {
            let error = AppError::ValidationError(format!("Unreadable chat frame: {}", e));
            overlay.report(error.detail());
            true
        }
    }
}

async fn send_event(socket: &mut WebSocket, event: &ChatEvent) -> Result<(), AppError> {
    let json = serde_json::to_string(event).map_err(|e| AppError::Internal(e.to_string()))?;
    socket
        .send(Message::Text(json))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use shared::Language;

    fn open() -> (ChatOverlay, tokio::sync::mpsc::UnboundedReceiver<ChatEvent>) {
        let (overlay, mut events) = ChatOverlay::open(Language::English, ChatTiming::default());
        assert!(matches!(events.try_recv(), Ok(ChatEvent::Snapshot { .. })));
        (overlay, events)
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreadable_frame_reports_error_and_stays_open() {
        let (mut overlay, mut events) = open();

        assert!(dispatch_text(&mut overlay, "not json").await);
        match events.try_recv() {
            Ok(ChatEvent::Error { error }) => {
                assert_eq!(error.code, "VALIDATION_ERROR");
                assert!(error.message_en.contains("Unreadable chat frame"));
            }
            other => panic!("expected error event, got {:?}", other),
        }

        assert!(dispatch_text(&mut overlay, r#"{"type":"shout"}"#).await);
        assert!(matches!(events.try_recv(), Ok(ChatEvent::Error { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_frame_ends_overlay() {
        let (mut overlay, mut events) = open();

        assert!(dispatch_text(&mut overlay, r#"{"type":"toggle_language"}"#).await);
        assert!(matches!(
            events.try_recv(),
            Ok(ChatEvent::Language {
                language: Language::Hindi
            })
        ));

        assert!(!dispatch_text(&mut overlay, r#"{"type":"close"}"#).await);
        overlay.close();
        assert!(events.recv().await.is_none());
    }
}
