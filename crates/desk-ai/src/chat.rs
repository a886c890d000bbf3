//! AI study-buddy conversation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use desk_core::entities::ChatMessage;

use crate::fail_soft::FailSoft;
use crate::generator::TextGenerator;
use crate::pending::PendingGuard;

/// System instruction sent with every chat turn.
pub const STUDY_BUDDY_INSTRUCTION: &str = "You are a friendly and knowledgeable university study buddy. \
Explain complex topics simply, provide helpful examples, and always encourage the student. \
Keep your responses concise and well-formatted.";

/// Result of [`ChatSession::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The text was empty or whitespace; nothing happened.
    Empty,
    /// Another send is in flight; nothing happened.
    Busy,
    /// A user turn and this model turn were appended.
    Replied(ChatMessage),
}

/// Append-only conversation log with a single in-flight request.
///
/// `send` takes `&self`, so one session can be shared between tasks; a send
/// that arrives while another is pending is rejected with
/// [`SendOutcome::Busy`].
#[derive(Debug)]
pub struct ChatSession<G> {
    generator: FailSoft<G>,
    log: Mutex<Vec<ChatMessage>>,
    pending: AtomicBool,
}

impl<G: TextGenerator> ChatSession<G> {
    pub const fn new(generator: FailSoft<G>) -> Self {
        Self {
            generator,
            log: Mutex::new(Vec::new()),
            pending: AtomicBool::new(false),
        }
    }

    /// Send one user message and wait for the model's reply.
    pub async fn send(&self, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Empty;
        }
        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            tracing::debug!("chat request already pending, send rejected");
            return SendOutcome::Busy;
        };

        self.lock_log().push(ChatMessage::user(text));

        let reply = self
            .generator
            .generate(text, Some(STUDY_BUDDY_INSTRUCTION))
            .await;
        let message = ChatMessage::model(reply);
        self.lock_log().push(message.clone());

        SendOutcome::Replied(message)
    }

    /// Snapshot of the conversation so far, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock_log().clone()
    }

    pub fn len(&self) -> usize {
        self.lock_log().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_log().is_empty()
    }

    /// Whether a reply is being waited on.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    fn lock_log(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use desk_core::enums::Role;

    use super::*;
    use crate::error::GenerationError;

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl TextGenerator for Counting {
        async fn generate(
            &self,
            prompt: &str,
            system_instruction: Option<&str>,
        ) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(system_instruction, Some(STUDY_BUDDY_INSTRUCTION));
            Ok(format!("answer to {prompt}"))
        }
    }

    #[tokio::test]
    async fn send_appends_user_then_model_turn() {
        let session = ChatSession::new(FailSoft::new(Counting::default()));
        let outcome = session.send("What is a monad?").await;

        assert_eq!(
            outcome,
            SendOutcome::Replied(ChatMessage::model("answer to What is a monad?"))
        );
        let log = session.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].role, Role::User);
        assert_eq!(log[0].text, "What is a monad?");
        assert_eq!(log[1].role, Role::Model);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn blank_text_is_ignored() {
        let session = ChatSession::new(FailSoft::new(Counting::default()));
        assert_eq!(session.send("").await, SendOutcome::Empty);
        assert_eq!(session.send("  \n\t").await, SendOutcome::Empty);
        assert!(session.is_empty());
        assert_eq!(session.generator.inner().calls.load(Ordering::SeqCst), 0);
    }
}
