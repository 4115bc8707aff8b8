use crate::events::{Annotation, ConversationTurn, DisplayMessage, MessageOrigin, Screen};
use crate::gateway::CompletionGateway;
use crate::prompts;

/// Owns the whole of a session: the screen state machine, the user-visible
/// transcript, the model-facing turn sequence, and the input buffer. Generic
/// over the gateway so the state machine tests without a network.
///
/// The transcript and the turn sequence grow in lockstep, with one exception:
/// the fixed reflection/decision prompts become turns but never transcript
/// entries.
pub struct Controller<G> {
    gateway: G,
    screen: Screen,
    messages: Vec<DisplayMessage>,
    turns: Vec<ConversationTurn>,
    awaiting_reply: bool,
    input: String,
    cursor: usize,
}

impl<G: CompletionGateway> Controller<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            screen: Screen::Welcome,
            messages: Vec::new(),
            turns: Vec::new(),
            awaiting_reply: false,
            input: String::new(),
            cursor: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn messages(&self) -> &[DisplayMessage] {
        &self.messages
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Submit the user's text as the next turn and wait for the reply.
    /// Empty trimmed text is a no-op. A submission while a call is pending is
    /// rejected outright rather than queued or interleaved.
    pub async fn submit_user_text(&mut self, text: String) {
        if text.trim().is_empty() || self.awaiting_reply {
            return;
        }

        self.messages.push(DisplayMessage::user(text.clone()));
        self.turns.push(ConversationTurn::user(text));
        self.clear_input();
        self.awaiting_reply = true;

        let reply = self
            .gateway
            .complete(prompts::SYSTEM_PROMPT, &self.turns)
            .await;

        self.messages.push(DisplayMessage::assistant(reply.clone(), None));
        self.turns.push(ConversationTurn::assistant(reply));
        self.awaiting_reply = false;
    }

    /// Whether the reflection affordance is offered. Not an error state below
    /// the threshold; the action simply is not available yet.
    pub fn can_request_reflection(&self) -> bool {
        self.user_message_count() >= 2
    }

    /// Ask for a reflection over everything shared so far. The prompt goes to
    /// the model as a user turn but never appears in the transcript. The
    /// screen becomes Reflect once the call settles, fallback text included.
    pub async fn request_reflection(&mut self) {
        if !self.can_request_reflection() || self.awaiting_reply {
            return;
        }

        self.send_fixed_prompt(prompts::REFLECTION_PROMPT, Annotation::Reflection)
            .await;
        self.screen = Screen::Reflect;
    }

    /// Ask for a best/worst/most-likely decision framing. Same shape as the
    /// reflection; lands on the Decide screen on settlement.
    pub async fn request_decision_framework(&mut self) {
        if self.awaiting_reply {
            return;
        }

        self.send_fixed_prompt(prompts::DECISION_PROMPT, Annotation::Decision)
            .await;
        self.screen = Screen::Decide;
    }

    async fn send_fixed_prompt(&mut self, prompt: &str, annotation: Annotation) {
        self.turns.push(ConversationTurn::user(prompt));
        self.awaiting_reply = true;

        let reply = self
            .gateway
            .complete(prompts::SYSTEM_PROMPT, &self.turns)
            .await;

        self.messages
            .push(DisplayMessage::assistant(reply.clone(), Some(annotation)));
        self.turns.push(ConversationTurn::assistant(reply));
        self.awaiting_reply = false;
    }

    /// Welcome -> Unload, the "Talk to Clear" affordance
    pub fn begin_unload(&mut self) {
        if self.screen == Screen::Welcome {
            self.screen = Screen::Unload;
        }
    }

    /// Back to the chat phase without touching any data
    pub fn return_to_unload(&mut self) {
        self.screen = Screen::Unload;
    }

    /// "Done for now": back to Welcome with both sequences and the input
    /// buffer cleared in one step. No partial reset is observable.
    pub fn reset_session(&mut self) {
        self.screen = Screen::Welcome;
        self.messages.clear();
        self.turns.clear();
        self.clear_input();
    }

    fn user_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.origin == MessageOrigin::User)
            .count()
    }

    // Input buffer editing. Owned here so the full session state lives in one
    // place; the composer widget only maps keys onto these.

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Hand the buffer over for submission, leaving it empty
    pub fn take_input(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.input)
    }

    pub fn input_insert(&mut self, c: char) {
        self.input.insert(self.byte_cursor(), c);
        self.cursor += 1;
    }

    pub fn input_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_cursor();
            self.input.remove(at);
        }
    }

    pub fn input_delete(&mut self) {
        if self.cursor < self.input.chars().count() {
            let at = self.byte_cursor();
            self.input.remove(at);
        }
    }

    pub fn input_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn input_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn input_home(&mut self) {
        self.cursor = 0;
    }

    pub fn input_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Cursor is tracked in chars; map it to a byte offset for edits
    fn byte_cursor(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
