//! Ordered, append-only message log.
//!
//! Every append returns a [`MessageHandle`] that the caller can later use
//! to rewrite that one entry's text in place. In practice only the
//! "Thinking…" placeholder is ever amended; everything else is write-once.

use sitewire_types::message::{Message, Origin};

/// Opaque reference to one transcript entry.
///
/// Handles stay valid forever: the transcript is append-only, so indices
/// never shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle(usize);

/// The message log backing the assistant view.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    /// Index the view is scrolled to; follows the newest entry on append.
    scroll_anchor: Option<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its handle.
    ///
    /// The scroll anchor moves to the new entry: the view auto-scrolls to
    /// the newest message on every append (but not on amend).
    pub fn push(&mut self, origin: Origin, text: impl Into<String>) -> MessageHandle {
        let index = self.messages.len();
        self.messages.push(Message::new(origin, text));
        self.scroll_anchor = Some(index);
        MessageHandle(index)
    }

    /// Rewrite the text of a previously appended entry in place.
    ///
    /// Origin and timestamp are untouched and no new entry is created.
    /// Returns false if the handle does not refer to an entry (only
    /// possible with a handle from a different transcript).
    pub fn amend(&mut self, handle: MessageHandle, text: impl Into<String>) -> bool {
        match self.messages.get_mut(handle.0) {
            Some(message) => {
                message.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Index of the entry the view is currently scrolled to.
    pub fn scroll_anchor(&self) -> Option<usize> {
        self.scroll_anchor
    }
}
