//! Chat transcript held by the Safari window, plus inline markup parsing for reply rendering.

use serde::Serialize;

use crate::{
    knowledge::PERSONAL_INFO,
    response::{answer, ResponseChooser},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Who wrote a chat message.
pub enum ChatAuthor {
    /// The assistant.
    Bot,
    /// The visitor.
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One chat bubble.
pub struct ChatMessage {
    /// Transcript-unique id, increasing in insertion order.
    pub id: u64,
    /// Author.
    pub author: ChatAuthor,
    /// Message text (reply markup for bot messages).
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered chat history. Starts with a bot welcome line.
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(
            ChatAuthor::Bot,
            format!(
                "Hi! I'm {}'s portfolio assistant. Ask me about skills, projects, or how to get in touch!",
                PERSONAL_INFO.name
            ),
        );
        transcript
    }
}

impl ChatTranscript {
    /// Messages in display order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, author: ChatAuthor, text: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            author,
            text,
        });
        self.next_id += 1;
    }

    /// Appends the visitor's message and the assistant's reply.
    ///
    /// Returns `false` and leaves the transcript untouched when `input` is blank.
    pub fn submit(&mut self, input: &str, chooser: &mut impl ResponseChooser) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        let reply = answer(input, chooser);
        self.push(ChatAuthor::User, input.to_string());
        self.push(ChatAuthor::Bot, reply);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A run of reply text with uniform emphasis.
pub enum InlineSegment {
    /// Regular text.
    Text(String),
    /// Text that was wrapped in `**`.
    Bold(String),
}

/// Splits one reply line into plain and bold runs.
///
/// An unmatched trailing `**` is kept as literal text.
pub fn parse_inline(line: &str) -> Vec<InlineSegment> {
    let mut segments = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            segments.push(InlineSegment::Text(rest[..start].to_string()));
        }
        segments.push(InlineSegment::Bold(after[..end].to_string()));
        rest = &after[end + 2..];
    }

    if !rest.is_empty() {
        segments.push(InlineSegment::Text(rest.to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::response::FixedChooser;

    #[test]
    fn transcript_starts_with_welcome() {
        let transcript = ChatTranscript::default();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].author, ChatAuthor::Bot);
        assert!(transcript.messages()[0].text.contains("Suharshit Singh"));
    }

    #[test]
    fn submit_appends_question_and_reply() {
        let mut transcript = ChatTranscript::default();
        assert!(transcript.submit("hi", &mut FixedChooser(0)));

        let messages = transcript.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].author, ChatAuthor::User);
        assert_eq!(messages[1].text, "hi");
        assert_eq!(messages[2].author, ChatAuthor::Bot);
        assert_eq!(
            messages.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut transcript = ChatTranscript::default();
        assert!(!transcript.submit("   ", &mut FixedChooser(0)));
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn inline_markup_splits_bold_runs() {
        assert_eq!(
            parse_inline("• **Email:** me@example.com"),
            vec![
                InlineSegment::Text("• ".to_string()),
                InlineSegment::Bold("Email:".to_string()),
                InlineSegment::Text(" me@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        assert_eq!(
            parse_inline("5 ** 2"),
            vec![InlineSegment::Text("5 ** 2".to_string())]
        );
        assert!(parse_inline("").is_empty());
    }
}
