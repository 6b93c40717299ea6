//! Two-state render model: no identifier, or a frame ready to show

use super::frame::EmbedFrame;
use super::models::VideoId;

/// Result of one render pass over the current input value.
///
/// Re-evaluated from scratch on every pass; nothing carries over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedState {
    Empty,
    Ready(EmbedFrame),
}

impl EmbedState {
    pub fn from_input(input: &str) -> Self {
        match VideoId::new(input) {
            Some(id) => EmbedState::Ready(EmbedFrame::new(&id)),
            None => EmbedState::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, EmbedState::Empty)
    }

    pub fn frame(&self) -> Option<&EmbedFrame> {
        match self {
            EmbedState::Ready(frame) => Some(frame),
            EmbedState::Empty => None,
        }
    }

    /// Iframe fragment, or `None` when there is nothing to embed.
    pub fn render(&self) -> Option<String> {
        self.frame().map(EmbedFrame::to_html)
    }
}

/// Render the embed fragment for raw input in one call.
pub fn render_embed(input: &str) -> Option<String> {
    EmbedState::from_input(input).render()
}
