//! Iframe description and HTML output

use super::models::VideoId;

/// Embed endpoint prefix; the identifier is appended directly.
pub const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

/// Query suffix that disables related-video suggestions.
pub const EMBED_SUFFIX: &str = "?rel=0";

pub const FRAME_WIDTH: u32 = 700;
pub const FRAME_HEIGHT: u32 = 400;

/// Build the embed URL for an identifier.
///
/// Pure concatenation: the identifier is not encoded or validated, and a bad
/// one is left for the player to report.
pub fn embed_url(id: &VideoId) -> String {
    let mut url =
        String::with_capacity(EMBED_PREFIX.len() + id.as_str().len() + EMBED_SUFFIX.len());
    url.push_str(EMBED_PREFIX);
    url.push_str(id.as_str());
    url.push_str(EMBED_SUFFIX);
    url
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Embedded player frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFrame {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub frameborder: u32,
    pub allowfullscreen: bool,
}

impl EmbedFrame {
    pub fn new(id: &VideoId) -> Self {
        Self {
            src: embed_url(id),
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            frameborder: 0,
            allowfullscreen: true,
        }
    }

    /// Render the `<iframe>` element.
    pub fn to_html(&self) -> String {
        let fullscreen = if self.allowfullscreen { " allowfullscreen" } else { "" };
        format!(
            r#"<iframe width="{}" height="{}" src="{}" frameborder="{}"{}></iframe>"#,
            self.width,
            self.height,
            escape_attr(&self.src),
            self.frameborder,
            fullscreen
        )
    }
}
