//! Embed rendering: identifier in, iframe fragment out

pub mod frame;
pub mod models;
pub mod state;

pub use frame::{
    embed_url, escape_attr, EmbedFrame, EMBED_PREFIX, EMBED_SUFFIX, FRAME_HEIGHT, FRAME_WIDTH,
};
pub use models::VideoId;
pub use state::{render_embed, EmbedState};
