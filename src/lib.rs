//! ytembed library

pub mod embed;
pub mod page;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use embed::{embed_url, render_embed, EmbedFrame, EmbedState, VideoId};
pub use page::render_page;
pub use server::{router, EmbedServer};
pub use utils::{AppSettings, YtEmbedError};
