pub mod news;

pub use news::*;

// Console glyphs used by the report
pub const EMOJI_BELL: &str = "🔔";
pub const EMOJI_CHECK: &str = "✔️";
pub const EMOJI_CROSS: &str = "❌";
pub const EMOJI_WARNING: &str = "❗";
pub const EMOJI_TITLE: &str = "📌";
pub const EMOJI_SOURCE: &str = "🏢";
pub const EMOJI_DATE: &str = "📅";
pub const EMOJI_LINK: &str = "🔗";
