//! Frame sinks.
//!
//! Sinks consume rendered frames in increasing frame order and are driven by
//! `RevealSession::render_range`.

pub(crate) mod ffmpeg;
pub(crate) mod png;
pub(crate) mod sink;
