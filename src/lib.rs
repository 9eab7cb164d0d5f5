//! pathreveal draws an SVG path progressively, stroked with a gradient that follows the path.
//!
//! The path is flattened once into straight segments, each tagged with the fraction of the
//! total length at which it starts and ends. Every frame, the segments whose start lies before
//! the current progress are drawn as short gradient lines whose colors come from a palette
//! sampled at those fractions. Progress runs forward and back on a ping-pong timer.
//!
//! - Build a [`RevealConfig`] (or use [`RevealConfig::hello`])
//! - Create a [`RevealSession`]
//! - Render single frames or stream a range into a [`FrameSink`]
//!
//! The lower-level pieces ([`RevealPath`], [`flatten`], [`Palette`], [`RevealRenderer`],
//! [`PingPong`], [`ProgressDriver`]) are usable on their own against any [`DrawSurface`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod encode;
pub(crate) mod geometry;
pub(crate) mod layout;
pub mod presets;
pub(crate) mod render;
pub(crate) mod session;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Line, Point, Rect, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{RevealError, RevealResult};
pub use crate::foundation::math::Lerp;

pub use crate::animation::driver::{Clock, ManualClock, ProgressDriver, SystemClock};
pub use crate::animation::ease::Ease;
pub use crate::animation::pingpong::PingPong;
pub use crate::color::palette::{InterpolationSpace, Palette, color_at};
pub use crate::color::rgba::Color;
pub use crate::config::RevealConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::geometry::flatten::{
    DEFAULT_TOLERANCE, FlattenMethod, FlattenedPath, MIN_TOLERANCE, Segment, flatten, flatten_lines,
};
pub use crate::geometry::measure::{DEFAULT_ARCLEN_ACCURACY, arc_length, polyline_length, total_length};
pub use crate::geometry::path::RevealPath;
pub use crate::layout::fit::{Padding, fit_transform};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::frame::FrameRGBA;
pub use crate::render::reveal::RevealRenderer;
pub use crate::render::surface::{DrawSurface, GradientLine, RecordingSurface};
pub use crate::session::{RenderStats, RevealSession};
