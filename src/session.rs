use crate::animation::pingpong::PingPong;
use crate::color::palette::Palette;
use crate::config::RevealConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Affine, FrameIndex, FrameRange};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::path::RevealPath;
use crate::layout::fit::fit_transform;
use crate::render::cpu::CpuSurface;
use crate::render::frame::FrameRGBA;
use crate::render::reveal::RevealRenderer;

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub frames_rendered: u64,
    /// Sum of segments drawn across all frames.
    pub segments_drawn: u64,
}

/// A validated config with everything per-frame rendering needs already built.
///
/// Construction parses and flattens the path once; each frame then only evaluates the timer and
/// replays the revealed segments into the raster surface.
#[derive(Debug)]
pub struct RevealSession {
    config: RevealConfig,
    path: RevealPath,
    renderer: RevealRenderer,
    timer: PingPong,
    transform: Affine,
    surface: CpuSurface,
}

impl RevealSession {
    #[tracing::instrument(skip(config), fields(canvas = ?config.canvas, fps = ?config.fps))]
    pub fn new(config: RevealConfig) -> RevealResult<Self> {
        config.validate()?;

        let path = RevealPath::parse(&config.path_d)?;
        let flattened = path.flatten(config.tolerance, config.flatten_method)?;
        let palette = Palette::new(config.palette.clone())?.with_space(config.interpolation);
        let renderer = RevealRenderer::new(flattened, palette, config.stroke_width)?;
        let timer = PingPong::new(config.duration_ms, config.ease)?;
        let transform = fit_transform(path.bounds(), config.canvas, config.padding)?;
        let surface = CpuSurface::new(config.canvas, config.background)?.with_transform(transform);

        tracing::info!(
            segments = renderer.path().len(),
            length = path.total_length(),
            "reveal session ready"
        );

        Ok(Self {
            config,
            path,
            renderer,
            timer,
            transform,
            surface,
        })
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn path(&self) -> &RevealPath {
        &self.path
    }

    pub fn renderer(&self) -> &RevealRenderer {
        &self.renderer
    }

    pub fn timer(&self) -> &PingPong {
        &self.timer
    }

    /// Path space to pixel space.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn progress_at(&self, frame: FrameIndex) -> f64 {
        self.timer.value_at_frame(frame, self.config.fps)
    }

    /// Frames `[0, cycles * cycle_frames)`: whole forward-and-back cycles at the configured fps.
    pub fn cycle_range(&self, cycles: u64) -> FrameRange {
        self.timer.cycles_range(self.config.fps, cycles)
    }

    /// Rasterize the reveal at an explicit progress value.
    pub fn render_progress(&mut self, progress: f64) -> FrameRGBA {
        self.render_counted(progress).0
    }

    pub fn render_frame(&mut self, frame: FrameIndex) -> FrameRGBA {
        let progress = self.progress_at(frame);
        self.render_progress(progress)
    }

    fn render_counted(&mut self, progress: f64) -> (FrameRGBA, usize) {
        self.surface.begin_frame();
        let drawn = self.renderer.render(progress, &mut self.surface);
        (self.surface.finish_frame(), drawn)
    }

    /// Render `range` in order into `sink`, calling `begin` and `end` around the frames.
    #[tracing::instrument(skip(self, sink), fields(start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> RevealResult<RenderStats> {
        if range.is_empty() {
            return Err(RevealError::invalid_argument(
                "render_range range must be non-empty",
            ));
        }

        sink.begin(SinkConfig {
            width: self.config.canvas.width,
            height: self.config.canvas.height,
            fps: self.config.fps,
        })?;

        let mut stats = RenderStats {
            frames_total: range.len_frames(),
            ..RenderStats::default()
        };
        for idx in range.iter() {
            let progress = self.progress_at(idx);
            let (frame, drawn) = self.render_counted(progress);
            sink.push_frame(idx, &frame)?;
            stats.frames_rendered += 1;
            stats.segments_drawn += drawn as u64;
            tracing::trace!(frame = idx.0, progress, drawn, "frame rendered");
        }
        sink.end()?;

        tracing::debug!(frames = stats.frames_rendered, "range rendered");
        Ok(stats)
    }
}
