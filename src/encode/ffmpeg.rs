use crate::color::rgba::Color;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::frame::FrameRGBA;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    /// Replace an existing file at `out_path`.
    pub overwrite: bool,
    /// Color behind the reveal. H.264 has no alpha, so every pixel is composited over it; a
    /// translucent background is itself composited over black.
    pub background: Color,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background: Color::rgb(0.0, 0.0, 0.0),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// A running `ffmpeg` reading raw RGBA from its stdin.
struct EncoderProcess {
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
}

impl EncoderProcess {
    fn spawn(args: &[String]) -> RevealResult<Self> {
        let mut child = Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RevealError::encode(format!("failed to spawn ffmpeg: {e}")))?;

        let stdin = child.stdin.take();
        let stderr = child.stderr.take().map(|mut pipe| {
            // ffmpeg stalls once its stderr pipe fills.
            std::thread::spawn(move || {
                let mut bytes = Vec::new();
                pipe.read_to_end(&mut bytes)?;
                Ok(bytes)
            })
        });
        if stdin.is_none() {
            return Err(RevealError::encode("ffmpeg stdin is not piped"));
        }
        Ok(Self {
            child,
            stdin,
            stderr,
        })
    }

    fn write_frame(&mut self, bytes: &[u8]) -> RevealResult<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| RevealError::encode("ffmpeg stdin already closed"))?;
        stdin
            .write_all(bytes)
            .map_err(|e| RevealError::encode(format!("failed to write frame to ffmpeg: {e}")))
    }

    /// Close stdin, wait for exit, and surface ffmpeg's stderr on failure.
    fn finish(mut self) -> RevealResult<()> {
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| RevealError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let log = match self.stderr.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| RevealError::encode("ffmpeg stderr reader panicked"))?
                .map_err(|e| RevealError::encode(format!("failed to read ffmpeg stderr: {e}")))?,
            None => Vec::new(),
        };
        if status.success() {
            return Ok(());
        }
        Err(RevealError::encode(format!(
            "ffmpeg exited with {status}: {}",
            String::from_utf8_lossy(&log).trim()
        )))
    }
}

/// Encodes frames to an H.264 MP4 by piping them through a system `ffmpeg`.
///
/// Dimensions must be even for `yuv420p`.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    background: [u8; 3],
    process: Option<EncoderProcess>,
    cfg: Option<SinkConfig>,
    opaque: Vec<u8>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        let bg = opts.background.to_rgba8_premul();
        Self {
            background: [bg.r, bg.g, bg.b],
            opts,
            process: None,
            cfg: None,
            opaque: Vec::new(),
            last_idx: None,
        }
    }

    pub fn opts(&self) -> &FfmpegSinkOpts {
        &self.opts
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> RevealResult<()> {
        validate_sink_config(&cfg)?;
        let out = &self.opts.out_path;
        ensure_parent_dir(out)?;
        if !self.opts.overwrite && out.exists() {
            return Err(RevealError::invalid_argument(format!(
                "output file '{}' already exists",
                out.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(RevealError::encode(
                "mp4 output needs ffmpeg on PATH, and it was not found",
            ));
        }

        let args = encoder_args(&cfg, &self.opts);
        tracing::debug!(out = %out.display(), ?args, "starting ffmpeg");
        self.process = Some(EncoderProcess::spawn(&args)?);
        self.opaque = vec![0; cfg.width as usize * cfg.height as usize * 4];
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> RevealResult<()> {
        let (Some(cfg), Some(process)) = (self.cfg, self.process.as_mut()) else {
            return Err(RevealError::encode("ffmpeg sink not started"));
        };
        if self.last_idx.is_some_and(|last| idx <= last) {
            return Err(RevealError::encode(format!(
                "frame {} pushed out of order",
                idx.0
            )));
        }
        if (frame.width, frame.height) != (cfg.width, cfg.height)
            || frame.data.len() != self.opaque.len()
        {
            return Err(RevealError::invalid_argument(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        self.last_idx = Some(idx);

        composite_over(&mut self.opaque, &frame.premultiplied_rgba8(), self.background);
        process.write_frame(&self.opaque)
    }

    fn end(&mut self) -> RevealResult<()> {
        let process = self
            .process
            .take()
            .ok_or_else(|| RevealError::encode("ffmpeg sink not started"))?;
        self.cfg = None;
        process.finish()?;
        tracing::debug!(
            out = %self.opts.out_path.display(),
            frames = self.last_idx.map_or(0, |i| i.0 + 1),
            "ffmpeg finished"
        );
        Ok(())
    }
}

pub(crate) fn validate_sink_config(cfg: &SinkConfig) -> RevealResult<()> {
    if cfg.fps.num == 0 || cfg.fps.den == 0 {
        return Err(RevealError::invalid_argument("fps must be non-zero"));
    }
    if cfg.width == 0 || cfg.height == 0 {
        return Err(RevealError::invalid_argument(format!(
            "video size must be non-zero, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(RevealError::invalid_argument(format!(
            "video size must be even for yuv420p, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    Ok(())
}

/// Command line for an ffmpeg reading `rgba` rawvideo on stdin and writing H.264.
pub(crate) fn encoder_args(cfg: &SinkConfig, opts: &FfmpegSinkOpts) -> Vec<String> {
    let mut args: Vec<String> = vec![
        (if opts.overwrite { "-y" } else { "-n" }).into(),
        "-loglevel".into(),
        "error".into(),
        // input
        "-f".into(),
        "rawvideo".into(),
        "-pix_fmt".into(),
        "rgba".into(),
        "-s".into(),
        format!("{}x{}", cfg.width, cfg.height),
        "-r".into(),
        format!("{}/{}", cfg.fps.num, cfg.fps.den),
        "-i".into(),
        "pipe:0".into(),
        // output
        "-an".into(),
        "-c:v".into(),
        "libx264".into(),
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-movflags".into(),
        "+faststart".into(),
    ];
    args.push(opts.out_path.to_string_lossy().into_owned());
    args
}

/// Source-over of premultiplied `src` onto a premultiplied opaque `background`, written as
/// opaque RGBA8 into `dst`. Buffers must be the same length.
pub(crate) fn composite_over(dst: &mut [u8], src: &[u8], background: [u8; 3]) {
    for (out, px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let cover = 255 - u16::from(px[3]);
        for ((o, &s), &b) in out.iter_mut().zip(px).zip(&background) {
            *o = (u16::from(s) + mul_div255_u16(u16::from(b), cover)).min(255) as u8;
        }
        out[3] = 255;
    }
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> RevealResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            use anyhow::Context as _;
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory '{}'", parent.display())
            })?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// `true` when `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
