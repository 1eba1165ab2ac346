use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::time::Duration;

use crate::codec::file::ensure_parent_dir;
use crate::foundation::error::{PixmorphError, PixmorphResult};
use crate::raster::buffer::Image;
use crate::render::renderer::{Renderer, check_surface};

/// Options for [`FfmpegRenderer`].
#[derive(Clone, Debug)]
pub struct FfmpegConfig {
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// How long each frame stays on screen. Sets the stream frame rate.
    pub frame_duration: Duration,
    /// Overwrite `out_path` if it already exists.
    pub overwrite: bool,
}

impl FfmpegConfig {
    pub fn new(out_path: impl Into<PathBuf>, frame_duration: Duration) -> Self {
        Self {
            out_path: out_path.into(),
            frame_duration,
            overwrite: true,
        }
    }

    pub fn validate(&self) -> PixmorphResult<()> {
        if self.frame_duration.as_millis() == 0 {
            return Err(PixmorphError::validation(
                "video frame duration must be at least 1ms (set a non-zero frame pause)",
            ));
        }
        Ok(())
    }

    /// Frame rate as an ffmpeg rational, `1000/<ms per frame>`.
    pub fn rate_arg(&self) -> String {
        format!("1000/{}", self.frame_duration.as_millis())
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Streams raw `rgb24` frames into the system `ffmpeg`, producing an H.264 MP4.
///
/// Frame timing is baked into the stream rate, so `pause` does not sleep. The surface size is
/// fixed by the first `prepare_surface`; yuv420p output needs even dimensions.
pub struct FfmpegRenderer {
    cfg: FfmpegConfig,
    surface: Option<(u32, u32)>,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    frames: u64,
}

impl FfmpegRenderer {
    pub fn new(cfg: FfmpegConfig) -> PixmorphResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            surface: None,
            child: None,
            stdin: None,
            frames: 0,
        })
    }

    fn spawn(&mut self, width: u32, height: u32) -> PixmorphResult<()> {
        ensure_parent_dir(&self.cfg.out_path)?;
        if !self.cfg.overwrite && self.cfg.out_path.exists() {
            return Err(PixmorphError::validation(format!(
                "output file '{}' already exists",
                self.cfg.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(PixmorphError::render(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if self.cfg.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgb24",
            "-s",
            &format!("{width}x{height}"),
            "-r",
            &self.cfg.rate_arg(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ])
        .arg(&self.cfg.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            PixmorphError::render(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| PixmorphError::render("failed to open ffmpeg stdin"))?;

        self.child = Some(child);
        self.stdin = Some(stdin);
        Ok(())
    }
}

/// Whether a stream must be started for a `width` x `height` surface.
///
/// A running stream keeps its size: asking for the same size again is a no-op and any other
/// size is rejected. New streams need even dimensions for yuv420p output.
fn needs_stream(current: Option<(u32, u32)>, width: u32, height: u32) -> PixmorphResult<bool> {
    match current {
        Some(size) if size == (width, height) => return Ok(false),
        Some((w, h)) => {
            return Err(PixmorphError::render(format!(
                "ffmpeg stream is {w}x{h}; cannot switch to {width}x{height}"
            )));
        }
        None => {}
    }
    if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
        return Err(PixmorphError::validation(format!(
            "video width/height must be even (required for yuv420p mp4 output), got {width}x{height}"
        )));
    }
    Ok(true)
}

impl Drop for FfmpegRenderer {
    fn drop(&mut self) {
        // Unfinished stream: close stdin so ffmpeg exits, then reap it.
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.wait();
        }
    }
}

impl Renderer for FfmpegRenderer {
    fn prepare_surface(&mut self, width: u32, height: u32) -> PixmorphResult<()> {
        if !needs_stream(self.surface, width, height)? {
            return Ok(());
        }
        self.spawn(width, height)?;
        self.surface = Some((width, height));
        Ok(())
    }

    fn render_frame(&mut self, frame: &Image) -> PixmorphResult<()> {
        check_surface(self.surface, frame)?;
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(PixmorphError::render("ffmpeg renderer is already finalized"));
        };
        stdin.write_all(&frame.to_rgb24()).map_err(|e| {
            PixmorphError::render(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        self.frames += 1;
        Ok(())
    }

    fn pause(&mut self, _duration: Duration) -> PixmorphResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> PixmorphResult<()> {
        drop(self.stdin.take());
        let Some(child) = self.child.take() else {
            return Err(PixmorphError::render("ffmpeg renderer was never started"));
        };
        let output = child.wait_with_output().map_err(|e| {
            PixmorphError::render(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PixmorphError::render(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        tracing::info!(frames = self.frames, path = %self.cfg.out_path.display(), "wrote mp4");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/ffmpeg.rs"]
mod tests;
