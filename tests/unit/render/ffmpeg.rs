use super::*;
use crate::foundation::core::Rgb8;

#[test]
fn zero_frame_duration_is_rejected() {
    let cfg = FfmpegConfig::new("out.mp4", Duration::ZERO);
    assert!(matches!(
        FfmpegRenderer::new(cfg),
        Err(PixmorphError::Validation(_))
    ));
}

#[test]
fn rate_is_derived_from_frame_duration() {
    let cfg = FfmpegConfig::new("out.mp4", Duration::from_millis(500));
    assert_eq!(cfg.rate_arg(), "1000/500");
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = FfmpegConfig::new(dir.path().join("out.mp4"), Duration::from_millis(40));
    let mut r = FfmpegRenderer::new(cfg).unwrap();
    assert!(matches!(
        r.prepare_surface(3, 2),
        Err(PixmorphError::Validation(_))
    ));
    assert!(r.finish().is_err());
}

#[test]
fn stream_size_is_locked_once_started() {
    assert!(needs_stream(None, 16, 16).unwrap());
    assert!(!needs_stream(Some((16, 16)), 16, 16).unwrap());
    assert!(matches!(
        needs_stream(Some((16, 16)), 8, 8),
        Err(PixmorphError::Render(_))
    ));
    // A running stream reports the size clash, not the odd dimension.
    assert!(matches!(
        needs_stream(Some((16, 16)), 3, 3),
        Err(PixmorphError::Render(_))
    ));
    assert!(matches!(
        needs_stream(None, 3, 4),
        Err(PixmorphError::Validation(_))
    ));
}

#[test]
fn dropping_an_unstarted_renderer_is_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.mp4");
    let r = FfmpegRenderer::new(FfmpegConfig::new(&out, Duration::from_millis(40))).unwrap();
    drop(r);
    assert!(!out.exists());
}

#[test]
fn frame_before_surface_is_rejected() {
    let cfg = FfmpegConfig::new("out.mp4", Duration::from_millis(40));
    let mut r = FfmpegRenderer::new(cfg).unwrap();
    let img = Image::filled(2, 2, Rgb8::BLACK).unwrap();
    assert!(r.render_frame(&img).is_err());
}

#[test]
fn encodes_mp4_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("clip.mp4");
    let mut r = FfmpegRenderer::new(FfmpegConfig::new(&out, Duration::from_millis(100))).unwrap();
    r.prepare_surface(16, 16).unwrap();
    for v in [0u8, 128, 255] {
        r.render_frame(&Image::filled(16, 16, Rgb8::gray(v)).unwrap())
            .unwrap();
    }
    assert!(r.prepare_surface(8, 8).is_err());
    r.finish().unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn dropping_mid_stream_reaps_ffmpeg() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("partial.mp4");
    let mut r = FfmpegRenderer::new(FfmpegConfig::new(&out, Duration::from_millis(100))).unwrap();
    r.prepare_surface(8, 8).unwrap();
    r.render_frame(&Image::filled(8, 8, Rgb8::WHITE).unwrap())
        .unwrap();
    // No finish: drop closes stdin and waits for the child to exit.
    drop(r);
    assert!(out.exists());
}
