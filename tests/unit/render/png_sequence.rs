use super::*;
use crate::codec::file::load_image;
use crate::foundation::core::Rgb8;

#[test]
fn writes_numbered_frames() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("frames");
    let mut r = PngSequenceRenderer::new(&out);
    assert_eq!(r.dir(), out.as_path());
    assert!(r.written().is_empty());

    let a = Image::filled(3, 2, Rgb8::new(10, 20, 30)).unwrap();
    let b = Image::filled(3, 2, Rgb8::new(40, 50, 60)).unwrap();
    r.prepare_surface(3, 2).unwrap();
    r.render_frame(&a).unwrap();
    r.pause(Duration::from_secs(60)).unwrap();
    r.render_frame(&b).unwrap();
    r.finish().unwrap();

    assert_eq!(
        r.written(),
        &[out.join("frame_00000.png"), out.join("frame_00001.png")]
    );
    assert_eq!(load_image(&r.written()[0]).unwrap(), a);
    assert_eq!(load_image(&r.written()[1]).unwrap(), b);
}

#[test]
fn rejects_frames_of_the_wrong_size() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = PngSequenceRenderer::new(dir.path());
    r.prepare_surface(2, 2).unwrap();
    let img = Image::filled(1, 2, Rgb8::BLACK).unwrap();
    assert!(r.render_frame(&img).is_err());
    assert!(r.written().is_empty());
}
