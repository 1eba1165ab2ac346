use super::*;
use crate::foundation::core::Rgb8;

#[test]
fn in_memory_records_calls_in_order() {
    let img = Image::filled(2, 1, Rgb8::WHITE).unwrap();
    let mut r = InMemoryRenderer::new();
    r.prepare_surface(2, 1).unwrap();
    r.render_frame(&img).unwrap();
    r.pause(Duration::from_millis(500)).unwrap();
    r.finish().unwrap();

    assert_eq!(
        r.events(),
        &[
            RenderEvent::Surface {
                width: 2,
                height: 1
            },
            RenderEvent::Frame(img.clone()),
            RenderEvent::Pause(Duration::from_millis(500)),
            RenderEvent::Finish,
        ]
    );
    assert_eq!(r.frames().count(), 1);
    assert_eq!(r.pauses().collect::<Vec<_>>(), [Duration::from_millis(500)]);
}

#[test]
fn frames_require_a_matching_surface() {
    let img = Image::filled(2, 2, Rgb8::BLACK).unwrap();
    let mut r = InMemoryRenderer::new();
    assert!(matches!(
        r.render_frame(&img),
        Err(PixmorphError::Render(_))
    ));
    r.prepare_surface(3, 2).unwrap();
    assert!(matches!(
        r.render_frame(&img),
        Err(PixmorphError::DimensionMismatch { .. })
    ));
}

#[test]
fn text_renderer_separates_frames_with_blank_line() {
    let img = Image::filled(1, 1, Rgb8::new(1, 2, 3)).unwrap();
    let mut r = TextRenderer::new(Vec::new());
    r.prepare_surface(1, 1).unwrap();
    r.render_frame(&img).unwrap();
    r.render_frame(&img).unwrap();
    let text = String::from_utf8(r.into_inner()).unwrap();
    assert_eq!(text, "(  1,  2,  3)  \n\n(  1,  2,  3)  \n");
}
