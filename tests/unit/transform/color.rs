use super::*;

#[test]
fn pure_red_maps_to_76() {
    let img = Image::filled(2, 2, Rgb8::new(255, 0, 0)).unwrap();
    let out = grayscale(&img);
    assert_eq!(out.dims(), (2, 2));
    assert!(out.pixels().iter().all(|&px| px == Rgb8::gray(76)));
}

#[test]
fn luminance_truncates_instead_of_rounding() {
    // 0.587 * 255 = 149.685
    assert_eq!(luminance(Rgb8::new(0, 255, 0)), 149);
    // 0.114 * 255 = 29.07
    assert_eq!(luminance(Rgb8::new(0, 0, 255)), 29);
    // 0.299 + 0.587 + 0.114 = 1.0
    assert_eq!(luminance(Rgb8::new(1, 1, 1)), 1);
    assert_eq!(luminance(Rgb8::WHITE), 255);
    assert_eq!(luminance(Rgb8::BLACK), 0);
    // 0.299 * 10 + 0.587 * 20 + 0.114 * 30 = 18.13
    assert_eq!(luminance(Rgb8::new(10, 20, 30)), 18);
}

#[test]
fn every_gray_level_is_a_fixed_point() {
    for v in 0..=255u8 {
        assert_eq!(luminance(Rgb8::gray(v)), v, "gray level {v}");
    }
}

#[test]
fn grayscale_is_idempotent() {
    let img = Image::from_fn(16, 16, |row, col| {
        Rgb8::new((row * 16) as u8, (col * 16) as u8, ((row + col) * 7) as u8)
    })
    .unwrap();
    let once = grayscale(&img);
    assert!(once.pixels().iter().all(|px| px.is_gray()));
    assert_eq!(grayscale(&once), once);
}
