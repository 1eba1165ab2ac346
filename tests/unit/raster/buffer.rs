use super::*;

fn ramp(width: u32, height: u32) -> Image {
    Image::from_fn(width, height, |row, col| {
        Rgb8::new((row * 10) as u8, (col * 10) as u8, 7)
    })
    .unwrap()
}

#[test]
fn new_rejects_zero_dimensions_and_wrong_length() {
    assert!(Image::new(0, 1, vec![]).is_err());
    assert!(Image::new(1, 0, vec![]).is_err());
    assert!(Image::new(2, 2, vec![Rgb8::BLACK; 3]).is_err());
    assert!(Image::new(2, 2, vec![Rgb8::BLACK; 4]).is_ok());
    assert!(Image::filled(0, 3, Rgb8::WHITE).is_err());
}

#[test]
fn from_fn_is_row_major() {
    let img = ramp(3, 2);
    assert_eq!(img.dims(), (3, 2));
    assert_eq!(img.at(0, 0), Rgb8::new(0, 0, 7));
    assert_eq!(img.at(0, 2), Rgb8::new(0, 20, 7));
    assert_eq!(img.at(1, 1), Rgb8::new(10, 10, 7));
    assert_eq!(img.pixels()[4], img.at(1, 1));
}

#[test]
fn into_pixels_returns_the_row_major_buffer() {
    let img = ramp(2, 2);
    let expected = img.pixels().to_vec();
    let pixels = img.into_pixels();
    assert_eq!(pixels, expected);
    assert_eq!(pixels[1], Rgb8::new(0, 10, 7));
    assert_eq!(pixels[2], Rgb8::new(10, 0, 7));
}

#[test]
fn rows_are_never_jagged() {
    let img = ramp(5, 4);
    let rows: Vec<_> = img.rows().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 5));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn at_panics_out_of_bounds() {
    ramp(2, 2).at(2, 0);
}

#[test]
fn rgb_image_conversion_preserves_pixels() {
    let img = ramp(4, 3);
    let rgb = img.to_rgb_image().unwrap();
    assert_eq!(rgb.dimensions(), (4, 3));
    assert_eq!(rgb.get_pixel(2, 1).0, [10, 20, 7]);
    assert_eq!(Image::from_rgb_image(&rgb).unwrap(), img);
}

#[test]
fn write_text_pads_channels() {
    let img = Image::new(
        2,
        1,
        vec![Rgb8::new(1, 22, 255), Rgb8::new(0, 0, 0)],
    )
    .unwrap();
    let mut out = Vec::new();
    img.write_text(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "(  1, 22,255)  (  0,  0,  0)  \n"
    );
}
