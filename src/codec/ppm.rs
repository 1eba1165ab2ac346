//! Plain-text PPM (`P3`) codec.
//!
//! Layout: a format tag, `width`, `height`, `maxval`, then `width * height` RGB triples,
//! row-major, top row first. Tokens are separated by any whitespace and `#` starts a comment
//! that runs to the end of the line. The tag and `maxval` are read but not interpreted;
//! channels are always 0..=255.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{PixmorphError, PixmorphResult};
use crate::raster::buffer::Image;

/// Parse a `P3` document into an [`Image`].
pub fn decode_ppm(text: &str) -> PixmorphResult<Image> {
    let mut tokens = Tokens::new(text);

    tokens
        .next()
        .ok_or_else(|| PixmorphError::decode("missing format tag"))?;
    let width = tokens.dimension("width")?;
    let height = tokens.dimension("height")?;
    tokens.int("maxval")?;

    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PixmorphError::decode(format!("{width}x{height} image is too large")))?;
    let mut pixels = Vec::with_capacity(len.min(1 << 24));
    for idx in 0..len {
        let (row, col) = (idx / width as usize, idx % width as usize);
        let r = tokens.channel("red", row, col)?;
        let g = tokens.channel("green", row, col)?;
        let b = tokens.channel("blue", row, col)?;
        pixels.push(Rgb8::new(r, g, b));
    }

    Image::new(width, height, pixels)
}

/// Serialize an image as `P3` with `maxval` 255, one image row per line.
pub fn encode_ppm(img: &Image) -> String {
    // "255 255 255 " is the widest pixel.
    let mut out = String::with_capacity(16 + img.pixels().len() * 12);
    let _ = writeln!(out, "P3\n{} {}\n255", img.width(), img.height());
    for row in img.rows() {
        let mut first = true;
        for px in row {
            if !first {
                out.push(' ');
            }
            first = false;
            let _ = write!(out, "{} {} {}", px.r, px.g, px.b);
        }
        out.push('\n');
    }
    out
}

pub fn read_ppm(path: &Path) -> PixmorphResult<Image> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read ppm '{}'", path.display()))?;
    decode_ppm(&text).map_err(|e| match e {
        PixmorphError::Decode(msg) => PixmorphError::decode(format!("{}: {msg}", path.display())),
        other => other,
    })
}

pub fn write_ppm(path: &Path, img: &Image) -> PixmorphResult<()> {
    crate::codec::file::ensure_parent_dir(path)?;
    std::fs::write(path, encode_ppm(img))
        .with_context(|| format!("write ppm '{}'", path.display()))?;
    Ok(())
}

struct Tokens<'a> {
    lines: std::str::Lines<'a>,
    current: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            current: "".split_whitespace(),
        }
    }

    fn int(&mut self, what: &str) -> PixmorphResult<i64> {
        let tok = self
            .next()
            .ok_or_else(|| PixmorphError::decode(format!("missing {what}")))?;
        tok.parse::<i64>()
            .map_err(|_| PixmorphError::decode(format!("{what} is not an integer: '{tok}'")))
    }

    fn dimension(&mut self, what: &str) -> PixmorphResult<u32> {
        let v = self.int(what)?;
        if v <= 0 {
            return Err(PixmorphError::decode(format!("{what} must be positive, got {v}")));
        }
        u32::try_from(v).map_err(|_| PixmorphError::decode(format!("{what} {v} is too large")))
    }

    fn channel(&mut self, what: &str, row: usize, col: usize) -> PixmorphResult<u8> {
        let v = self.int(&format!("{what} channel of pixel ({row}, {col})"))?;
        u8::try_from(v).map_err(|_| {
            PixmorphError::decode(format!(
                "{what} channel of pixel ({row}, {col}) out of range 0..=255: {v}"
            ))
        })
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(tok) = self.current.next() {
                return Some(tok);
            }
            let line = self.lines.next()?;
            let line = line.split_once('#').map_or(line, |(data, _)| data);
            self.current = line.split_whitespace();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/ppm.rs"]
mod tests;
