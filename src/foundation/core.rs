/// Zero-based position of a frame within a rendered sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// 8-bit RGB pixel. There is no alpha channel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(px: Rgb8) -> Self {
        px.channels()
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(px: image::Rgb<u8>) -> Self {
        Self::from(px.0)
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(px: Rgb8) -> Self {
        image::Rgb(px.channels())
    }
}
