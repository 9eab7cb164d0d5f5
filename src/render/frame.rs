use crate::foundation::math::{premul_u8, unpremul_u8};
use std::borrow::Cow;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** as produced by the CPU surface. The `premultiplied` flag is
/// included to make this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if self.premultiplied {
            map_color_channels(&self.data, unpremul_u8)
        } else {
            self.data.clone()
        }
    }

    /// Premultiplied view of the pixel data, borrowed when it already is.
    pub fn premultiplied_rgba8(&self) -> Cow<'_, [u8]> {
        if self.premultiplied {
            Cow::Borrowed(&self.data)
        } else {
            Cow::Owned(map_color_channels(&self.data, premul_u8))
        }
    }
}

fn map_color_channels(data: &[u8], f: fn(u8, u8) -> u8) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = px[3];
        for c in &mut px[..3] {
            *c = f(*c, a);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
