// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-format colour constants and the chroma siting policy.
//!
//! The values are fixed constants, not conversions from one RGB source:
//!
//! | Region     | RGB24       | 4:2:2 Y / U / V | I420 Y / U / V |
//! |------------|-------------|-----------------|----------------|
//! | background | 255,255,255 | 255 / 255 / 255 | 255 / 128 / 128 |
//! | rectangle  | 255,0,0     | 76 / 85 / 255   | 76 / 85 / 255  |
//! | circle     | 0,0,255     | 29 / 255 / 107  | 29 / 255 / 107 |
//! | line       | 0,255,0     | 150 / 44 / 21   | 150 / 44 / 21  |

use std::fmt;
use std::str::FromStr;

use crate::{PixelFormat, Region};

/// One luma sample with its chroma pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yuv {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl Yuv {
    #[must_use]
    pub const fn new(y: u8, u: u8, v: u8) -> Self {
        Self { y, u, v }
    }
}

/// Colour of one region in one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorEntry {
    Rgb([u8; 3]),
    Yuv(Yuv),
}

const RGB: [[u8; 3]; 4] = [
    [255, 255, 255], // Background
    [255, 0, 0],     // Rectangle (red)
    [0, 0, 255],     // Circle (blue)
    [0, 255, 0],     // Line (green)
];

/// Packed 4:2:2 background chroma is 255 rather than the neutral 128.
/// Existing consumers of these frames expect it byte for byte.
const PACKED_YUV: [Yuv; 4] = [
    Yuv::new(255, 255, 255),
    Yuv::new(76, 85, 255),
    Yuv::new(29, 255, 107),
    Yuv::new(150, 44, 21),
];

const PLANAR_YUV: [Yuv; 4] = [
    Yuv::new(255, 128, 128),
    Yuv::new(76, 85, 255),
    Yuv::new(29, 255, 107),
    Yuv::new(150, 44, 21),
];

#[inline]
const fn index(region: Region) -> usize {
    match region {
        Region::Background => 0,
        Region::Rectangle => 1,
        Region::Circle => 2,
        Region::Line => 3,
    }
}

/// Lookup of [`ColorEntry`] by `(format, region)`, shared by every encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTable;

impl ColorTable {
    #[must_use]
    pub const fn entry(format: PixelFormat, region: Region) -> ColorEntry {
        match format {
            PixelFormat::Rgb24 => ColorEntry::Rgb(Self::rgb(region)),
            _ => ColorEntry::Yuv(Self::yuv(format, region)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn rgb(region: Region) -> [u8; 3] {
        RGB[index(region)]
    }

    /// YUV sample for `region`. RGB24 has no YUV table of its own and
    /// shares the packed 4:2:2 values.
    #[inline]
    #[must_use]
    pub const fn yuv(format: PixelFormat, region: Region) -> Yuv {
        match format {
            PixelFormat::I420 => PLANAR_YUV[index(region)],
            _ => PACKED_YUV[index(region)],
        }
    }
}

/// How one chroma sample is chosen for several luma samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromaSiting {
    /// Take the region at one fixed sample: the trailing (right) pixel of a
    /// 4:2:2 macropixel, the top-left pixel of an I420 2x2 block. Each 4:2:2
    /// luma sample keeps its own pixel's colour.
    ///
    /// I420 output is bit-compatible with the legacy Python generator. Packed
    /// 4:2:2 output is not: it differs wherever a shape edge splits a
    /// macropixel. Use [`ChromaSiting::Leading`] for those frames.
    #[default]
    Reference,
    /// Rounded mean over every in-canvas sample the chroma value covers.
    Average,
    /// The leading (even) pixel of a 4:2:2 macropixel decides the whole
    /// macropixel, both luma samples and the chroma pair. I420 chroma comes
    /// from the top-left sample, as with [`ChromaSiting::Reference`].
    ///
    /// Bit-compatible with the legacy Python generator in every format for
    /// even widths. That generator cannot produce odd-width packed frames.
    Leading,
}

impl ChromaSiting {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ChromaSiting::Reference => "reference",
            ChromaSiting::Average => "average",
            ChromaSiting::Leading => "leading",
        }
    }
}

impl fmt::Display for ChromaSiting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChromaSiting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(ChromaSiting::Reference),
            "average" => Ok(ChromaSiting::Average),
            "leading" => Ok(ChromaSiting::Leading),
            _ => Err(format!(
                "unknown chroma siting '{}' (expected reference, average or leading)",
                s
            )),
        }
    }
}

/// Rounded mean of the chroma of `samples`. Luma is ignored.
///
/// Returns `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // mean of u8 values fits in u8
pub fn average_chroma(samples: &[Yuv]) -> Option<(u8, u8)> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as u32;
    let (u, v) = samples.iter().fold((0u32, 0u32), |(u, v), s| {
        (u + u32::from(s.u), v + u32::from(s.v))
    });
    Some((((u + n / 2) / n) as u8, ((v + n / 2) / n) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_palette() {
        assert_eq!(
            ColorTable::entry(PixelFormat::Rgb24, Region::Background),
            ColorEntry::Rgb([255, 255, 255])
        );
        assert_eq!(ColorTable::rgb(Region::Rectangle), [255, 0, 0]);
        assert_eq!(ColorTable::rgb(Region::Circle), [0, 0, 255]);
        assert_eq!(ColorTable::rgb(Region::Line), [0, 255, 0]);
    }

    #[test]
    fn test_background_chroma_differs_between_packed_and_planar() {
        for format in [PixelFormat::Yuyv, PixelFormat::Uyvy, PixelFormat::Yvyu] {
            assert_eq!(
                ColorTable::entry(format, Region::Background),
                ColorEntry::Yuv(Yuv::new(255, 255, 255))
            );
        }
        assert_eq!(
            ColorTable::entry(PixelFormat::I420, Region::Background),
            ColorEntry::Yuv(Yuv::new(255, 128, 128))
        );
    }

    #[test]
    fn test_shape_colours_are_shared_by_all_yuv_formats() {
        for region in [Region::Rectangle, Region::Circle, Region::Line] {
            let planar = ColorTable::yuv(PixelFormat::I420, region);
            for format in [PixelFormat::Yuyv, PixelFormat::Uyvy, PixelFormat::Yvyu] {
                assert_eq!(ColorTable::yuv(format, region), planar);
            }
        }
        assert_eq!(
            ColorTable::yuv(PixelFormat::I420, Region::Line),
            Yuv::new(150, 44, 21)
        );
    }

    #[test]
    fn test_average_chroma_rounds_half_up() {
        let red = ColorTable::yuv(PixelFormat::I420, Region::Rectangle);
        let bg = ColorTable::yuv(PixelFormat::I420, Region::Background);
        // (85 + 128) / 2 = 106.5, (255 + 128) / 2 = 191.5
        assert_eq!(average_chroma(&[red, bg]), Some((107, 192)));
        assert_eq!(average_chroma(&[red]), Some((85, 255)));
        assert_eq!(average_chroma(&[]), None);
    }

    #[test]
    fn test_chroma_siting_parse() {
        assert_eq!("Average".parse::<ChromaSiting>(), Ok(ChromaSiting::Average));
        assert_eq!("reference".parse::<ChromaSiting>(), Ok(ChromaSiting::Reference));
        assert_eq!("LEADING".parse::<ChromaSiting>(), Ok(ChromaSiting::Leading));
        assert!("bilinear".parse::<ChromaSiting>().is_err());
        assert_eq!(ChromaSiting::default(), ChromaSiting::Reference);
    }
}
