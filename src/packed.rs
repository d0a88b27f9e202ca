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

//! Packed (pixel-interleaved) encoders: RGB24 and the 4:2:2 YUV family.
//!
//! # RGB24
//!
//! Row-major, 3 bytes per pixel: `[R][G][B]`.
//!
//! # 4:2:2
//!
//! Row-major, each pair of pixels starting at an even x shares one 4-byte
//! macropixel holding two luma samples and one chroma pair:
//!
//! ```text
//! YUYV: [Y0][U][Y1][V]
//! UYVY: [U][Y0][V][Y1]
//! YVYU: [Y0][V][Y1][U]
//! ```
//!
//! Each luma sample takes the colour of its own pixel. With
//! [`ChromaSiting::Reference`] the chroma pair takes the colour of the
//! trailing pixel `x + 1`, so a shape edge that splits a macropixel keeps the
//! left luma but the right chroma. With [`ChromaSiting::Leading`] the even
//! pixel decides all four bytes, which is what the legacy Python generator
//! writes.
//!
//! A row is `2 * W` bytes. When W is odd the last macropixel is cut to its
//! first two bytes and its chroma comes from the one pixel present.

use bytes::BytesMut;

use crate::color::average_chroma;
use crate::{Canvas, ChromaSiting, ColorTable, FormatEncoder, PixelFormat, Region, Scene};

/// Writes the RGB triplet of each covered pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rgb24Encoding;

impl FormatEncoder for Rgb24Encoding {
    fn format(&self) -> PixelFormat {
        PixelFormat::Rgb24
    }

    fn rasterize(&self, buf: &mut BytesMut, canvas: &Canvas, scene: &Scene, _siting: ChromaSiting) {
        let Some(area) = scene.coverage(canvas) else {
            return;
        };
        let width = canvas.width();

        for y in area.y0..area.y1 {
            for x in area.x0..area.x1 {
                let region = scene.region_at(x, y);
                if region == Region::Background {
                    continue;
                }
                let idx = (y * width + x) * 3;
                buf[idx..idx + 3].copy_from_slice(&ColorTable::rgb(region));
            }
        }
    }
}

/// One byte slot of a 4:2:2 macropixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sample {
    Y0,
    Y1,
    U,
    V,
}

/// 4:2:2 encoder; the three variants differ only in byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packed422Encoding {
    format: PixelFormat,
    order: [Sample; 4],
}

impl Packed422Encoding {
    pub const YUYV: Self = Self {
        format: PixelFormat::Yuyv,
        order: [Sample::Y0, Sample::U, Sample::Y1, Sample::V],
    };
    pub const UYVY: Self = Self {
        format: PixelFormat::Uyvy,
        order: [Sample::U, Sample::Y0, Sample::V, Sample::Y1],
    };
    pub const YVYU: Self = Self {
        format: PixelFormat::Yvyu,
        order: [Sample::Y0, Sample::V, Sample::Y1, Sample::U],
    };

    /// `None` for formats that are not packed 4:2:2.
    #[must_use]
    pub const fn for_format(format: PixelFormat) -> Option<Self> {
        match format {
            PixelFormat::Yuyv => Some(Self::YUYV),
            PixelFormat::Uyvy => Some(Self::UYVY),
            PixelFormat::Yvyu => Some(Self::YVYU),
            PixelFormat::Rgb24 | PixelFormat::I420 => None,
        }
    }

    /// Lays out one macropixel in this variant's byte order.
    #[must_use]
    pub fn pack(&self, y0: u8, y1: u8, u: u8, v: u8) -> [u8; 4] {
        self.order.map(|sample| match sample {
            Sample::Y0 => y0,
            Sample::Y1 => y1,
            Sample::U => u,
            Sample::V => v,
        })
    }

    /// Bytes of the macropixel starting at even column `x`, or `None` when
    /// it stays background.
    fn macropixel(&self, scene: &Scene, width: usize, x: usize, y: usize, siting: ChromaSiting) -> Option<[u8; 4]> {
        let lead = scene.region_at(x, y);
        if siting == ChromaSiting::Leading {
            if lead == Region::Background {
                return None;
            }
            let c = ColorTable::yuv(self.format, lead);
            return Some(self.pack(c.y, c.y, c.u, c.v));
        }

        let trail = (x + 1 < width).then(|| scene.region_at(x + 1, y));
        if lead == Region::Background && trail.is_none_or(|r| r == Region::Background) {
            return None;
        }

        let lead = ColorTable::yuv(self.format, lead);
        let trail = trail.map(|r| ColorTable::yuv(self.format, r));
        let (u, v) = match (siting, trail) {
            (ChromaSiting::Average, Some(t)) => average_chroma(&[lead, t]).unwrap_or((t.u, t.v)),
            (_, Some(t)) => (t.u, t.v),
            (_, None) => (lead.u, lead.v),
        };
        let y1 = trail.map_or(lead.y, |t| t.y);
        Some(self.pack(lead.y, y1, u, v))
    }
}

impl FormatEncoder for Packed422Encoding {
    fn format(&self) -> PixelFormat {
        self.format
    }

    fn rasterize(&self, buf: &mut BytesMut, canvas: &Canvas, scene: &Scene, siting: ChromaSiting) {
        let Some(area) = scene.coverage(canvas) else {
            return;
        };
        let width = canvas.width();
        let row_bytes = width * 2;
        // Macropixels always start on an even column.
        let first = area.x0 & !1;

        for y in area.y0..area.y1 {
            for x in (first..area.x1).step_by(2) {
                let Some(macropixel) = self.macropixel(scene, width, x, y, siting) else {
                    continue;
                };
                let idx = y * row_bytes + x * 2;
                let n = (row_bytes - x * 2).min(4);
                buf[idx..idx + n].copy_from_slice(&macropixel[..n]);
            }
        }

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "{}: rasterized {}x{} area at ({}, {})",
            self.format,
            area.x1 - area.x0,
            area.y1 - area.y0,
            area.x0,
            area.y0
        );
    }
}
