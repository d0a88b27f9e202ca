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

//! Raw pixel layouts supported by the generator.
//!
//! | Format | Layout | Bytes for W x H |
//! |--------|--------|-----------------|
//! | RGB24  | packed, 3 bytes per pixel | `3 * W * H` |
//! | YUYV / UYVY / YVYU | packed 4:2:2, 4-byte macropixel per 2 pixels | `2 * W * H` |
//! | I420   | planar 4:2:0, Y then U then V | `W * H + 2 * ceil(W/2) * ceil(H/2)` |
//!
//! Chroma planes of odd-sized I420 frames round up, so every frame size is
//! valid for every format.

use std::fmt;
use std::str::FromStr;

use crate::EncodeError;

/// A raw, uncompressed pixel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Packed 8-bit R, G, B.
    Rgb24,
    /// Packed 4:2:2, byte order Y0 U Y1 V.
    Yuyv,
    /// Packed 4:2:2, byte order U Y0 V Y1.
    Uyvy,
    /// Packed 4:2:2, byte order Y0 V Y1 U.
    Yvyu,
    /// Planar 4:2:0: full Y plane, then quarter-size U and V planes.
    I420,
}

impl PixelFormat {
    /// Every supported format, in catalogue order.
    pub const ALL: [PixelFormat; 5] = [
        PixelFormat::Rgb24,
        PixelFormat::Yuyv,
        PixelFormat::Uyvy,
        PixelFormat::Yvyu,
        PixelFormat::I420,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Rgb24 => "rgb24",
            PixelFormat::Yuyv => "yuyv",
            PixelFormat::Uyvy => "uyvy",
            PixelFormat::Yvyu => "yvyu",
            PixelFormat::I420 => "i420",
        }
    }

    /// File extension used when the frame is written to disk.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            PixelFormat::Rgb24 => "rgb",
            PixelFormat::Yuyv => "yuyv",
            PixelFormat::Uyvy => "uyvy",
            PixelFormat::Yvyu => "yvyu",
            PixelFormat::I420 => "i420",
        }
    }

    /// Nominal bits per pixel, averaged over the subsampling grid.
    #[must_use]
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Rgb24 => 24,
            PixelFormat::Yuyv | PixelFormat::Uyvy | PixelFormat::Yvyu => 16,
            PixelFormat::I420 => 12,
        }
    }

    #[must_use]
    pub const fn is_yuv(self) -> bool {
        !matches!(self, PixelFormat::Rgb24)
    }

    #[must_use]
    pub const fn is_planar(self) -> bool {
        matches!(self, PixelFormat::I420)
    }

    /// Horizontal and vertical chroma decimation factors.
    ///
    /// RGB24 carries full colour per pixel and reports `(1, 1)`.
    #[must_use]
    pub const fn chroma_subsampling(self) -> (usize, usize) {
        match self {
            PixelFormat::Rgb24 => (1, 1),
            PixelFormat::Yuyv | PixelFormat::Uyvy | PixelFormat::Yvyu => (2, 1),
            PixelFormat::I420 => (2, 2),
        }
    }

    /// Exact byte length of a `width` x `height` frame.
    ///
    /// # Panics
    ///
    /// Panics on arithmetic overflow; use [`PixelFormat::checked_frame_size`]
    /// for untrusted dimensions.
    #[must_use]
    pub fn frame_size(self, width: usize, height: usize) -> usize {
        self.checked_frame_size(width, height)
            .unwrap_or_else(|| panic!("{}x{} {} frame overflows usize", width, height, self))
    }

    /// Exact byte length of a frame, or `None` if it overflows `usize`.
    #[must_use]
    pub fn checked_frame_size(self, width: usize, height: usize) -> Option<usize> {
        let pixels = width.checked_mul(height)?;
        match self {
            PixelFormat::Rgb24 => pixels.checked_mul(3),
            PixelFormat::Yuyv | PixelFormat::Uyvy | PixelFormat::Yvyu => pixels.checked_mul(2),
            PixelFormat::I420 => {
                let chroma = width.div_ceil(2).checked_mul(height.div_ceil(2))?;
                pixels.checked_add(chroma.checked_mul(2)?)
            }
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = EncodeError;

    /// Case-insensitive; accepts `rgb`/`rgb8` for RGB24 and `yuy2` for YUYV.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb24" | "rgb8" | "rgb" => Ok(PixelFormat::Rgb24),
            "yuyv" | "yuy2" => Ok(PixelFormat::Yuyv),
            "uyvy" => Ok(PixelFormat::Uyvy),
            "yvyu" => Ok(PixelFormat::Yvyu),
            "i420" => Ok(PixelFormat::I420),
            _ => Err(EncodeError::UnsupportedFormat(s.to_string())),
        }
    }
}
