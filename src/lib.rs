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

//! Deterministic geometric test images in raw pixel formats.
//!
//! Every frame shows the same scene on a white background: a red rectangle,
//! a blue filled circle and a green horizontal line, drawn in that order.
//! The scene is serialized, uncompressed, into one of:
//!
//! - **RGB24** - packed `[R][G][B]`
//! - **YUYV / UYVY / YVYU** - packed 4:2:2 macropixels
//! - **I420** - planar 4:2:0
//!
//! Output is byte-for-byte reproducible: identical arguments always produce
//! identical frames.
//!
//! ```
//! use testcard::{encode, PixelFormat};
//!
//! let frame = encode(500, 250, PixelFormat::Rgb24).unwrap();
//! assert_eq!(frame.len(), 375_000);
//! let offset = (150 * 500 + 400) * 3;
//! assert_eq!(&frame[offset..offset + 3], &[0, 0, 255]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

use bytes::{Bytes, BytesMut};

pub mod buffer;
pub mod color;
pub mod error;
pub mod format;
pub mod geometry;
pub mod packed;
pub mod planar;

pub use buffer::{background_frame, FileSink, ImageSink};
pub use color::{ChromaSiting, ColorEntry, ColorTable, Yuv};
pub use error::EncodeError;
pub use format::PixelFormat;
pub use geometry::{Canvas, Circle, HLine, Rect, Region, Scene, Shape};
pub use packed::{Packed422Encoding, Rgb24Encoding};
pub use planar::I420Encoding;

/// Paints a [`Scene`] into a frame already filled with background.
pub trait FormatEncoder {
    /// The layout this encoder writes.
    fn format(&self) -> PixelFormat;

    /// Overwrites every pixel the scene covers.
    ///
    /// `buf` must hold exactly `self.format().frame_size(..)` bytes for
    /// `canvas`, as returned by [`background_frame`].
    fn rasterize(&self, buf: &mut BytesMut, canvas: &Canvas, scene: &Scene, siting: ChromaSiting);
}

/// Returns the encoder for `format`.
#[must_use]
pub fn get_encoder(format: PixelFormat) -> Box<dyn FormatEncoder> {
    match format {
        PixelFormat::Rgb24 => Box::new(Rgb24Encoding),
        PixelFormat::Yuyv => Box::new(Packed422Encoding::YUYV),
        PixelFormat::Uyvy => Box::new(Packed422Encoding::UYVY),
        PixelFormat::Yvyu => Box::new(Packed422Encoding::YVYU),
        PixelFormat::I420 => Box::new(I420Encoding),
    }
}

/// Frame generator with a configurable scene and chroma siting.
///
/// The default draws the reference scene with [`ChromaSiting::Reference`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    scene: Scene,
    siting: ChromaSiting,
}

impl Generator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    #[must_use]
    pub fn with_chroma_siting(mut self, siting: ChromaSiting) -> Self {
        self.siting = siting;
        self
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn chroma_siting(&self) -> ChromaSiting {
        self.siting
    }

    /// Renders one frame.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidDimension`] if `width` or `height` is
    /// zero or the frame size overflows `usize`.
    pub fn generate(&self, width: u32, height: u32, format: PixelFormat) -> Result<Bytes, EncodeError> {
        let canvas = Canvas::new(width, height)?;
        if format
            .checked_frame_size(canvas.width(), canvas.height())
            .is_none()
        {
            return Err(EncodeError::InvalidDimension { width, height });
        }

        let encoder = get_encoder(format);
        let mut buf = background_frame(format, &canvas);
        encoder.rasterize(&mut buf, &canvas, &self.scene, self.siting);

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "generated {}x{} {} frame ({} bytes)",
            width,
            height,
            format,
            buf.len()
        );

        Ok(buf.freeze())
    }

    /// Renders one frame, looking the format up by name.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnsupportedFormat`] for an unknown name, or
    /// [`EncodeError::InvalidDimension`] as for [`Generator::generate`].
    pub fn generate_named(&self, width: u32, height: u32, format: &str) -> Result<Bytes, EncodeError> {
        let format: PixelFormat = format.parse()?;
        self.generate(width, height, format)
    }

    /// Renders one frame and hands it to `sink`.
    ///
    /// # Errors
    ///
    /// Encoding errors are returned before anything reaches the sink; sink
    /// failures are returned as [`std::io::Error`].
    pub fn write_to<S: ImageSink + ?Sized>(
        &self,
        sink: &mut S,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> std::io::Result<usize> {
        let frame = self
            .generate(width, height, format)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        sink.write_image(format, &frame)?;
        Ok(frame.len())
    }
}

/// Renders the reference scene in `format`.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidDimension`] when `width` or `height` is 0.
pub fn encode(width: u32, height: u32, format: PixelFormat) -> Result<Bytes, EncodeError> {
    Generator::new().generate(width, height, format)
}

/// Renders the reference scene in the format called `format`
/// (`"rgb24"`, `"yuyv"`, `"uyvy"`, `"yvyu"`, `"i420"`, or an alias).
///
/// # Errors
///
/// Returns [`EncodeError::UnsupportedFormat`] for an unknown name and
/// [`EncodeError::InvalidDimension`] when `width` or `height` is 0.
pub fn encode_named(width: u32, height: u32, format: &str) -> Result<Bytes, EncodeError> {
    Generator::new().generate_named(width, height, format)
}
