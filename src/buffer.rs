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

//! Frame allocation and output sinks.
//!
//! [`background_frame`] builds the white frame every encoder paints into.
//! An [`ImageSink`] receives the finished bytes; the encoders themselves
//! never touch the filesystem.

use std::io;
use std::path::{Path, PathBuf};

use bytes::{BufMut, BytesMut};

use crate::packed::Packed422Encoding;
use crate::{Canvas, ColorTable, FormatEncoder, PixelFormat, Region};

/// Default file stem used by [`FileSink::in_temp_dir`].
pub const DEFAULT_STEM: &str = "geometric_image";

/// Allocates a frame of exactly `format.frame_size(..)` bytes filled with
/// the format's background colour.
///
/// # Panics
///
/// Panics if the frame size overflows `usize`. [`crate::Generator`] checks
/// this before allocating.
#[must_use]
pub fn background_frame(format: PixelFormat, canvas: &Canvas) -> BytesMut {
    let (width, height) = (canvas.width(), canvas.height());
    let size = format.frame_size(width, height);
    let mut buf = BytesMut::with_capacity(size);

    match format {
        PixelFormat::Rgb24 => {
            let rgb = ColorTable::rgb(Region::Background);
            for _ in 0..width * height {
                buf.put_slice(&rgb);
            }
        }
        PixelFormat::Yuyv => fill_packed(&mut buf, Packed422Encoding::YUYV, width, height),
        PixelFormat::Uyvy => fill_packed(&mut buf, Packed422Encoding::UYVY, width, height),
        PixelFormat::Yvyu => fill_packed(&mut buf, Packed422Encoding::YVYU, width, height),
        PixelFormat::I420 => {
            let bg = ColorTable::yuv(format, Region::Background);
            let chroma_len = width.div_ceil(2) * height.div_ceil(2);
            buf.put_bytes(bg.y, width * height);
            buf.put_bytes(bg.u, chroma_len);
            buf.put_bytes(bg.v, chroma_len);
        }
    }

    debug_assert_eq!(buf.len(), size);
    buf
}

/// Background macropixels, the last one cut to two bytes on odd widths.
fn fill_packed(buf: &mut BytesMut, encoding: Packed422Encoding, width: usize, height: usize) {
    let bg = ColorTable::yuv(encoding.format(), Region::Background);
    let macropixel = encoding.pack(bg.y, bg.y, bg.u, bg.v);
    let row_bytes = width * 2;
    for _ in 0..height {
        for offset in (0..row_bytes).step_by(4) {
            let n = (row_bytes - offset).min(4);
            buf.put_slice(&macropixel[..n]);
        }
    }
}

/// Destination for finished frames.
pub trait ImageSink {
    /// Persists `data` verbatim.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the destination.
    fn write_image(&mut self, format: PixelFormat, data: &[u8]) -> io::Result<()>;
}

/// Collects frames in memory, back to back.
impl ImageSink for Vec<u8> {
    fn write_image(&mut self, _format: PixelFormat, data: &[u8]) -> io::Result<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}

/// Writes each frame to `<dir>/<stem>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    dir: PathBuf,
    stem: String,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
        }
    }

    /// `<temp dir>/geometric_image.<extension>`
    #[must_use]
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir(), DEFAULT_STEM)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a frame of `format` is written to.
    #[must_use]
    pub fn path_for(&self, format: PixelFormat) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.stem, format.extension()))
    }
}

impl ImageSink for FileSink {
    fn write_image(&mut self, format: PixelFormat, data: &[u8]) -> io::Result<()> {
        if self.stem.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "FileSink: empty file stem",
            ));
        }
        let path = self.path_for(format);
        std::fs::write(&path, data)?;

        #[cfg(feature = "debug-logging")]
        log::debug!("FileSink: wrote {} bytes to {}", data.len(), path.display());

        Ok(())
    }
}
