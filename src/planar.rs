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

//! Planar 4:2:0 (I420) encoder.
//!
//! # Layout
//!
//! ```text
//! [Y plane: W x H][U plane: CW x CH][V plane: CW x CH]
//! CW = ceil(W / 2), CH = ceil(H / 2)
//! ```
//!
//! Chroma sample `(cx, cy)` covers the 2x2 luma block whose top-left pixel
//! is `(2 * cx, 2 * cy)`. With [`ChromaSiting::Reference`] (and
//! [`ChromaSiting::Leading`], which is the same rule here) only that
//! top-left pixel decides the chroma; the other three samples of the block
//! are ignored even when they belong to a different shape.

use bytes::BytesMut;

use crate::color::{average_chroma, Yuv};
use crate::{Canvas, ChromaSiting, ColorTable, FormatEncoder, PixelFormat, Region, Scene};

/// Byte offsets and strides of the three I420 planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneLayout {
    pub luma_stride: usize,
    pub chroma_stride: usize,
    pub chroma_rows: usize,
    pub u_offset: usize,
    pub v_offset: usize,
}

impl PlaneLayout {
    #[must_use]
    pub fn new(canvas: &Canvas) -> Self {
        let luma_len = canvas.width() * canvas.height();
        let chroma_stride = canvas.width().div_ceil(2);
        let chroma_rows = canvas.height().div_ceil(2);
        Self {
            luma_stride: canvas.width(),
            chroma_stride,
            chroma_rows,
            u_offset: luma_len,
            v_offset: luma_len + chroma_stride * chroma_rows,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct I420Encoding;

impl I420Encoding {
    fn block_chroma(scene: &Scene, canvas: &Canvas, cx: usize, cy: usize, siting: ChromaSiting) -> Option<(u8, u8)> {
        let (x0, y0) = (cx * 2, cy * 2);
        match siting {
            ChromaSiting::Reference | ChromaSiting::Leading => {
                let region = scene.region_at(x0, y0);
                if region == Region::Background {
                    return None;
                }
                let yuv = ColorTable::yuv(PixelFormat::I420, region);
                Some((yuv.u, yuv.v))
            }
            ChromaSiting::Average => {
                let mut samples: [Yuv; 4] = [ColorTable::yuv(PixelFormat::I420, Region::Background); 4];
                let mut n = 0;
                let mut painted = false;
                for y in y0..(y0 + 2).min(canvas.height()) {
                    for x in x0..(x0 + 2).min(canvas.width()) {
                        let region = scene.region_at(x, y);
                        painted |= region != Region::Background;
                        samples[n] = ColorTable::yuv(PixelFormat::I420, region);
                        n += 1;
                    }
                }
                if painted {
                    average_chroma(&samples[..n])
                } else {
                    None
                }
            }
        }
    }
}

impl FormatEncoder for I420Encoding {
    fn format(&self) -> PixelFormat {
        PixelFormat::I420
    }

    fn rasterize(&self, buf: &mut BytesMut, canvas: &Canvas, scene: &Scene, siting: ChromaSiting) {
        let Some(area) = scene.coverage(canvas) else {
            return;
        };
        let planes = PlaneLayout::new(canvas);

        // Luma: full resolution
        for y in area.y0..area.y1 {
            for x in area.x0..area.x1 {
                let region = scene.region_at(x, y);
                if region != Region::Background {
                    buf[y * planes.luma_stride + x] = ColorTable::yuv(PixelFormat::I420, region).y;
                }
            }
        }

        // Chroma: one sample per 2x2 block
        for cy in area.y0 / 2..area.y1.div_ceil(2) {
            for cx in area.x0 / 2..area.x1.div_ceil(2) {
                if let Some((u, v)) = Self::block_chroma(scene, canvas, cx, cy, siting) {
                    let idx = cy * planes.chroma_stride + cx;
                    buf[planes.u_offset + idx] = u;
                    buf[planes.v_offset + idx] = v;
                }
            }
        }

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "I420: rasterized {}x{} area, chroma planes {}x{} ({} siting)",
            area.x1 - area.x0,
            area.y1 - area.y0,
            planes.chroma_stride,
            planes.chroma_rows,
            siting
        );
    }
}
