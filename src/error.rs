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

//! Error types for image generation.

use std::fmt;

/// Errors returned when a test image cannot be produced.
///
/// Both variants are terminal: no partial buffer is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Width or height is zero, or the frame would not fit in memory.
    InvalidDimension {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The format name or tag is not one of the supported layouts.
    UnsupportedFormat(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidDimension { width, height } => {
                write!(f, "invalid image dimensions: {}x{}", width, height)
            }
            EncodeError::UnsupportedFormat(name) => {
                write!(
                    f,
                    "unsupported pixel format '{}' (expected one of rgb24, yuyv, uyvy, yvyu, i420)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}
