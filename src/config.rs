// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Parameters for detection and remeshing.
//!
//! ```
//! use meshsect::RemeshParams;
//!
//! let params = RemeshParams::default().with_stitch_all(true).with_cutoff(64);
//! assert!(params.validate().is_ok());
//! ```

use crate::{
    error::{MeshError, MeshResult},
    numeric::coordinate::Rounding,
};

/// Leaf size of the culling tree unless overridden.
pub const DEFAULT_CUTOFF: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemeshParams {
    /// Only report intersecting pairs; construct nothing.
    pub detect_only: bool,
    /// Stop at the first intersecting pair. Requires `detect_only`.
    pub first_only: bool,
    /// Weld the output by exact position into one connected mesh.
    pub stitch_all: bool,
    /// Round constructed coordinates to the nearest representable value.
    pub slow_and_more_precise_rounding: bool,
    /// Maximum number of boxes compared brute force in one culling leaf.
    pub cutoff: usize,
}

impl Default for RemeshParams {
    fn default() -> Self {
        Self {
            detect_only: false,
            first_only: false,
            stitch_all: false,
            slow_and_more_precise_rounding: false,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl RemeshParams {
    /// Parameters for a yes/no check that stops at the first hit.
    #[must_use]
    pub fn first_hit() -> Self {
        Self {
            detect_only: true,
            first_only: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_detect_only(mut self, detect_only: bool) -> Self {
        self.detect_only = detect_only;
        self
    }

    #[must_use]
    pub fn with_first_only(mut self, first_only: bool) -> Self {
        self.first_only = first_only;
        self
    }

    #[must_use]
    pub fn with_stitch_all(mut self, stitch_all: bool) -> Self {
        self.stitch_all = stitch_all;
        self
    }

    #[must_use]
    pub fn with_precise_rounding(mut self, precise: bool) -> Self {
        self.slow_and_more_precise_rounding = precise;
        self
    }

    #[must_use]
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn rounding(&self) -> Rounding {
        if self.slow_and_more_precise_rounding {
            Rounding::Precise
        } else {
            Rounding::Default
        }
    }

    pub fn validate(&self) -> MeshResult<()> {
        if self.first_only && !self.detect_only {
            return Err(MeshError::InvalidParams {
                details: "first_only requires detect_only".to_string(),
            });
        }
        if self.cutoff == 0 {
            return Err(MeshError::InvalidParams {
                details: "cutoff must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
