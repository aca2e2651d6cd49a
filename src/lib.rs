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

//! Exact detection and resolution of triangle-mesh intersections.
//!
//! Given one mesh (or two), find every pair of intersecting triangles,
//! optionally remesh so the intersection curves become edges, and check
//! whether a mesh induces a piecewise-constant winding number.
//!
//! ```
//! use meshsect::{RemeshParams, remesh_self_intersections};
//!
//! let vertices = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
//! let faces = [[0, 1, 2]];
//! let result = remesh_self_intersections(&vertices, &faces, &RemeshParams::default()).unwrap();
//! assert!(result.intersecting_pairs.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod mesh_processing;
pub mod numeric;
pub mod operations;

pub use config::RemeshParams;
pub use error::{MeshError, MeshResult};
pub use kernel::{ExactKernel, FastKernel, Kernel};
pub use mesh::unique_edges::{UniqueEdgeMap, unique_edge_map};
pub use mesh_processing::{
    IntersectOther, OffendingMap, RemeshedMesh, SelfIntersections, apply_stitch_index, intersect_other,
    is_piecewise_constant_winding_number, piecewise_constant_winding_number, remesh_intersections,
    remesh_self_intersections,
};
pub use numeric::{Coordinate, ExactRational, Rounding};
