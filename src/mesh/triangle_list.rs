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

use crate::{
    error::{MeshError, MeshResult},
    geometry::{point::Point3, triangle::Triangle3},
    kernel::Kernel,
    numeric::{coordinate::Coordinate, scalar::Scalar},
};

/// Indexed geometry lifted into a kernel's number type: one point per input
/// vertex and one triangle per input face, in input order.
#[derive(Debug, Clone)]
pub struct TriangleList<T: Scalar> {
    pub points: Vec<Point3<T>>,
    pub triangles: Vec<Triangle3<T>>,
}

impl<T: Scalar> TriangleList<T> {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Checks that every face only references existing vertices.
pub fn validate_faces(faces: &[[usize; 3]], vertex_count: usize) -> MeshResult<()> {
    for (f, face) in faces.iter().enumerate() {
        if let Some(&vertex) = face.iter().find(|&&v| v >= vertex_count) {
            return Err(MeshError::VertexIndexOutOfRange {
                face: f,
                vertex,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Lift a vertex/face buffer pair into kernel triangles.
pub fn mesh_to_triangle_list<K: Kernel, C: Coordinate>(
    vertices: &[[C; 3]],
    faces: &[[usize; 3]],
) -> MeshResult<TriangleList<K::FT>> {
    validate_faces(faces, vertices.len())?;
    if let Some(vertex) = vertices.iter().position(|v| !v.iter().all(Coordinate::is_finite)) {
        return Err(MeshError::NonFiniteCoordinate { vertex });
    }

    let points: Vec<Point3<K::FT>> = vertices.iter().map(K::lift_point).collect();
    let triangles = faces
        .iter()
        .map(|&[a, b, c]| Triangle3::new(points[a].clone(), points[b].clone(), points[c].clone()))
        .collect();

    Ok(TriangleList { points, triangles })
}
