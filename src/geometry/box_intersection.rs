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

//! Candidate-pair culling over axis-aligned boxes.
//!
//! Boxes are `Option<Aabb>` indexed by position; `None` entries (degenerate
//! primitives) take no part. Both traversals stop as soon as the callback
//! returns `ControlFlow::Break`.

use std::ops::ControlFlow;

use crate::geometry::{aabb::Aabb, aabb_tree::AabbTree};

fn indexed(boxes: &[Option<Aabb>]) -> Vec<(Aabb, usize)> {
    boxes
        .iter()
        .enumerate()
        .filter_map(|(i, b)| b.map(|b| (b, i)))
        .collect()
}

/// Report every unordered pair `(i, j)`, `i != j`, of overlapping boxes once.
/// Order within a pair is unspecified.
pub fn box_self_intersection<F>(
    boxes: &[Option<Aabb>],
    cutoff: usize,
    mut callback: F,
) -> ControlFlow<()>
where
    F: FnMut(usize, usize) -> ControlFlow<()>,
{
    match AabbTree::build(indexed(boxes), cutoff) {
        Some(tree) => self_traverse(&tree, &mut callback),
        None => ControlFlow::Continue(()),
    }
}

/// Report every pair `(i, j)` with `boxes_a[i]` overlapping `boxes_b[j]`.
pub fn box_intersection<F>(
    boxes_a: &[Option<Aabb>],
    boxes_b: &[Option<Aabb>],
    cutoff: usize,
    mut callback: F,
) -> ControlFlow<()>
where
    F: FnMut(usize, usize) -> ControlFlow<()>,
{
    let (Some(a), Some(b)) = (
        AabbTree::build(indexed(boxes_a), cutoff),
        AabbTree::build(indexed(boxes_b), cutoff),
    ) else {
        return ControlFlow::Continue(());
    };
    cross_traverse(&a, &b, &mut callback)
}

fn self_traverse<F>(node: &AabbTree, callback: &mut F) -> ControlFlow<()>
where
    F: FnMut(usize, usize) -> ControlFlow<()>,
{
    match node {
        AabbTree::Leaf { items, .. } => {
            for (k, (ba, ia)) in items.iter().enumerate() {
                for (bb, ib) in &items[k + 1..] {
                    if ba.intersects(bb) {
                        callback(*ia, *ib)?;
                    }
                }
            }
            ControlFlow::Continue(())
        }
        AabbTree::Node { left, right, .. } => {
            self_traverse(left, callback)?;
            self_traverse(right, callback)?;
            cross_traverse(left, right, callback)
        }
    }
}

fn cross_traverse<F>(a: &AabbTree, b: &AabbTree, callback: &mut F) -> ControlFlow<()>
where
    F: FnMut(usize, usize) -> ControlFlow<()>,
{
    if !a.aabb().intersects(b.aabb()) {
        return ControlFlow::Continue(());
    }
    match (a, b) {
        (AabbTree::Leaf { items: ia, .. }, AabbTree::Leaf { items: ib, .. }) => {
            for (ba, xa) in ia {
                for (bb, xb) in ib {
                    if ba.intersects(bb) {
                        callback(*xa, *xb)?;
                    }
                }
            }
            ControlFlow::Continue(())
        }
        // Split the larger side; a leaf is never split.
        (AabbTree::Node { left, right, .. }, AabbTree::Leaf { .. }) => {
            cross_traverse(left, b, callback)?;
            cross_traverse(right, b, callback)
        }
        (AabbTree::Leaf { .. }, AabbTree::Node { left, right, .. }) => {
            cross_traverse(a, left, callback)?;
            cross_traverse(a, right, callback)
        }
        (
            AabbTree::Node {
                left: al,
                right: ar,
                size: sa,
                ..
            },
            AabbTree::Node {
                left: bl,
                right: br,
                size: sb,
                ..
            },
        ) => {
            if sa >= sb {
                cross_traverse(al, b, callback)?;
                cross_traverse(ar, b, callback)
            } else {
                cross_traverse(a, bl, callback)?;
                cross_traverse(a, br, callback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(x: f64) -> Option<Aabb> {
        Some(Aabb::new([x, 0.0, 0.0], [x + 1.0, 1.0, 1.0]))
    }

    #[test]
    fn touching_boxes_are_reported() {
        let boxes = vec![unit_box(0.0), unit_box(1.0), unit_box(3.0)];
        let mut pairs = Vec::new();
        let _ = box_self_intersection(&boxes, 1, |a, b| {
            pairs.push((a.min(b), a.max(b)));
            ControlFlow::Continue(())
        });
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn missing_boxes_are_skipped() {
        let boxes = vec![unit_box(0.0), None, unit_box(0.5)];
        let mut pairs = Vec::new();
        let _ = box_self_intersection(&boxes, 8, |a, b| {
            pairs.push((a.min(b), a.max(b)));
            ControlFlow::Continue(())
        });
        assert_eq!(pairs, vec![(0, 2)]);
    }
}
