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

use std::cmp::Ordering;

use crate::geometry::aabb::Aabb;

/// A median-split tree over indexed boxes. Leaves hold at most `cutoff`
/// entries.
#[derive(Debug)]
pub enum AabbTree {
    Leaf {
        aabb: Aabb,
        items: Vec<(Aabb, usize)>,
    },
    Node {
        aabb: Aabb,
        left: Box<AabbTree>,
        right: Box<AabbTree>,
        size: usize,
    },
}

impl AabbTree {
    /// Build a tree over `(aabb, id)` pairs. Returns `None` for no items.
    pub fn build(items: Vec<(Aabb, usize)>, cutoff: usize) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self::build_binary_tree(items, cutoff.max(1)))
    }

    fn build_binary_tree(mut items: Vec<(Aabb, usize)>, cutoff: usize) -> Self {
        let aabb = items
            .iter()
            .skip(1)
            .fold(items[0].0, |acc, (b, _)| acc.union(b));

        if items.len() <= cutoff {
            return AabbTree::Leaf { aabb, items };
        }

        let axis = aabb.longest_axis();
        items.sort_by(|(a, ia), (b, ib)| {
            a.center(axis)
                .partial_cmp(&b.center(axis))
                .unwrap_or(Ordering::Equal)
                .then(ia.cmp(ib))
        });

        let size = items.len();
        let mid = size / 2;
        let right_items = items.split_off(mid);

        let left = Box::new(Self::build_binary_tree(items, cutoff));
        let right = Box::new(Self::build_binary_tree(right_items, cutoff));

        AabbTree::Node {
            aabb,
            left,
            right,
            size,
        }
    }

    pub fn aabb(&self) -> &Aabb {
        match self {
            AabbTree::Leaf { aabb, .. } => aabb,
            AabbTree::Node { aabb, .. } => aabb,
        }
    }
}
