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

use std::collections::{BTreeMap, btree_map};

use crate::{geometry::intersection::Intersection3, numeric::scalar::Scalar};

/// Partner face and the object its intersection with the key face produced.
pub type OffendingEntry<T> = (usize, Intersection3<T>);

/// Faces involved in at least one intersection, each with the objects found
/// against its partners.
///
/// Keys iterate in ascending face order; each list keeps insertion order.
/// A key may have an empty list when only detection ran.
#[derive(Debug, Clone, PartialEq)]
pub struct OffendingMap<T: Scalar> {
    map: BTreeMap<usize, Vec<OffendingEntry<T>>>,
}

impl<T: Scalar> Default for OffendingMap<T> {
    fn default() -> Self {
        OffendingMap { map: BTreeMap::new() }
    }
}

impl<T: Scalar> OffendingMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `face` is a key.
    pub fn mark(&mut self, face: usize) {
        self.map.entry(face).or_default();
    }

    /// Record `object` as the intersection of `fa` and `fb` under both keys.
    pub fn record(&mut self, fa: usize, fb: usize, object: Intersection3<T>) {
        self.map.entry(fb).or_default().push((fa, object.clone()));
        self.map.entry(fa).or_default().push((fb, object));
    }

    pub fn get(&self, face: usize) -> Option<&[OffendingEntry<T>]> {
        self.map.get(&face).map(Vec::as_slice)
    }

    pub fn contains(&self, face: usize) -> bool {
        self.map.contains_key(&face)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.map.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, usize, Vec<OffendingEntry<T>>> {
        self.map.iter()
    }

    /// Shift every key and partner id by `face_offset`.
    pub fn offset(self, face_offset: usize) -> Self {
        let map = self
            .map
            .into_iter()
            .map(|(f, entries)| {
                let entries = entries
                    .into_iter()
                    .map(|(g, obj)| (g + face_offset, obj))
                    .collect();
                (f + face_offset, entries)
            })
            .collect();
        OffendingMap { map }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a OffendingMap<T> {
    type Item = (&'a usize, &'a Vec<OffendingEntry<T>>);
    type IntoIter = btree_map::Iter<'a, usize, Vec<OffendingEntry<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::point::Point3, numeric::ExactRational};

    #[test]
    fn record_appends_under_both_keys() {
        let mut map = OffendingMap::<ExactRational>::new();
        let p = Intersection3::Point(Point3::from_vals([0, 0, 0]));
        map.record(4, 1, p.clone());
        map.record(4, 2, p.clone());
        map.mark(7);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec![1, 2, 4, 7]);
        let partners: Vec<usize> = map.get(4).unwrap().iter().map(|(g, _)| *g).collect();
        assert_eq!(partners, vec![1, 2]);
        assert!(map.get(7).unwrap().is_empty());
    }

    #[test]
    fn offset_shifts_keys_and_partners() {
        let mut map = OffendingMap::<ExactRational>::new();
        map.record(0, 1, Intersection3::None);
        let shifted = map.offset(10);
        assert_eq!(shifted.keys().collect::<Vec<_>>(), vec![10, 11]);
        assert_eq!(shifted.get(10).unwrap()[0].0, 11);
    }
}
