//! A 2-D KD-tree point index.
//!
//! Nodes live in a flat arena and link to their children by index. The tree
//! is never rebalanced, so its depth depends on insertion order: feeding it
//! sorted or collinear points produces a linked list. [`build_vertex_index`]
//! therefore inserts ring vertices in a pseudo-random (seeded) permutation,
//! which keeps the expected depth logarithmic.

use geo::Coord;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rstar::{Envelope, AABB};

use crate::ring::Ring;

/// A point stored in a [`KdTree`] together with its payload.
#[derive(Clone, Debug)]
pub struct KdNode<T> {
    coord: Coord<f64>,
    data:  T,
    left:  Option<usize>,
    right: Option<usize>,
}

impl<T> KdNode<T> {
    #[inline] pub fn coord(&self) -> Coord<f64> { self.coord }
    #[inline] pub fn data(&self) -> &T { &self.data }
}

/// KD-tree over 2-D points. Even levels split on `x`, odd levels on `y`;
/// keys equal to a node's key descend to the right, so duplicate points with
/// distinct payloads are all retained.
#[derive(Clone, Debug)]
pub struct KdTree<T> {
    nodes: Vec<KdNode<T>>,
    root:  Option<usize>,
}

impl<T> Default for KdTree<T> {
    fn default() -> Self { Self { nodes: Vec::new(), root: None } }
}

impl<T> KdTree<T> {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn len(&self) -> usize { self.nodes.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Insert a point with its payload; returns the arena index of the node.
    pub fn insert(&mut self, coord: Coord<f64>, data: T) -> usize {
        let id = self.nodes.len();
        self.nodes.push(KdNode { coord, data, left: None, right: None });

        let Some(mut current) = self.root else {
            self.root = Some(id);
            return id;
        };

        let mut split_x = true;
        loop {
            let node = &self.nodes[current];
            let go_left = if split_x { coord.x < node.coord.x } else { coord.y < node.coord.y };
            let child = if go_left { node.left } else { node.right };
            match child {
                Some(next) => current = next,
                None => {
                    let node = &mut self.nodes[current];
                    if go_left { node.left = Some(id) } else { node.right = Some(id) }
                    return id;
                }
            }
            split_x = !split_x;
        }
    }

    /// All nodes whose point lies in the (closed) envelope.
    pub fn query(&self, envelope: &AABB<[f64; 2]>) -> Vec<&KdNode<T>> {
        let mut result = Vec::new();
        self.visit(envelope, |node| result.push(node));
        result
    }

    /// Call `visit` for every node whose point lies in the envelope.
    pub fn visit<'a>(&'a self, envelope: &AABB<[f64; 2]>, mut visit: impl FnMut(&'a KdNode<T>)) {
        let Some(root) = self.root else { return };
        let (lower, upper) = (envelope.lower(), envelope.upper());

        let mut stack = vec![(root, true)];
        while let Some((id, split_x)) = stack.pop() {
            let node = &self.nodes[id];
            let key = if split_x { node.coord.x } else { node.coord.y };
            let (min, max) = if split_x { (lower[0], upper[0]) } else { (lower[1], upper[1]) };

            if envelope.contains_point(&[node.coord.x, node.coord.y]) {
                visit(node);
            }
            if let Some(left) = node.left {
                if min < key { stack.push((left, !split_x)); }
            }
            if let Some(right) = node.right {
                if max >= key { stack.push((right, !split_x)); }
            }
        }
    }

    /// Length of the longest root-to-leaf path (0 for an empty tree).
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else { return 0 };
        let mut deepest = 0;
        let mut stack = vec![(root, 1)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.into_iter().chain(node.right).map(|child| (child, depth + 1)));
        }
        deepest
    }
}

/// Index the distinct vertices of `ring` (the closing duplicate is skipped),
/// with each vertex's ring position as payload, inserting them in a random
/// permutation drawn from `seed`.
pub fn build_vertex_index(ring: &Ring<'_>, seed: u64) -> KdTree<usize> {
    let mut order = (0..ring.num_vertices()).collect::<Vec<_>>();
    order.shuffle(&mut StdRng::seed_from_u64(seed));

    let mut index = KdTree::new();
    for i in order {
        index.insert(ring.coord(i), i);
    }
    index
}

#[cfg(test)]
mod tests {
    use geo::{coord, LineString};

    use super::*;

    fn brute_force(points: &[Coord<f64>], env: &AABB<[f64; 2]>) -> Vec<usize> {
        points.iter().enumerate()
            .filter(|(_, c)| env.contains_point(&[c.x, c.y]))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn empty_tree() {
        let tree: KdTree<()> = KdTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
        assert!(tree.query(&AABB::from_corners([0.0, 0.0], [1.0, 1.0])).is_empty());
    }

    #[test]
    fn query_matches_brute_force() {
        let points = (0..200)
            .map(|i| {
                let t = i as f64;
                coord! { x: (t * 7.3) % 17.0, y: (t * 3.1) % 11.0 }
            })
            .collect::<Vec<_>>();

        let mut tree = KdTree::new();
        for (i, p) in points.iter().enumerate() {
            tree.insert(*p, i);
        }

        for env in [
            AABB::from_corners([2.0, 2.0], [8.0, 5.0]),
            AABB::from_corners([0.0, 0.0], [17.0, 11.0]),
            AABB::from_corners([16.5, 10.5], [20.0, 20.0]),
        ] {
            let mut hits = tree.query(&env).into_iter().map(|n| *n.data()).collect::<Vec<_>>();
            hits.sort_unstable();
            assert_eq!(hits, brute_force(&points, &env));
        }
    }

    #[test]
    fn duplicates_keep_distinct_payloads() {
        let mut tree = KdTree::new();
        let p = coord! { x: 1.0, y: 1.0 };
        tree.insert(p, "a");
        tree.insert(p, "b");
        tree.insert(p, "c");
        let mut hits = tree.query(&AABB::from_point([1.0, 1.0])).into_iter().map(|n| *n.data()).collect::<Vec<_>>();
        hits.sort_unstable();
        assert_eq!(hits, vec!["a", "b", "c"]);
    }

    #[test]
    fn query_boundary_is_closed() {
        let mut tree = KdTree::new();
        tree.insert(coord! { x: 0.0, y: 0.0 }, 0);
        tree.insert(coord! { x: 1.0, y: 1.0 }, 1);
        let hits = tree.query(&AABB::from_corners([1.0, 1.0], [2.0, 2.0]));
        assert_eq!(hits.len(), 1);
        assert_eq!(*hits[0].data(), 1);
    }

    /// Sorted insertion degenerates into a list; the shuffled vertex index
    /// stays shallow for the same points.
    #[test]
    fn shuffled_insertion_bounds_depth() {
        let n = 1000;
        let mut coords = (0..n).map(|i| (i as f64, i as f64)).collect::<Vec<_>>();
        coords.push((n as f64, 0.0));
        coords.push((0.0, 0.0));
        let line = LineString::from(coords);
        let ring = Ring::new(&line).unwrap();

        let mut sorted = KdTree::new();
        for i in 0..ring.num_vertices() {
            sorted.insert(ring.coord(i), i);
        }
        assert!(sorted.depth() >= n);

        let shuffled = build_vertex_index(&ring, 42);
        assert_eq!(shuffled.len(), ring.num_vertices());
        assert!(shuffled.depth() < 100, "depth {}", shuffled.depth());
    }

    #[test]
    fn vertex_index_skips_closing_vertex() {
        let line = LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let ring = Ring::new(&line).unwrap();
        let index = build_vertex_index(&ring, 7);
        let mut ids = index.query(&AABB::from_corners([-1.0, -1.0], [2.0, 2.0]))
            .into_iter().map(|n| *n.data()).collect::<Vec<_>>();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
