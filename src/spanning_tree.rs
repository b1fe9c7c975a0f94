use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cell::Link;
use crate::graph::AdjacencyGraph;
use crate::grid::Grid;

/// Corridor structure of the maze: per-cell tree links plus the order in
/// which cells joined the tree. Grows monotonically during generation and is
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    links: Vec<Vec<Link>>,
    members: Vec<usize>,
    in_tree: Vec<bool>,
}

impl SpanningTree {
    pub fn with_capacity(cell_count: usize) -> Self {
        SpanningTree {
            links: vec![Vec::new(); cell_count],
            members: Vec::new(),
            in_tree: vec![false; cell_count],
        }
    }

    /// Register a cell as part of the tree without attaching a link yet.
    pub fn insert_member(&mut self, id: usize) {
        if !self.in_tree[id] {
            self.in_tree[id] = true;
            self.members.push(id);
        }
    }

    /// Attach a directed link under its `from` cell, registering the cell as
    /// a member if this is its first appearance.
    pub fn add_link(&mut self, link: Link) {
        self.insert_member(link.from);
        self.links[link.from].push(link);
    }

    pub fn contains(&self, id: usize) -> bool {
        self.in_tree.get(id).copied().unwrap_or(false)
    }

    pub fn links_of(&self, id: usize) -> &[Link] {
        self.links.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cells in join order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Total number of directed link entries; every undirected connection
    /// counts twice.
    pub fn link_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }
}

/// A frontier link waiting in the priority queue. Cheapest weight wins;
/// equal weights fall back to arrival order, which keeps the expansion
/// deterministic for a fixed adjacency graph (`BinaryHeap` alone is not
/// stable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueuedLink {
    link: Link,
    seq: u64,
}

impl Ord for QueuedLink {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other
            .link
            .weight
            .cmp(&self.link.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedLink {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Grow a spanning tree over every cell reachable from `start` in the
/// adjacency graph, randomized-Prim style.
///
/// One global frontier queue drives the whole walk: popping the cheapest
/// link records it (and its flip) under both endpoints, then the
/// destination's links to unvisited cells join the queue before the next
/// pop. Cells are marked visited when enqueued, not when dequeued, so a cell
/// is never queued twice.
pub fn grow_spanning_tree(grid: &Grid, graph: &AdjacencyGraph, start: usize) -> SpanningTree {
    let mut tree = SpanningTree::with_capacity(grid.len());
    let mut visited = vec![false; grid.len()];
    let mut queue: BinaryHeap<QueuedLink> = BinaryHeap::new();
    let mut seq: u64 = 0;

    tree.insert_member(start);
    visited[start] = true;
    enqueue_frontier(graph, start, &mut visited, &mut queue, &mut seq);

    while let Some(entry) = queue.pop() {
        let link = entry.link;
        tree.add_link(link);
        tree.add_link(link.flip());
        enqueue_frontier(graph, link.to, &mut visited, &mut queue, &mut seq);
    }
    tree
}

fn enqueue_frontier(
    graph: &AdjacencyGraph,
    from: usize,
    visited: &mut [bool],
    queue: &mut BinaryHeap<QueuedLink>,
    seq: &mut u64,
) {
    for &link in graph.links_of(from) {
        if !visited[link.to] {
            visited[link.to] = true;
            queue.push(QueuedLink { link, seq: *seq });
            *seq += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grow(height: i32, width: i32, seed: u64) -> (Grid, SpanningTree) {
        let grid = Grid::new(height, width).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = build_graph(&grid, &mut rng);
        let start = grid.get_id(1, 1);
        let tree = grow_spanning_tree(&grid, &graph, start);
        (grid, tree)
    }

    #[test]
    fn queue_orders_by_weight_then_arrival() {
        let mut queue = BinaryHeap::new();
        queue.push(QueuedLink {
            link: Link::new(0, 1, 5),
            seq: 0,
        });
        queue.push(QueuedLink {
            link: Link::new(0, 2, 3),
            seq: 1,
        });
        queue.push(QueuedLink {
            link: Link::new(0, 3, 3),
            seq: 2,
        });
        let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|e| e.link.to)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn every_room_cell_joins_the_tree() {
        let (grid, tree) = grow(9, 11, 7);
        for row in 0..grid.height {
            for col in 0..grid.width {
                if grid.is_room_cell(row, col) {
                    assert!(
                        tree.contains(grid.get_id(row, col)),
                        "room ({row},{col}) missing from tree"
                    );
                }
            }
        }
    }

    #[test]
    fn tree_has_one_less_connection_than_members() {
        let (_, tree) = grow(9, 9, 8);
        assert_eq!(tree.link_count(), 2 * (tree.members().len() - 1));
    }

    #[test]
    fn growth_is_deterministic_for_a_seed() {
        let (_, a) = grow(7, 7, 9);
        let (_, b) = grow(7, 7, 9);
        assert_eq!(a.members(), b.members());
        for &id in a.members() {
            assert_eq!(a.links_of(id), b.links_of(id));
        }
    }
}
