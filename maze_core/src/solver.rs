// solver.rs - Shortest-path search over the cell graph

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, VecDeque};

use crate::coord::Coord;
use crate::graph::Graph;

/// A* over unit-weight edges with the Manhattan heuristic.
///
/// Returns the start-to-goal path inclusive of both endpoints, or `None`
/// when the goal is unreachable or either endpoint is not a vertex. Heap
/// entries order on (f, g, coord) so ties resolve deterministically.
pub fn astar(graph: &Graph, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let mut open = BinaryHeap::new();
    let mut g_score: BTreeMap<Coord, u32> = BTreeMap::new();
    let mut came_from: BTreeMap<Coord, Coord> = BTreeMap::new();
    let mut closed: BTreeSet<Coord> = BTreeSet::new();

    g_score.insert(start, 0);
    open.push(Reverse((start.manhattan_distance(goal), 0u32, start)));

    while let Some(Reverse((_, g, current))) = open.pop() {
        if current == goal {
            return Some(reconstruct(&came_from, start, goal));
        }
        if !closed.insert(current) {
            continue;
        }

        for &neighbor in graph.neighbors(current) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative = g + 1;
            if g_score.get(&neighbor).map_or(true, |&best| tentative < best) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative);
                let f = tentative + neighbor.manhattan_distance(goal);
                open.push(Reverse((f, tentative, neighbor)));
            }
        }
    }

    None
}

/// Plain breadth-first shortest path. With unit weights this agrees with
/// `astar` on path length; kept as the simple cross-check.
pub fn bfs(graph: &Graph, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let mut came_from: BTreeMap<Coord, Coord> = BTreeMap::new();
    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(reconstruct(&came_from, start, goal));
        }
        for &neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                came_from.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    None
}

fn reconstruct(came_from: &BTreeMap<Coord, Coord>, start: Coord, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut node = goal;
    while node != start {
        node = came_from[&node];
        path.push(node);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CellRole;
    use crate::graph::build;
    use crate::scanner::RoleMap;

    fn grid_graph(cols: u32, rows: u32, walls: &[(u32, u32)]) -> Graph {
        let mut roles = RoleMap::new();
        for col in 0..cols {
            for row in 0..rows {
                roles.insert(Coord::new(col, row), CellRole::Walkable);
            }
        }
        for &(col, row) in walls {
            roles.insert(Coord::new(col, row), CellRole::Wall);
        }
        build(&roles).unwrap()
    }

    #[test]
    fn test_astar_crosses_open_grid() {
        let graph = grid_graph(3, 3, &[]);
        let path = astar(&graph, Coord::new(0, 0), Coord::new(2, 2)).unwrap();

        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Coord::new(0, 0));
        assert_eq!(path[4], Coord::new(2, 2));
        // Every hop is a real edge
        for pair in path.windows(2) {
            assert!(graph.neighbors(pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn test_astar_routes_around_walls() {
        // Wall column with a gap at the bottom
        let graph = grid_graph(3, 3, &[(1, 0), (1, 1)]);
        let path = astar(&graph, Coord::new(0, 0), Coord::new(2, 0)).unwrap();

        assert_eq!(path.len(), 7);
        assert!(path.contains(&Coord::new(1, 2)));
    }

    #[test]
    fn test_bfs_agrees_with_astar_on_length() {
        let graph = grid_graph(4, 4, &[(1, 1), (2, 1), (2, 3)]);
        let start = Coord::new(0, 3);
        let goal = Coord::new(3, 0);

        let by_astar = astar(&graph, start, goal).unwrap();
        let by_bfs = bfs(&graph, start, goal).unwrap();
        assert_eq!(by_astar.len(), by_bfs.len());
    }

    #[test]
    fn test_unreachable_goal_is_none() {
        // Full wall column separates the halves
        let graph = grid_graph(3, 2, &[(1, 0), (1, 1)]);
        assert!(astar(&graph, Coord::new(0, 0), Coord::new(2, 0)).is_none());
        assert!(bfs(&graph, Coord::new(0, 0), Coord::new(2, 0)).is_none());
    }

    #[test]
    fn test_endpoint_missing_from_graph_is_none() {
        let graph = grid_graph(2, 2, &[]);
        assert!(astar(&graph, Coord::new(9, 9), Coord::new(0, 0)).is_none());
        assert!(astar(&graph, Coord::new(0, 0), Coord::new(9, 9)).is_none());
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = grid_graph(2, 2, &[]);
        let path = astar(&graph, Coord::new(1, 1), Coord::new(1, 1)).unwrap();
        assert_eq!(path, vec![Coord::new(1, 1)]);
    }
}
