// graph.rs - 4-connected adjacency graph over traversable cells

use std::collections::BTreeMap;

use crate::coord::Coord;
use crate::error_handling::{MazeError, Result};
use crate::scanner::RoleMap;

/// Undirected adjacency over grid coordinates.
///
/// Neighbor lists keep the fixed up, down, left, right construction
/// order, and the backing map is a `BTreeMap` so iteration and
/// serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<Coord, Vec<Coord>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a graph from an explicit adjacency map (e.g. a graph file
    /// read back from disk). The symmetry invariant is re-validated, so a
    /// hand-edited or corrupted file cannot smuggle in one-sided edges.
    pub fn from_adjacency(adjacency: BTreeMap<Coord, Vec<Coord>>) -> Result<Self> {
        let graph = Self { adjacency };
        graph.validate_symmetry()?;
        Ok(graph)
    }

    pub fn contains(&self, vertex: Coord) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    pub fn neighbors(&self, vertex: Coord) -> &[Coord] {
        self.adjacency.get(&vertex).map_or(&[], |n| n.as_slice())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &[Coord])> {
        self.adjacency.iter().map(|(&v, n)| (v, n.as_slice()))
    }

    /// Check that every listed edge exists in both directions. A failure
    /// here means the vertex-role computation itself was inconsistent;
    /// callers must treat it as fatal, never patch the edge up.
    pub fn validate_symmetry(&self) -> Result<()> {
        for (&vertex, neighbors) in &self.adjacency {
            for &neighbor in neighbors {
                if !self.neighbors(neighbor).contains(&vertex) {
                    return Err(MazeError::InternalAsymmetry { vertex, neighbor });
                }
            }
        }
        Ok(())
    }
}

/// Build the adjacency graph from a role map.
///
/// Vertices are the coordinates whose role is traversable (walkable,
/// start, end). Each vertex lists, in up/down/left/right order, the
/// orthogonal candidates that are themselves vertices. Acceptance is pure
/// set membership in both directions, so the relation is symmetric by
/// construction; the invariant is still validated before the graph is
/// returned. Isolated vertices stay in with an empty list.
pub fn build(roles: &RoleMap) -> Result<Graph> {
    let mut adjacency = BTreeMap::new();
    for (&coord, &role) in roles {
        if !role.is_traversable() {
            continue;
        }
        let neighbors = coord
            .orthogonal_neighbors()
            .filter(|n| roles.get(n).map_or(false, |r| r.is_traversable()))
            .collect();
        adjacency.insert(coord, neighbors);
    }

    let graph = Graph { adjacency };
    graph.validate_symmetry()?;
    log::debug!("built graph with {} vertices", graph.vertex_count());
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CellRole;
    use proptest::prelude::*;

    fn all_walkable(cols: u32, rows: u32) -> RoleMap {
        let mut roles = RoleMap::new();
        for col in 0..cols {
            for row in 0..rows {
                roles.insert(Coord::new(col, row), CellRole::Walkable);
            }
        }
        roles
    }

    #[test]
    fn test_three_by_three_scenario() {
        let mut roles = all_walkable(3, 3);
        roles.insert(Coord::new(0, 0), CellRole::Start);
        roles.insert(Coord::new(2, 2), CellRole::End);

        let graph = build(&roles).unwrap();
        assert_eq!(graph.vertex_count(), 9);

        // Corners touch two cells, the center touches all four
        assert_eq!(
            graph.neighbors(Coord::new(0, 0)),
            &[Coord::new(0, 1), Coord::new(1, 0)]
        );
        assert_eq!(
            graph.neighbors(Coord::new(2, 2)),
            &[Coord::new(2, 1), Coord::new(1, 2)]
        );
        assert_eq!(
            graph.neighbors(Coord::new(1, 1)),
            &[
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(0, 1),
                Coord::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_walls_never_become_vertices_or_neighbors() {
        let mut roles = all_walkable(3, 1);
        roles.insert(Coord::new(1, 0), CellRole::Wall);

        let graph = build(&roles).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.contains(Coord::new(1, 0)));
        // The wall splits the row into two isolated cells
        assert!(graph.neighbors(Coord::new(0, 0)).is_empty());
        assert!(graph.neighbors(Coord::new(2, 0)).is_empty());
    }

    #[test]
    fn test_isolated_vertex_is_legal() {
        let mut roles = RoleMap::new();
        roles.insert(Coord::new(4, 4), CellRole::Walkable);

        let graph = build(&roles).unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.neighbors(Coord::new(4, 4)).is_empty());
    }

    #[test]
    fn test_empty_role_map_builds_empty_graph() {
        let graph = build(&RoleMap::new()).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_from_adjacency_rejects_one_sided_edge() {
        let mut adjacency = BTreeMap::new();
        adjacency.insert(Coord::new(0, 0), vec![Coord::new(0, 1)]);
        adjacency.insert(Coord::new(0, 1), vec![]);

        let err = Graph::from_adjacency(adjacency).unwrap_err();
        assert_eq!(
            err,
            MazeError::InternalAsymmetry {
                vertex: Coord::new(0, 0),
                neighbor: Coord::new(0, 1),
            }
        );
    }

    #[test]
    fn test_from_adjacency_rejects_dangling_neighbor() {
        // Neighbor that is not a vertex key at all
        let mut adjacency = BTreeMap::new();
        adjacency.insert(Coord::new(0, 0), vec![Coord::new(1, 0)]);

        assert!(Graph::from_adjacency(adjacency).is_err());
    }

    fn role_strategy() -> impl Strategy<Value = CellRole> {
        prop_oneof![
            Just(CellRole::Wall),
            Just(CellRole::Walkable),
            Just(CellRole::Start),
            Just(CellRole::End),
            Just(CellRole::Unknown),
        ]
    }

    fn role_map_strategy() -> impl Strategy<Value = RoleMap> {
        prop::collection::btree_map((0u32..8, 0u32..8), role_strategy(), 0..48).prop_map(
            |cells| {
                cells
                    .into_iter()
                    .map(|((col, row), role)| (Coord::new(col, row), role))
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_adjacency_is_symmetric(roles in role_map_strategy()) {
            let graph = build(&roles).unwrap();
            for (vertex, neighbors) in graph.iter() {
                for &neighbor in neighbors {
                    prop_assert!(
                        graph.neighbors(neighbor).contains(&vertex),
                        "{} -> {} has no reverse edge", vertex, neighbor
                    );
                }
            }
        }

        #[test]
        fn prop_only_traversable_roles_appear(roles in role_map_strategy()) {
            let graph = build(&roles).unwrap();
            for (vertex, neighbors) in graph.iter() {
                prop_assert!(roles[&vertex].is_traversable());
                for &neighbor in neighbors {
                    prop_assert!(roles[&neighbor].is_traversable());
                }
            }
        }
    }
}
