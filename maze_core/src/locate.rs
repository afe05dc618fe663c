// locate.rs - Start/end marker discovery

use crate::color::CellRole;
use crate::coord::Coord;
use crate::error_handling::{MazeError, Result};
use crate::scanner::RoleMap;

/// The resolved start and end markers, in the same zero-based
/// (column, row) convention as the graph vertex keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub start: Coord,
    pub end: Coord,
}

/// Scan the role map for the unique start and end markers.
///
/// Success requires exactly one of each. Zero or several of either is a
/// `MultipleOrMissingMarker` failure carrying every candidate found, so
/// ambiguity is surfaced to the caller instead of resolved by picking a
/// winner.
pub fn locate(roles: &RoleMap) -> Result<Markers> {
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for (&coord, &role) in roles {
        match role {
            CellRole::Start => starts.push(coord),
            CellRole::End => ends.push(coord),
            _ => {}
        }
    }

    if starts.len() == 1 && ends.len() == 1 {
        Ok(Markers {
            start: starts[0],
            end: ends[0],
        })
    } else {
        Err(MazeError::MultipleOrMissingMarker { starts, ends })
    }
}
