// interchange.rs - On-disk formats shared with the existing tooling
//
// Three artifacts, all keyed by the "(col, row)" coordinate rendering:
// the adjacency graph file (JSON object of vertex -> neighbor list), the
// marker file (JSON object with optional "start"/"end" keys), and the
// plain-text path file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use maze_core::{Coord, Graph, Markers};

// ----------------------------------------------------------------------
// Graph file
// ----------------------------------------------------------------------

/// Graph as it is written to disk: rendered coordinate strings mapping
/// to ordered neighbor string lists.
pub fn render_graph(graph: &Graph) -> BTreeMap<String, Vec<String>> {
    graph
        .iter()
        .map(|(vertex, neighbors)| {
            (
                vertex.to_string(),
                neighbors.iter().map(Coord::to_string).collect(),
            )
        })
        .collect()
}

/// Parse a rendered adjacency map back into a graph, re-validating the
/// symmetry invariant so a corrupt file cannot produce one-sided edges.
pub fn parse_graph(rendered: &BTreeMap<String, Vec<String>>) -> Result<Graph> {
    let mut adjacency = BTreeMap::new();
    for (vertex, neighbors) in rendered {
        let vertex: Coord = vertex.parse()?;
        let neighbors = neighbors
            .iter()
            .map(|n| n.parse())
            .collect::<maze_core::Result<Vec<Coord>>>()?;
        adjacency.insert(vertex, neighbors);
    }
    Ok(Graph::from_adjacency(adjacency)?)
}

pub fn write_graph(path: &Path, graph: &Graph) -> Result<()> {
    let text = serde_json::to_string_pretty(&render_graph(graph))?;
    fs::write(path, text).with_context(|| format!("cannot write graph file {}", path.display()))
}

pub fn read_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot open graph file {}", path.display()))?;
    let rendered = serde_json::from_str(&text)
        .with_context(|| format!("malformed graph file {}", path.display()))?;
    parse_graph(&rendered)
}

// ----------------------------------------------------------------------
// Marker file
// ----------------------------------------------------------------------

/// Marker file payload. Keys are optional so a partial locate result
/// (one marker found, the other missing) can still be persisted for
/// inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl MarkerFile {
    pub fn from_markers(markers: &Markers) -> Self {
        Self {
            start: Some(markers.start.to_string()),
            end: Some(markers.end.to_string()),
        }
    }

    /// Build from candidate lists, keeping a side only when it is
    /// unambiguous. Used to persist what a failed locate did find.
    pub fn from_candidates(starts: &[Coord], ends: &[Coord]) -> Self {
        Self {
            start: match starts {
                [only] => Some(only.to_string()),
                _ => None,
            },
            end: match ends {
                [only] => Some(only.to_string()),
                _ => None,
            },
        }
    }

    pub fn start_coord(&self) -> Result<Option<Coord>> {
        Ok(match &self.start {
            Some(text) => Some(text.parse()?),
            None => None,
        })
    }

    pub fn end_coord(&self) -> Result<Option<Coord>> {
        Ok(match &self.end {
            Some(text) => Some(text.parse()?),
            None => None,
        })
    }
}

pub fn write_markers(path: &Path, markers: &MarkerFile) -> Result<()> {
    let text = serde_json::to_string_pretty(markers)?;
    fs::write(path, text).with_context(|| format!("cannot write marker file {}", path.display()))
}

pub fn read_markers(path: &Path) -> Result<MarkerFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot open marker file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("malformed marker file {}", path.display()))
}

// ----------------------------------------------------------------------
// Path file
// ----------------------------------------------------------------------

/// Render a path in the path.txt convention: "(x, y)" entries joined by
/// single spaces.
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(Coord::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a path file. Readers of this format split on `") "` and then
/// strip whatever parentheses remain. The separator is lopsided, but
/// existing path files depend on it, so it is preserved as-is here.
pub fn parse_path(text: &str) -> Result<Vec<Coord>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(") ")
        .map(|entry| entry.parse::<Coord>().map_err(Into::into))
        .collect()
}

pub fn write_path(path: &Path, coords: &[Coord]) -> Result<()> {
    fs::write(path, format_path(coords))
        .with_context(|| format!("cannot write path file {}", path.display()))
}

pub fn read_path(path: &Path) -> Result<Vec<Coord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot open path file {}", path.display()))?;
    parse_path(&text)
}
