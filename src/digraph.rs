use std::collections::HashMap;
use std::fmt;

use crate::error::UnchopError;

/// Directed graph over symbolic vertices, stored as index-based adjacency
/// lists with lazy vertex deletion.
///
/// Every vertex owns an integer slot assigned monotonically at creation.
/// Slots are never reused or renumbered: removing a vertex tombstones its
/// slot (`symbol[slot] = None`) so every other vertex's adjacency entries
/// stay valid without compaction. A symbol re-inserted after removal gets a
/// fresh, higher slot.
pub struct DirectedGraph {
    /// Live symbol -> slot.
    index: HashMap<String, usize>,
    /// Slot -> symbol; `None` marks a removed slot. Length counts every
    /// vertex ever created, tombstones included.
    symbol: Vec<Option<String>>,
    /// Out-neighbor slots, in edge-insertion order, no duplicates.
    adj_out: Vec<Vec<usize>>,
    /// In-neighbor slots, in edge-insertion order, no duplicates.
    adj_in: Vec<Vec<usize>>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        DirectedGraph {
            index: HashMap::new(),
            symbol: Vec::new(),
            adj_out: Vec::new(),
            adj_in: Vec::new(),
        }
    }

    /// Create the vertex if it is not already live; no-op otherwise.
    pub fn add_vertex(&mut self, v: &str) {
        if self.index.contains_key(v) {
            return;
        }
        let slot = self.symbol.len();
        self.index.insert(v.to_string(), slot);
        self.symbol.push(Some(v.to_string()));
        self.adj_out.push(Vec::new());
        self.adj_in.push(Vec::new());
    }

    /// Insert the edge `v -> w`, creating missing endpoints. Inserting an
    /// edge that already exists is a no-op: parallel edges are not allowed.
    /// Self-edges are permitted.
    pub fn add_edge(&mut self, v: &str, w: &str) {
        self.add_vertex(v);
        self.add_vertex(w);

        let vi = self.index[v];
        let wi = self.index[w];

        if self.adj_out[vi].contains(&wi) {
            return;
        }

        self.adj_out[vi].push(wi);
        self.adj_in[wi].push(vi);
    }

    /// Remove a live vertex, stripping it from every neighbor's opposite
    /// adjacency list. The slot is tombstoned, never reused.
    pub fn remove_vertex(&mut self, v: &str) -> Result<(), UnchopError> {
        let vi = self
            .index
            .remove(v)
            .ok_or_else(|| UnchopError::VertexNotFound(v.to_string()))?;

        // Lazy delete: tombstone the slot instead of shifting every other
        // vertex's index.
        self.symbol[vi] = None;

        let in_neighbors = std::mem::take(&mut self.adj_in[vi]);
        for ni in in_neighbors {
            self.adj_out[ni].retain(|&x| x != vi);
        }

        let out_neighbors = std::mem::take(&mut self.adj_out[vi]);
        for ni in out_neighbors {
            self.adj_in[ni].retain(|&x| x != vi);
        }

        Ok(())
    }

    /// Out-neighbor symbols of `v`, in edge-insertion order.
    pub fn adjacent_out_of(&self, v: &str) -> Result<Vec<&str>, UnchopError> {
        let vi = self.slot(v)?;
        Ok(self.adj_out[vi].iter().map(|&wi| self.symbol_at(wi)).collect())
    }

    /// In-neighbor symbols of `v`, in edge-insertion order.
    pub fn adjacent_in_to(&self, v: &str) -> Result<Vec<&str>, UnchopError> {
        let vi = self.slot(v)?;
        Ok(self.adj_in[vi].iter().map(|&wi| self.symbol_at(wi)).collect())
    }

    pub fn indegree(&self, v: &str) -> Result<usize, UnchopError> {
        Ok(self.adj_in[self.slot(v)?].len())
    }

    pub fn outdegree(&self, v: &str) -> Result<usize, UnchopError> {
        Ok(self.adj_out[self.slot(v)?].len())
    }

    /// Whether `v` is currently live.
    pub fn contains(&self, v: &str) -> bool {
        self.index.contains_key(v)
    }

    /// Live vertex symbols, in the order each symbol was first inserted
    /// (tombstoned slots are skipped).
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.symbol.iter().filter_map(|s| s.as_deref())
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges between live vertices.
    pub fn edge_count(&self) -> usize {
        self.adj_out.iter().map(|l| l.len()).sum()
    }

    fn slot(&self, v: &str) -> Result<usize, UnchopError> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| UnchopError::VertexNotFound(v.to_string()))
    }

    fn symbol_at(&self, slot: usize) -> &str {
        // Adjacency lists only ever reference live slots.
        self.symbol[slot]
            .as_deref()
            .expect("adjacency entry references a tombstoned slot")
    }
}

impl Default for DirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DirectedGraph {
    /// One line per live vertex: `SYM (indegree, outdegree): out-neighbors`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let vi = self.index[v];
            let adjacent = self.adj_out[vi]
                .iter()
                .map(|&wi| self.symbol_at(wi))
                .collect::<Vec<_>>()
                .join(", ");
            write!(
                f,
                "{} ({}, {}): {}",
                v,
                self.adj_in[vi].len(),
                self.adj_out[vi].len(),
                adjacent
            )?;
        }
        Ok(())
    }
}
