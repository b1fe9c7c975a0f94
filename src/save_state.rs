use std::fs;
use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::cell::Link;
use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::maze::Maze;
use crate::spanning_tree::SpanningTree;

/// Snapshot format version; bumped on any incompatible layout change.
pub const FORMAT_VERSION: u32 = 1;

/// Versioned snapshot of a generated maze: dimensions, carved cells, the
/// spanning tree (member order plus directed links), and the entrance ids.
/// Restoring reproduces rendering and path-finding exactly, because the
/// per-cell link order is preserved.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveState {
    pub version: u32,
    pub height: i32,
    pub width: i32,
    /// Ids of cells carved to passage.
    pub passages: Vec<usize>,
    /// Cells in the order they joined the spanning tree.
    pub members: Vec<usize>,
    /// Directed tree links, listed per member in link-list order.
    pub links: Vec<SavedLink>,
    /// The two entrance cell ids, in placement order.
    pub entrances: [usize; 2],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedLink {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

impl SaveState {
    /// Capture the full persistent state of a maze. The solved path is not
    /// part of the snapshot; it is recomputed on demand after loading.
    pub fn from_maze(maze: &Maze) -> Self {
        let grid = maze.grid();
        let tree = maze.tree();

        let passages = (0..grid.len()).filter(|&id| !grid.is_wall(id)).collect();
        let members = tree.members().to_vec();
        let mut links = Vec::with_capacity(tree.link_count());
        for &member in tree.members() {
            for link in tree.links_of(member) {
                links.push(SavedLink {
                    from: link.from,
                    to: link.to,
                    weight: link.weight,
                });
            }
        }

        SaveState {
            version: FORMAT_VERSION,
            height: grid.height,
            width: grid.width,
            passages,
            members,
            links,
            entrances: maze.entrances(),
        }
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MazeError::InvalidFormat(e.to_string()))?;
        fs::write(path, json).map_err(|e| MazeError::Io {
            path: path.to_string(),
            source: e,
        })
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MazeError::FileNotFound {
                path: path.to_string(),
            },
            _ => MazeError::Io {
                path: path.to_string(),
                source: e,
            },
        })?;
        serde_json::from_str(&json).map_err(|e| MazeError::InvalidFormat(e.to_string()))
    }

    /// Rebuild a maze from the snapshot. Everything is validated before any
    /// maze is produced, so a caller holding an existing maze only replaces
    /// it on full success.
    pub fn restore_maze(&self) -> Result<Maze> {
        if self.version != FORMAT_VERSION {
            return Err(MazeError::InvalidFormat(format!(
                "unsupported snapshot version {}",
                self.version
            )));
        }
        let mut grid = Grid::new(self.height, self.width).map_err(|e| match e {
            MazeError::InvalidDimensions { height, width } => MazeError::InvalidFormat(format!(
                "snapshot dimensions {height}x{width} are below the minimum"
            )),
            other => other,
        })?;

        let cell_count = grid.len();
        let in_range = |id: usize| id < cell_count;
        if !self.passages.iter().all(|&id| in_range(id))
            || !self.members.iter().all(|&id| in_range(id))
            || !self.links.iter().all(|l| in_range(l.from) && in_range(l.to))
        {
            return Err(MazeError::InvalidFormat(
                "cell id out of range for the snapshot dimensions".to_string(),
            ));
        }
        if !self.entrances.iter().all(|&id| in_range(id)) {
            return Err(MazeError::InvalidFormat(
                "entrance id out of range for the snapshot dimensions".to_string(),
            ));
        }

        for &id in &self.passages {
            grid.carve(id);
        }
        let mut tree = SpanningTree::with_capacity(cell_count);
        for &id in &self.members {
            tree.insert_member(id);
        }
        for link in &self.links {
            tree.add_link(Link::new(link.from, link.to, link.weight));
        }
        if self.entrances.iter().any(|&id| !tree.contains(id)) {
            return Err(MazeError::InvalidFormat(
                "entrance cell is not part of the spanning tree".to_string(),
            ));
        }
        Ok(Maze::from_parts(grid, tree, self.entrances))
    }
}
