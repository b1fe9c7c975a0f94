pub mod cell;
pub mod config;
pub mod error;
pub mod graph;
pub mod grid;
pub mod maze;
pub mod pathfinding;
pub mod save_state;
pub mod spanning_tree;

pub use cell::{Cell, Link};
pub use config::Config;
pub use error::{MazeError, Result};
pub use graph::{build_graph, AdjacencyGraph};
pub use grid::Grid;
pub use maze::{Maze, Side};
pub use save_state::SaveState;
pub use spanning_tree::{grow_spanning_tree, SpanningTree};
