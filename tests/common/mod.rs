use mazecraft::{Maze, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate a maze with left/right entrances from a fixed seed.
pub fn generate_seeded(height: i32, width: i32, seed: u64) -> Maze {
    let mut rng = StdRng::seed_from_u64(seed);
    Maze::generate(height, width, [Side::Left, Side::Right], &mut rng)
        .expect("seeded generation must succeed")
}

/// Room cell ids of a maze grid: odd (row, col) inside the boundary band.
pub fn room_ids(maze: &Maze) -> Vec<usize> {
    let grid = maze.grid();
    let mut ids = Vec::new();
    for row in 0..grid.height {
        for col in 0..grid.width {
            if grid.is_room_cell(row, col) {
                ids.push(grid.get_id(row, col));
            }
        }
    }
    ids
}
