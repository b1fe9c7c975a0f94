use std::io::{self, BufRead};

use mazecraft::{Config, Maze, MazeError, SaveState};

fn main() {
    let config = Config::load();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut maze: Option<Maze> = None;

    loop {
        print_menu(maze.is_some());
        let input = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        match input.trim() {
            "0" => break,
            "1" => generate(&mut maze, &config, &mut lines),
            "2" => load(&mut maze, &mut lines),
            "3" if maze.is_some() => save(&maze, &config, &mut lines),
            "4" if maze.is_some() => display(&maze),
            "5" if maze.is_some() => find_escape(&mut maze),
            _ => println!("Incorrect option. Please try again"),
        }
    }
    println!("Bye!");
}

fn print_menu(maze_loaded: bool) {
    println!("=== Menu ===");
    println!("1. Generate a new maze");
    println!("2. Load a maze");
    if maze_loaded {
        println!("3. Save the maze");
        println!("4. Display the maze");
        println!("5. Find the escape");
    }
    println!("0. Exit");
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next().and_then(|line| line.ok())
}

/// Parse "N" as an NxN maze or "H W" as explicit height and width.
fn parse_dimensions(input: &str) -> Option<(i32, i32)> {
    let parts: Vec<i32> = input
        .split_whitespace()
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    match parts[..] {
        [size] => Some((size, size)),
        [height, width] => Some((height, width)),
        _ => None,
    }
}

fn generate(
    maze: &mut Option<Maze>,
    config: &Config,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    println!("Please, enter the size of a maze");
    let Some(input) = read_line(lines) else {
        return;
    };
    let Some((height, width)) = parse_dimensions(&input) else {
        println!("Cannot generate a maze. Invalid size");
        return;
    };
    match Maze::generate(
        height,
        width,
        config.maze.entrance_sides,
        &mut rand::thread_rng(),
    ) {
        Ok(generated) => {
            print!("{}", generated.render());
            *maze = Some(generated);
        }
        Err(e) => println!("Cannot generate a maze. {e}"),
    }
}

fn load(maze: &mut Option<Maze>, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some(path) = read_line(lines) else {
        return;
    };
    let path = path.trim();
    match SaveState::load_from_file(path).and_then(|state| state.restore_maze()) {
        Ok(loaded) => *maze = Some(loaded),
        Err(MazeError::FileNotFound { path }) => {
            println!("The file {path} does not exist");
        }
        Err(_) => println!("Cannot load the maze. It has an invalid format"),
    }
}

fn save(
    maze: &Option<Maze>,
    config: &Config,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(maze) = maze else {
        return;
    };
    let Some(input) = read_line(lines) else {
        return;
    };
    let input = input.trim();
    let path = if input.is_empty() {
        config.files.default_save_path.as_str()
    } else {
        input
    };
    if let Err(e) = SaveState::from_maze(maze).save_to_file(path) {
        println!("Cannot save the maze. {e}");
    }
}

fn display(maze: &Option<Maze>) {
    if let Some(maze) = maze {
        print!("{}", maze.render());
    }
}

fn find_escape(maze: &mut Option<Maze>) {
    let Some(maze) = maze else {
        return;
    };
    match maze.find_escape() {
        Ok(_) => print!("{}", maze.render()),
        Err(e) => eprintln!("Internal error: {e}"),
    }
}
