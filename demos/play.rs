use maze_pathfinding::{Direction, Maze, MazeConfig, MoveEvent};

// Generates a small maze, walks the agent a few steps and prints the solution.
//
// Usage: cargo run --example play -- [size] [seed] [moves...]
// e.g.   cargo run --example play -- 11 7 down down right
//
// where in the output
// - # marks a wall
// - . marks an open cell
// - * marks the shortest path from the start (1, 1) to the goal (size - 2, size - 2)

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = MazeConfig::default().with_size(11);
    if let Some(size) = args.first().and_then(|s| s.parse().ok()) {
        config = config.with_size(size);
    }
    if let Some(seed) = args.get(1).and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }
    let mut maze = match Maze::from_config(&config) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    println!("{}", maze.grid());

    for arg in args.iter().skip(2) {
        match arg.parse::<Direction>() {
            Ok(dir) => {
                let event = maze.step(dir);
                println!("{dir}: {} -> {:?}", event.as_str(), maze.agent());
                if event == MoveEvent::ReachedGoal {
                    println!("You finished the maze!");
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    match maze.solve() {
        Some(path) => {
            println!("Path ({} cells):", path.len());
            println!("{}", maze.grid().render_path(&path));
        }
        None => println!("No solution found!"),
    }
}
