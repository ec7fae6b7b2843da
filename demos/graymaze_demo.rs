//! Terminal demo: least-cost routes over random terrain and through a
//! corridor maze.
//!
//! Run: cargo run --bin graymaze-demo [seed]

use graymaze_core::{Color, Point, Raster, RgbImage};
use graymaze_demos::{HEIGHT, MAZE, WIDTH, ascii, terrain};
use graymaze_search::{MazeSearch, Palette, SearchConfig, render_overlay};
use log::{info, warn};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    info!("terrain seed {seed}");

    let grid = terrain(WIDTH, HEIGHT, seed);
    let start = Point::new(1, 1);
    let goal = Point::new(WIDTH as i32 - 2, HEIGHT as i32 - 2);
    match graymaze_search::search(&grid, start, goal) {
        Ok(path) => {
            println!("gray maze: cost {}, {} cells", path.cost(), path.len());
            print!("{}", ascii(&render_overlay(&grid, &path), &Palette::default()));
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let maze = match Raster::from_ascii(MAZE) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let palette = Palette {
        path: Color::from_rgb(0, 200, 0),
        ..Palette::default()
    };
    let mut ms = MazeSearch::with_config(SearchConfig::default().with_palette(palette));
    let base = RgbImage::from_binary(&maze);
    // The goal sits on a wall and gets snapped to the corridor below it.
    match ms.binary_path(&maze, Point::new(1, 1), Point::new(24, 8)) {
        Ok(path) => {
            println!("binary maze: {} steps", path.cost());
            print!("{}", ascii(&ms.draw_path(&base, path.points()), &ms.config().palette));
        }
        Err(e) => {
            warn!("{e}");
            print!("{}", ascii(&ms.draw_explored(&base), &ms.config().palette));
        }
    }
}
