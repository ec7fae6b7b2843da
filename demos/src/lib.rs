//! Shared helpers for the graymaze demos: a seeded terrain generator and an
//! ASCII renderer for overlay images.

use graymaze_core::{Color, Point, Raster, RgbImage};
use graymaze_search::Palette;
use rand::{Rng, SeedableRng};

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 20;

/// Gray shades from low to high, used for unpainted pixels.
const SHADES: &[u8] = b" .:-=+*#%@";

/// A corridor maze used by the binary demo. `#` is wall.
pub const MAZE: &str = "\
##########################
#......#.........#.......#
#.####.#.#######.#.#####.#
#.#....#.#.....#...#...#.#
#.#.####.#.###.#####.#.#.#
#.#......#...#.......#...#
#.##########.#############
#........................#
##########################";

/// Rolling terrain: a handful of random cone-shaped hills over a flat plain.
pub fn terrain(width: usize, height: usize, seed: u64) -> Raster {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let hills: Vec<(Point, i32, i32)> = (0..8)
        .map(|_| {
            let c = Point::new(
                rng.random_range(0..width as i32),
                rng.random_range(0..height as i32),
            );
            (c, rng.random_range(60..=255), rng.random_range(3..10))
        })
        .collect();
    let mut grid = Raster::new(width, height);
    grid.fill_fn(|p| {
        let h = hills
            .iter()
            .map(|&(c, peak, radius)| {
                let d = (p.x - c.x).abs().max((p.y - c.y).abs());
                (peak * (radius - d) / radius).max(0)
            })
            .max()
            .unwrap_or(0);
        h.clamp(0, 255) as u8
    });
    grid
}

/// Render an overlay painted in `palette` as text: `S` start, `G` goal,
/// `o` path, and a gray ramp for everything else.
pub fn ascii(img: &RgbImage, palette: &Palette) -> String {
    let mut out = String::with_capacity((img.width() + 1) * img.height());
    for y in 0..img.height() as i32 {
        for x in 0..img.width() as i32 {
            let c = img.get(Point::new(x, y)).unwrap_or_default();
            let ch = match c {
                c if c == palette.start => 'S',
                c if c == palette.path => 'o',
                c if c == palette.goal => 'G',
                _ => {
                    let i = usize::from(c.r()) * (SHADES.len() - 1) / 255;
                    SHADES[i] as char
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
