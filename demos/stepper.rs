//! Terminal stepper demo: watch A* work through a random obstacle field one
//! tick at a time.
//!
//! Run: cargo run --bin stepper [seed]

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use rand::SeedableRng;
use rand::RngExt;

use stepgrid_core::{CellType, Grid, Point};
use stepgrid_paths::{Astar, SearchDetails, StepSearcher};

const WIDTH: i32 = 40;
const HEIGHT: i32 = 20;
const SOLID_CHANCE: f64 = 0.3;
const TICK_DELAY: Duration = Duration::from_millis(15);

fn parse_seed() -> u64 {
    std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42)
}

fn build_grid(seed: u64) -> Grid {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let grid = Grid::new(WIDTH, HEIGHT);
    grid.fill_fn(|_| {
        if rng.random_bool(SOLID_CHANCE) {
            CellType::Solid
        } else {
            CellType::Empty
        }
    });
    // Endpoints override whatever the field put there.
    grid.set_kind(Point::new(1, 1), CellType::Start);
    grid.set_kind(Point::new(WIDTH - 2, HEIGHT - 2), CellType::End);
    grid
}

fn color_of(kind: CellType) -> Color {
    match kind {
        CellType::Invalid => Color::Magenta,
        CellType::Solid => Color::DarkGrey,
        CellType::Empty => Color::Grey,
        CellType::Open => Color::Green,
        CellType::Closed => Color::Blue,
        CellType::Current => Color::Yellow,
        CellType::Start => Color::Cyan,
        CellType::End => Color::Red,
    }
}

fn draw(
    out: &mut impl Write,
    grid: &Grid,
    details: &SearchDetails,
    name: &str,
) -> io::Result<()> {
    for y in 0..grid.height() {
        execute!(out, cursor::MoveTo(0, y as u16))?;
        for x in 0..grid.width() {
            let kind = grid.at(Point::new(x, y)).kind;
            execute!(out, SetForegroundColor(color_of(kind)), Print(kind.glyph()))?;
        }
    }

    if let Some(path) = &details.path {
        execute!(out, SetForegroundColor(Color::White))?;
        for p in path {
            execute!(out, cursor::MoveTo(p.x as u16, p.y as u16), Print('*'))?;
        }
    }

    let status = format!(
        "{}  op {:>5}  frontier {:>4}  visited {:>4}  unexplored {:>4}  ",
        name, details.operations, details.frontier, details.visited, details.unexplored
    );
    execute!(
        out,
        ResetColor,
        cursor::MoveTo(0, grid.height() as u16 + 1),
        Print(status)
    )?;
    out.flush()
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = parse_seed();
    let grid = build_grid(seed);
    let Some(mut search) = Astar::new(grid.clone()) else {
        eprintln!("Error: grid has no start/end cell");
        std::process::exit(1);
    };
    log::info!(
        "stepping {} over a {WIDTH}x{HEIGHT} field (seed {seed})",
        search.name()
    );

    let mut out = io::stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )?;

    let details = loop {
        let details = search.tick();
        draw(&mut out, &grid, &details, search.name())?;
        if details.done() {
            break details;
        }
        thread::sleep(TICK_DELAY);
    };

    // Leave the final frame up briefly before restoring the screen.
    thread::sleep(Duration::from_secs(2));
    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;

    match &details.path {
        Some(path) => log::info!(
            "path found: {} steps in {} operations",
            path.len() - 1,
            details.operations
        ),
        None => log::info!(
            "no path: frontier exhausted after {} operations",
            details.operations
        ),
    }
    Ok(())
}
