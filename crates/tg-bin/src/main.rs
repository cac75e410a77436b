//! termgrid entrypoint: a command-line inspector for the viewport algebra.
//!
//! Feeds rectangles and positions from the command line through the same
//! operations the host's render/selection paths use, printing the results.
//! Useful for eyeballing a damage-region computation or a walk order without
//! attaching a debugger to the host.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use core_geom::{Coord, Point, Rect};
use core_viewport::{Viewport, WalkDir, XWalk, YWalk};
use tracing::{debug, info};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "termgrid", version, about = "Terminal grid geometry inspector")]
struct Args {
    #[command(subcommand)]
    command: Command,
    /// Interpret rectangle arguments as exclusive (right/bottom one past the
    /// last cell) instead of inclusive.
    #[arg(long, global = true)]
    exclusive: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a region's edges, dimensions, and derived corners.
    Info {
        /// Rectangle as LEFT,TOP,RIGHT,BOTTOM.
        #[arg(value_parser = parse_rect)]
        rect: Rect,
    },
    /// Remove one region from another and print the remaining strips.
    Subtract {
        #[arg(value_parser = parse_rect)]
        original: Rect,
        #[arg(value_parser = parse_rect)]
        remove: Rect,
    },
    /// Print the overlap of two regions.
    Intersect {
        #[arg(value_parser = parse_rect)]
        a: Rect,
        #[arg(value_parser = parse_rect)]
        b: Rect,
    },
    /// Print the bounding box of two regions.
    Union {
        #[arg(value_parser = parse_rect)]
        a: Rect,
        #[arg(value_parser = parse_rect)]
        b: Rect,
    },
    /// Translate a region by a delta, checking for overflow.
    Offset {
        #[arg(value_parser = parse_rect)]
        rect: Rect,
        /// Delta as X,Y.
        #[arg(value_parser = parse_point)]
        delta: Point,
    },
    /// Clamp a position into a region.
    Clamp {
        #[arg(value_parser = parse_rect)]
        rect: Rect,
        /// Position as X,Y.
        #[arg(value_parser = parse_point)]
        pos: Point,
    },
    /// Print every cell of a region in a walk order.
    Walk {
        #[arg(value_parser = parse_rect)]
        rect: Rect,
        /// Horizontal direction: ltr or rtl.
        #[arg(long, default_value = "ltr")]
        x: String,
        /// Vertical direction: ttb or btt.
        #[arg(long, default_value = "ttb")]
        y: String,
        /// Stop after this many cells.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Compare two positions in traversal order.
    Compare {
        #[arg(value_parser = parse_rect)]
        rect: Rect,
        #[arg(value_parser = parse_point)]
        a: Point,
        #[arg(value_parser = parse_point)]
        b: Point,
    },
}

fn parse_coords<const N: usize>(s: &str) -> std::result::Result<[Coord; N], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated integers, got {s:?}"));
    }
    let mut out = [0 as Coord; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|e| format!("bad integer {part:?}: {e}"))?;
    }
    Ok(out)
}

fn parse_rect(s: &str) -> std::result::Result<Rect, String> {
    let [left, top, right, bottom] = parse_coords::<4>(s)?;
    Ok(Rect::new(left, top, right, bottom))
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let [x, y] = parse_coords::<2>(s)?;
    Ok(Point::new(x, y))
}

fn configure_logging() {
    // Logs go to stderr so piped output stays clean; RUST_LOG selects
    // verbosity.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn wrap(rect: Rect, exclusive: bool) -> Viewport {
    if exclusive {
        Viewport::from_exclusive(rect)
    } else {
        Viewport::from_inclusive(rect)
    }
}

fn parse_walk_dir(x: &str, y: &str) -> Result<WalkDir> {
    let x = match x {
        "ltr" => XWalk::LeftToRight,
        "rtl" => XWalk::RightToLeft,
        other => bail!("unknown horizontal direction {other:?} (want ltr or rtl)"),
    };
    let y = match y {
        "ttb" => YWalk::TopToBottom,
        "btt" => YWalk::BottomToTop,
        other => bail!("unknown vertical direction {other:?} (want ttb or btt)"),
    };
    Ok(WalkDir { x, y })
}

fn describe(label: &str, v: &Viewport) {
    if v.is_valid() {
        println!("{label}: {v}");
    } else {
        println!("{label}: {} (invalid)", v.to_inclusive());
    }
}

fn main() -> Result<()> {
    configure_logging();
    let args = Args::parse();
    info!(target: "termgrid", exclusive = args.exclusive, "startup");

    match args.command {
        Command::Info { rect } => {
            let v = wrap(rect, args.exclusive);
            describe("region", &v);
            println!("origin: {}", v.origin());
            println!("dimensions: {} ({} cells)", v.dimensions(), v.dimensions().area());
            println!("right: {} inclusive / {} exclusive", v.right_inclusive(), v.right_exclusive());
            println!("bottom: {} inclusive / {} exclusive", v.bottom_inclusive(), v.bottom_exclusive());
            println!("end sentinel: {}", v.end_exclusive());
            println!("valid: {}", v.is_valid());
        }
        Command::Subtract { original, remove } => {
            let original = wrap(original, args.exclusive);
            let remove = wrap(remove, args.exclusive);
            let pieces = original.subtract(&remove);
            debug!(target: "termgrid", pieces = pieces.len(), "subtract");
            println!("{} pieces", pieces.len());
            for (i, piece) in pieces.iter().enumerate() {
                println!("  #{i}: {piece}");
            }
        }
        Command::Intersect { a, b } => {
            let a = wrap(a, args.exclusive);
            let b = wrap(b, args.exclusive);
            describe("intersection", &a.intersect(&b));
        }
        Command::Union { a, b } => {
            let a = wrap(a, args.exclusive);
            let b = wrap(b, args.exclusive);
            describe("union", &a.union(&b));
        }
        Command::Offset { rect, delta } => {
            let v = wrap(rect, args.exclusive);
            let moved = v
                .offset(delta)
                .with_context(|| format!("offsetting {v} by {delta}"))?;
            describe("offset", &moved);
        }
        Command::Clamp { rect, pos } => {
            let v = wrap(rect, args.exclusive);
            let mut clamped = pos;
            v.clamp_point(&mut clamped)
                .with_context(|| format!("clamping {pos} into {}", v.to_inclusive()))?;
            println!("clamped: {pos} -> {clamped}");
        }
        Command::Walk { rect, x, y, limit } => {
            let v = wrap(rect, args.exclusive);
            let dir = parse_walk_dir(&x, &y)?;
            let limit = limit.unwrap_or(usize::MAX);
            for (i, cell) in v.cells(dir).take(limit).enumerate() {
                println!("{i:>4}: {cell}");
            }
        }
        Command::Compare { rect, a, b } => {
            let v = wrap(rect, args.exclusive);
            if !v.is_in_bounds(a, false) || !v.is_in_bounds(b, false) {
                bail!("both positions must be inside {}", v.to_inclusive());
            }
            let distance = v.compare_in_bounds(a, b, false);
            let order = match distance {
                d if d < 0 => "precedes",
                0 => "equals",
                _ => "follows",
            };
            println!("{a} {order} {b} (distance {distance})");
        }
    }
    Ok(())
}
