use clap::{Parser, Subcommand};
use color_eyre::eyre::bail;

use filtered_predicates::exact;
use filtered_predicates::filter::{Filter, FilterConfig, Strategy};
use filtered_predicates::point::{Point2, Point3, WeightedPoint2, WeightedPoint3};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Skip the interval phase.
    #[clap(long)]
    exact_only: bool,

    /// Check every fast decision against exact arithmetic.
    #[clap(long)]
    verify: bool,

    /// Log phase transitions.
    #[clap(long)]
    trace: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Orientation of 3 points in the plane (6 numbers) or 4 points in space (12 numbers).
    Orient {
        #[arg(value_name = "COORD", allow_negative_numbers = true, required = true)]
        coords: Vec<f64>,
    },
    /// Power test of weighted points `x y [z] w`: 3 or 4 planar points (9 or 12 numbers),
    /// or 5 points in space (20 numbers).
    Power {
        #[arg(value_name = "COORD", allow_negative_numbers = true, required = true)]
        coords: Vec<f64>,
    },
}

fn point2(c: &[f64]) -> color_eyre::Result<Point2> {
    Ok(Point2::try_new(c[0], c[1])?)
}

fn point3(c: &[f64]) -> color_eyre::Result<Point3> {
    Ok(Point3::try_new(c[0], c[1], c[2])?)
}

fn weighted2(c: &[f64]) -> color_eyre::Result<WeightedPoint2> {
    Ok(WeightedPoint2::try_new(c[0], c[1], c[2])?)
}

fn weighted3(c: &[f64]) -> color_eyre::Result<WeightedPoint3> {
    Ok(WeightedPoint3::try_new(c[0], c[1], c[2], c[3])?)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.trace {
            simplelog::LevelFilter::Trace
        } else {
            simplelog::LevelFilter::Debug
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();
    println!("args = {:?}", args);

    let filter = Filter::new(FilterConfig {
        strategy: if args.exact_only {
            Strategy::ExactOnly
        } else {
            Strategy::Filtered
        },
        verify: args.verify,
    });
    exact::reset_conversions();

    match &args.command {
        Command::Orient { coords } => match coords.len() {
            6 => {
                let p = point2(&coords[0..2])?;
                let q = point2(&coords[2..4])?;
                let r = point2(&coords[4..6])?;
                println!("orientation_2d({}, {}, {}) = {}", p, q, r, filter.orientation_2d(&p, &q, &r));
            }
            12 => {
                let p = point3(&coords[0..3])?;
                let q = point3(&coords[3..6])?;
                let r = point3(&coords[6..9])?;
                let s = point3(&coords[9..12])?;
                let o = filter.orientation_3d(&p, &q, &r, &s);
                println!("orientation_3d({}, {}, {}, {}) = {}", p, q, r, s, o);
            }
            n => bail!("orient expects 6 or 12 coordinates, got {}", n),
        },
        Command::Power { coords } => match coords.len() {
            9 => {
                let p = weighted2(&coords[0..3])?;
                let q = weighted2(&coords[3..6])?;
                let t = weighted2(&coords[6..9])?;
                let side = filter.power_test_2d_degenerate(&p, &q, &t);
                println!("power_test_2d_degenerate({}, {}, {}) = {}", p, q, t, side);
            }
            12 => {
                let p = weighted2(&coords[0..3])?;
                let q = weighted2(&coords[3..6])?;
                let r = weighted2(&coords[6..9])?;
                let t = weighted2(&coords[9..12])?;
                let side = filter.power_test_2d(&p, &q, &r, &t);
                println!("power_test_2d({}, {}, {}, {}) = {}", p, q, r, t, side);
            }
            20 => {
                let p = weighted3(&coords[0..4])?;
                let q = weighted3(&coords[4..8])?;
                let r = weighted3(&coords[8..12])?;
                let s = weighted3(&coords[12..16])?;
                let t = weighted3(&coords[16..20])?;
                let side = filter.power_test_3d(&p, &q, &r, &s, &t);
                println!("power_test_3d({}, {}, {}, {}, {}) = {}", p, q, r, s, t, side);
            }
            n => bail!("power expects 9, 12 or 20 coordinates, got {}", n),
        },
    }

    println!("stats: {}", filter.stats());
    println!("exact conversions: {}", exact::conversions());

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
