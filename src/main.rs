use clap::error::ErrorKind;
use clap::Parser;
use pentad::domain::Grid;
use pentad::error::Error;
use pentad::{image, init, solver, stencil};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Iterative 5-point stencil smoothing over a 2D grid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid width in columns.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    nx: u64,

    /// Grid height in rows.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    ny: u64,

    /// Iterations to run, two stencil passes each.
    niters: u64,

    /// Output PGM file.
    #[arg(short, long, default_value = "stencil.pgm")]
    output: PathBuf,

    /// Also write a Turbo colormap PNG here.
    #[arg(long)]
    png: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Usage problems exit with status 1, help and version with 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::FAILURE,
            };
            let _ = e.print();
            return code;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let nx = args.nx as usize;
    let ny = args.ny as usize;

    let mut image_grid = Grid::zeroed(nx, ny)?;
    let mut scratch = Grid::zeroed(nx, ny)?;
    init::checkerboard(&mut image_grid);

    let stencil = stencil::standard_stencils::smoothing_2d();

    let tic = Instant::now();
    solver::apply(
        &stencil,
        &mut image_grid,
        &mut scratch,
        args.niters as usize,
    );
    let runtime = tic.elapsed();

    println!("------------------------------------");
    println!(" runtime: {} s", runtime.as_secs_f64());
    println!("------------------------------------");

    image::write_pgm(&image_grid, &args.output)?;
    if let Some(png_path) = &args.png {
        image::image2d(&image_grid, png_path)?;
    }
    Ok(())
}
