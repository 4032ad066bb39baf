//! Grid exporters.

use crate::domain::Grid;
use crate::error::Error;
use std::path::Path;

/// Largest cell value, used to rescale the output to 0-255.
fn maximum(grid: &Grid) -> f64 {
    grid.buffer().iter().fold(0.0, |m, v| v.max(m))
}

/// Write the grid as a binary grayscale PGM, rescaled so the maximum
/// cell maps to 255. An all-zero grid exports as all black rather
/// than dividing by zero. The byte stream walks pixel rows top to
/// bottom, reading the column-major buffer at `j + i*ny`.
///
/// The file is written in one shot: on failure nothing is left behind
/// in a half-written state beyond what the OS reports.
pub fn write_pgm<F: AsRef<Path>>(grid: &Grid, path: &F) -> Result<(), Error> {
    let nx = grid.nx();
    let ny = grid.ny();
    let buffer = grid.buffer();

    let m = maximum(grid);
    let scale = if m > 0.0 { 255.0 / m } else { 0.0 };

    let mut bytes = Vec::with_capacity(nx * ny + 32);
    bytes.extend_from_slice(format!("P5 {} {} 255\n", nx, ny).as_bytes());
    for j in 0..ny {
        for i in 0..nx {
            bytes.push((buffer[j + i * ny] * scale) as u8);
        }
    }

    std::fs::write(path, &bytes).map_err(|source| Error::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Write the grid as a Turbo colormap PNG for visual inspection,
/// values normalized by the grid maximum.
pub fn image2d<F: AsRef<Path>>(grid: &Grid, path: &F) -> Result<(), Error> {
    let gradient = colorous::TURBO;
    let m = maximum(grid);
    let scale = if m > 0.0 { 1.0 / m } else { 0.0 };
    let mut img = image::RgbImage::new(grid.nx() as u32, grid.ny() as u32);
    for k in 0..grid.buffer_size() {
        let coord = grid.linear_to_coord(k);
        let r = grid.buffer()[k] * scale;
        let c = gradient.eval_continuous(r);
        img.put_pixel(
            coord[0] as u32,
            coord[1] as u32,
            image::Rgb(c.as_array()),
        );
    }
    img.save(path)?;
    Ok(())
}
