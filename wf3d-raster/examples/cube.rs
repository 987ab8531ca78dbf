/// Example: render the unit cube to a PNG
///
/// Usage: cargo run -p wf3d-raster --example cube -- [output.png]

use std::env;
use wf3d_core::{render, RenderOptions, WireframeModel};
use wf3d_raster::RasterCanvas;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = env::args().nth(1).unwrap_or_else(|| "cube.png".to_string());

    let cube = WireframeModel::unit_cube();
    let drawing = render(&cube, &RenderOptions::default())?;
    RasterCanvas::from_drawing(&drawing).save(&output)?;

    println!("Saved {}x{} cube to {}", drawing.width, drawing.height, output);
    Ok(())
}
