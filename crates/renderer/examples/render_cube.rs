//! List a catalog, open a cube, and render the raw and residual figures.
//!
//! Runs entirely on synthetic data: a temporary catalog tree stands in for
//! the data root and an in-memory reader stands in for the cube decoder, so
//! the example works without any spacecraft data on disk.

use cube_io::{is_lossy, CubeCatalog};
use renderer::{render_subtracted_to_file, render_to_file, RenderOptions};
use ring_processor::RingCube;
use test_utils::{create_catalog_tree, ring_cube_data, MemoryCubeReader};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,renderer=debug")),
        )
        .init();

    // Synthetic data root with two observations
    let dir = tempfile::tempdir()?;
    let cube_paths = create_catalog_tree(dir.path(), &["N1467345444", "N1467346123"])?;

    let catalog = CubeCatalog::new(dir.path());
    let listed = catalog.list()?;
    println!("catalog root {} -> {} cubes", dir.path().display(), listed.len());

    let mut reader = MemoryCubeReader::new();
    for path in &cube_paths {
        reader.insert(path, ring_cube_data(400, 300));
    }

    let cube = RingCube::open(&cube_paths[0], &reader)?;
    println!("image time: {}", cube.image_time());
    println!("lossy compression: {}", is_lossy(cube.label())?);
    println!("mapping: {}", serde_json::to_string_pretty(cube.mapping())?);

    let options = RenderOptions::default();
    let raw = render_to_file(&cube, None, &options)?;
    println!("raw figure: {}", raw.display());

    let options = RenderOptions {
        title_suffix: Some("subtracted".to_string()),
        ..RenderOptions::default()
    };
    let subtracted = render_subtracted_to_file(&cube, &options)?;
    println!("residual figure: {}", subtracted.display());

    Ok(())
}
