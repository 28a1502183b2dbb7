use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use pointillist::{render, Config, Error, GridType, SourceImage, MAX_GRID_SIZE};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
const DEFAULT_GRID_SIZES: &[u32] = &[1, 2, 5, 10, 15, 20, 25, 50, 75];

/// Turn your pictures into pointillist renderings.
#[derive(Parser)]
struct Opts {
    /// Image files or directories to pointillize; directories are scanned
    /// (non-recursively) for .jpg/.jpeg/.png files.
    #[clap(required = true)]
    inputs: Vec<PathBuf>,

    /// Grid sizes to render, each between 1 and 100. One output image is
    /// produced per (input, grid size, grid type) combination.
    #[clap(long, num_args = 1.., default_values_t = DEFAULT_GRID_SIZES.iter().copied())]
    grid_sizes: Vec<u32>,

    /// Grid types to render: hex, square, random.
    #[clap(long, num_args = 1.., default_values_t = GridType::ALL)]
    grid_types: Vec<GridType>,

    /// Width of the output images in pixels; the height follows the aspect
    /// ratio of each input.
    #[clap(long, default_value_t = 1000)]
    output_width: u32,

    /// Extension (and therefore format) of the output images.
    #[clap(long, default_value = "jpg")]
    output_extension: String,

    /// Directory to write the output images to.
    #[clap(long, default_value = ".")]
    out_dir: PathBuf,

    #[clap(flatten)]
    config: Config,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    // Reject configuration errors before touching any image.
    if !IMAGE_EXTENSIONS.contains(&opts.output_extension.as_str()) {
        return Err(Error::UnsupportedExtension(opts.output_extension).into());
    }
    for &grid_size in &opts.grid_sizes {
        if !(1..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(Error::GridSizeOutOfRange(grid_size).into());
        }
    }

    let inputs = collect_inputs(&opts.inputs)?;
    anyhow::ensure!(!inputs.is_empty(), "no input images found");
    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("failed to create {}", opts.out_dir.display()))?;

    for input in &inputs {
        let source = SourceImage::open(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        for &grid_size in &opts.grid_sizes {
            eprintln!("pointillizing {} with grid size {}", stem, grid_size);
            for &grid_type in &opts.grid_types {
                let start = Instant::now();
                let canvas = render(&source, grid_type, grid_size, opts.output_width, &opts.config)?;
                let filename = format!(
                    "{}_{}_{}p.{}",
                    stem, grid_type, grid_size, opts.output_extension
                );
                let path = opts.out_dir.join(filename);
                canvas
                    .save(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!(
                    "  wrote {} in {:.2}s",
                    path.display(),
                    start.elapsed().as_secs_f64()
                );
            }
        }
    }
    Ok(())
}

fn collect_inputs(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(input)
                .with_context(|| format!("failed to list {}", input.display()))?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && has_image_extension(path))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
