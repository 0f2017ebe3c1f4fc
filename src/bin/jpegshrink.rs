//! jpegshrink CLI - orientation-aware image compression utility.
//!
//! Scans JPEG files for their EXIF orientation tag and produces rotated,
//! resized, re-encoded copies.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use jpegshrink_rs::{CompressionRequest, OrientationCode, compress, resolve_orientation};

/// Orientation-aware JPEG compression
#[derive(Parser)]
#[command(name = "jpegshrink")]
#[command(author = "jpegshrink-rs contributors")]
#[command(version)]
#[command(about = "Scan EXIF orientation and compress images", long_about = None)]
#[command(after_help = "EXAMPLES:
    jpegshrink orientation -i photo.jpg
    jpegshrink compress -i photo.jpg -o small.jpg
    jpegshrink compress -i photo.jpg -o small.jpg -r 25 -q 70 --max-width 1024
    jpegshrink info -i photo.jpg

The compressor honors the EXIF orientation embedded in the input: a photo
shot sideways comes out upright. Ratio and quality are percentages.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the EXIF orientation of a JPEG file
    ///
    /// Walks the JPEG marker segments for the APP1/EXIF block and decodes
    /// the IFD0 orientation tag. Prints a sentinel for non-JPEG input or
    /// JPEGs without an orientation tag.
    #[command(visible_alias = "o")]
    Orientation {
        /// Input file path
        #[arg(short, long, help = "Path to the image file to scan")]
        input: PathBuf,
    },

    /// Compress an image, applying its EXIF orientation
    ///
    /// Decodes the input, rotates it upright per the embedded orientation,
    /// scales it by the requested ratio (clamped by the dimension caps),
    /// and re-encodes at the requested quality.
    #[command(visible_alias = "c")]
    Compress {
        /// Input image file
        #[arg(short, long, help = "Path to the input image file")]
        input: PathBuf,

        /// Output image file
        #[arg(short, long, help = "Path for the compressed output file")]
        output: PathBuf,

        /// Scale ratio as a percentage (0-100]
        #[arg(short, long, default_value = "50")]
        ratio: f64,

        /// Encode quality as a percentage (0-100], JPEG output only
        #[arg(short, long, default_value = "50")]
        quality: f64,

        /// Maximum output width in pixels (0 = no cap)
        #[arg(long, default_value = "0")]
        max_width: u32,

        /// Maximum output height in pixels (0 = no cap)
        #[arg(long, default_value = "0")]
        max_height: u32,
    },

    /// Display image dimensions, format, and orientation
    #[command(visible_alias = "i")]
    Info {
        /// Input file path
        #[arg(short, long, help = "Path to the image file to inspect")]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Orientation { input } => show_orientation(&input),
        Commands::Compress {
            input,
            output,
            ratio,
            quality,
            max_width,
            max_height,
        } => compress_file(&input, &output, ratio, quality, max_width, max_height),
        Commands::Info { input } => show_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn describe(code: OrientationCode) -> String {
    match code.to_exif() {
        Some(value) => format!("{:?} (EXIF {})", code, value),
        None => format!("{:?}", code),
    }
}

fn show_orientation(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    println!("{}", describe(resolve_orientation(&data)));
    Ok(())
}

fn compress_file(
    input: &PathBuf,
    output: &PathBuf,
    ratio: f64,
    quality: f64,
    max_width: u32,
    max_height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let orientation = resolve_orientation(&data);

    let request = CompressionRequest {
        source: &data,
        orientation,
        ratio,
        quality,
        max_width,
        max_height,
    };
    let compressed = compress(&request)?;
    fs::write(output, &compressed)?;

    println!(
        "✓ Compressed {} bytes to {} bytes ({}) -> {:?}",
        data.len(),
        compressed.len(),
        describe(orientation),
        output
    );
    Ok(())
}

fn show_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    use image::GenericImageView;

    let data = fs::read(input)?;
    let format = image::guess_format(&data)?;
    let (width, height) = image::load_from_memory(&data)?.dimensions();

    println!("Format:      {:?}", format);
    println!("Dimensions:  {}x{}", width, height);
    println!("Orientation: {}", describe(resolve_orientation(&data)));
    println!("Size:        {} bytes", data.len());
    Ok(())
}
