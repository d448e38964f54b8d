use clap::{Parser, Subcommand};
use photo_prep::{config, output, process, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-prep")]
#[command(about = "Convert a folder of photos into WebP gallery assets and a JSON manifest")]
#[command(long_about = "\
Convert a folder of photos into WebP gallery assets and a JSON manifest

Every .png/.jpg/.jpeg/.webp file in the source directory (not recursive) and
the optional hero file is rotated upright, scaled to fit 1200x1200, and saved
as WebP. The manifest lists each image with its orientation, a random caption,
and a hero flag.

With no config file present, stock defaults are used:

  photos/                 → source images
  hero.jpg                → hero image (saved as hero_success.webp)
  public/memories/        → converted images
  src/data/memories.json  → manifest

Run 'photo-prep gen-config' to print a config file with every default.")]
#[command(version)]
struct Cli {
    /// Config file (optional; stock defaults apply when missing)
    #[arg(long, default_value = "photo-prep.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert all images and write the manifest (default)
    Run,
    /// List what would be converted without touching any files
    Check,
    /// Print a config file with all defaults
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let config = config::load_config(&cli.config)?;
            process::process(&config, |event| output::print_process_event(&event))?;
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            let result = scan::scan(&config)?;
            output::print_scan_output(&result);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
