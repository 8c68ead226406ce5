use clap::{Parser, Subcommand};
use folio_gallery::gallery::{self, Gallery, GalleryOptions, PresentationContext};
use folio_gallery::{chrome, config, manifest, output, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio-gallery")]
#[command(about = "Gallery manifest generator for a static photo portfolio")]
#[command(long_about = "\
Gallery manifest generator for a static photo portfolio

Scans the works directory and writes the gallery data file the site's
pages load. Run with no arguments from the site root after adding photos.

Site structure:

  site/
  ├── folio.toml                   # Optional overrides (see gen-config)
  ├── index.html
  ├── others/works.html
  └── assets/
      ├── images/works/
      │   ├── STREET/              # Category \"street\"
      │   │   └── a.jpg
      │   └── WILD LIFE/           # Category \"wild life\"
      │       ├── b.png
      │       └── thumbs/          # Ignored
      └── js/gallery-data.js       # Generated

Titles come from filenames: misty_morning-2.jpg → \"misty morning 2\".")]
#[command(version)]
struct Cli {
    /// Site root directory
    #[arg(long, default_value = ".", global = true)]
    site_root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the works directory and write the gallery data file (default)
    Generate,
    /// Scan and list categories without writing anything
    Check,
    /// Render the gallery grid for a category from the data file
    Show {
        /// Category token, as on a card's data-category attribute
        category: String,
        /// Image base path for the rendering page (default: root page)
        #[arg(long)]
        base: Option<String>,
        /// Also print the modal, nav and footer markup
        #[arg(long)]
        page: bool,
    },
    /// Print a stock folio.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let site_config = config::load_config(&cli.site_root)?;
            let generator = &site_config.generator;
            println!("Scanning images...");
            let summary = manifest::generate(
                &generator.works_path(&cli.site_root),
                &generator.output_path(&cli.site_root),
                &generator.src_prefix,
                &generator.binding,
            )?;
            output::print_generate_output(&summary);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.site_root)?;
            let works_dir = site_config.generator.works_path(&cli.site_root);
            let scanned = scan::scan(&works_dir, &site_config.generator.src_prefix)?;
            output::print_check_output(&scanned, &works_dir);
        }
        Command::Show {
            category,
            base,
            page,
        } => {
            let site_config = config::load_config(&cli.site_root)?;
            let generator = &site_config.generator;
            let loaded = manifest::load(&generator.output_path(&cli.site_root), &generator.binding)?;
            let manifest_loaded = loaded.is_some();

            let mut options = GalleryOptions::for_context(PresentationContext::Root, generator);
            if let Some(base) = base {
                options.base = base;
            }
            let mut presenter = Gallery::new(loaded, options);
            let modal = presenter.open(&category);

            for line in output::format_show_header(&category, modal.shown, manifest_loaded) {
                println!("{}", line);
            }
            if page {
                println!("{}", chrome::render_nav(PresentationContext::Root, &site_config.site).into_string());
                println!("{}", gallery::render_modal(modal).into_string());
                println!("{}", chrome::render_footer(&site_config.site).into_string());
            } else {
                println!("{}", modal.grid);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout stays clean for command output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
