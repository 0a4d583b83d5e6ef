use clap::{Parser, Subcommand};
use objavi::{Config, DebugMode};
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "objavi")]
#[command(about = "Inspect and check book publishing configuration")]
struct Cli {
    /// TOML configuration file; built-in settings are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration and print a summary
    Check,
    /// Show the profile used for a server
    Server { host: String },
    /// Show a page size's geometry
    Page { name: String },
    /// Show the table of contents and book URLs
    Urls { host: String, book: String },
    /// Show the chapter cookie for a chapter number
    Cookie { number: u64 },
    /// Print the whole configuration as TOML
    Dump,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| format!("Failed to load configuration {:?}: {}", path, e))?,
        None => Config::builtin(),
    };

    if config.is_debug_enabled(DebugMode::Startup) {
        info!(
            "Startup: {} servers, {} page sizes, engines: {}",
            config.server_names().len(),
            config.page_size_names().len(),
            config.engine_names().join(", ")
        );
    }

    match cli.command {
        Command::Check => {
            println!("default server: {}", config.default_server().unwrap_or("(none)"));
            println!("servers: {}", config.server_names().join(", "));
            println!("page sizes: {}", config.page_size_names().join(", "));
            println!("engines: {}", config.engine_names().join(", "));
            println!(
                "book list cache: {}s in {}",
                config.cache().book_list_secs,
                config.cache().dir
            );
            println!("configuration OK");
        }
        Command::Server { host } => {
            let profile = config.get_server_profile(&host)?;
            println!("css: {}", profile.css);
            println!("lang: {}", profile.lang);
            println!("dir: {}", profile.dir);
        }
        Command::Page { name } => {
            let profile = config.get_page_profile(&name)?;
            let [top, right, bottom, left] = profile.margins_pt();
            println!("wksize: {}", profile.wksize);
            println!("wkmargins (mm): {:?}", profile.wkmargins);
            println!("margins (pt): {:.2} {:.2} {:.2} {:.2}", top, right, bottom, left);
            println!("numberpos: {:?}", profile.numberpos);
            println!("shift: {}", profile.shift);
            println!(
                "pointsize: {} x {} ({:.1} x {:.1} mm)",
                profile.width_pt(),
                profile.height_pt(),
                profile.width_mm(),
                profile.height_mm()
            );
        }
        Command::Urls { host, book } => {
            println!("toc: {}", config.format_toc_url(&host, &book));
            println!("book: {}", config.format_book_url(&host, &book));
        }
        Command::Cookie { number } => {
            println!("{}", config.chapter_cookie_chars().encode(number));
        }
        Command::Dump => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
