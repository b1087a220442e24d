//! Voronoi tile map generator
//!
//! Main entry point: generate, load, export and list maps.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use vm_core::{
    DEFAULT_EXPORT_DIR, DEFAULT_MAP_SIZE, DEFAULT_MAPS_DIR, Grid, MIN_MAP_SIZE, MapConfig, export,
    generate_with_progress,
};
use vm_save::{MapStore, load, load_with_progress, normalize_map_name, save_with_progress};
use vm_tui::logging::{DEFAULT_LOG_FILE, init_logging};
use vm_tui::{App, TerminalProgress, Theme};

/// Voronoi tile map generator and viewer
#[derive(Parser, Debug)]
#[command(name = "vmap")]
#[command(author, version, about = "Generate, view and export tile maps", long_about = None)]
struct Args {
    /// Directory holding saved maps
    #[arg(long = "maps-dir", global = true, default_value = DEFAULT_MAPS_DIR)]
    maps_dir: PathBuf,

    /// Log file (RUST_LOG sets the level)
    #[arg(long = "log-file", global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Use the light background palette
    #[arg(long = "light", global = true)]
    light: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Generate a new map, save it and open the viewer
    Generate(GenerateArgs),

    /// Open a saved map in the viewer
    Load {
        /// Map name
        #[arg(short = 'n', long = "name")]
        name: String,
    },

    /// Write a saved map as HTML or plain text
    Export {
        /// Map name
        #[arg(short = 'n', long = "name")]
        name: String,

        #[arg(short = 'f', long = "format", value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,

        /// Output file (default: resources/html_maps/<name>.<ext>)
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },

    /// List saved maps
    List,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Map name (letters, digits and underscores)
    #[arg(short = 'n', long = "name")]
    name: String,

    /// Side of a square map
    #[arg(short = 's', long = "size", conflicts_with_all = ["height", "width"])]
    size: Option<usize>,

    #[arg(long = "height", requires = "width")]
    height: Option<usize>,

    #[arg(long = "width", requires = "height")]
    width: Option<usize>,

    /// RNG seed for a reproducible map
    #[arg(long = "seed")]
    seed: Option<u64>,

    #[arg(long = "spawn-row", requires = "spawn_col")]
    spawn_row: Option<usize>,

    #[arg(long = "spawn-col", requires = "spawn_row")]
    spawn_col: Option<usize>,

    /// Save without opening the viewer
    #[arg(long = "no-view")]
    no_view: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Html,
    Text,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Text => "txt",
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let store = MapStore::new(&args.maps_dir);
    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    match args.command {
        Cmd::Generate(gen_args) => run_generate(&store, gen_args, theme),
        Cmd::Load { name } => run_load(&store, &name, theme),
        Cmd::Export { name, format, out } => run_export(&store, &name, format, out),
        Cmd::List => run_list(&store),
    }
}

fn map_config(args: &GenerateArgs) -> MapConfig {
    let (height, width) = match (args.size, args.height, args.width) {
        (Some(size), _, _) => (size, size),
        (None, Some(height), Some(width)) => (height, width),
        _ => (DEFAULT_MAP_SIZE, DEFAULT_MAP_SIZE),
    };

    let mut config = MapConfig::new(height, width);
    if let (Some(row), Some(col)) = (args.spawn_row, args.spawn_col) {
        config = config.with_spawn(row, col);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config
}

fn run_generate(store: &MapStore, args: GenerateArgs, theme: Theme) -> anyhow::Result<()> {
    let name = normalize_map_name(&args.name);
    let path = store.path_for(&name)?;
    let config = map_config(&args);
    config.validate_min(MIN_MAP_SIZE)?;

    store.ensure_dir()?;
    if path.exists() {
        bail!("a map named '{name}' already exists at {}", path.display());
    }

    let mut progress = TerminalProgress::stderr();
    let grid = generate_with_progress(&config, &mut progress).context("generating map")?;
    save_with_progress(&path, &grid, &mut progress)
        .with_context(|| format!("saving {}", path.display()))?;
    info!(%name, path = %path.display(), "map generated");
    eprintln!("Saved {}", path.display());

    if args.no_view {
        return Ok(());
    }
    run_viewer(App::new(grid, name).with_theme(theme))
}

fn run_load(store: &MapStore, name: &str, theme: Theme) -> anyhow::Result<()> {
    let name = normalize_map_name(name);
    let path = store.path_for(&name)?;
    let mut progress = TerminalProgress::stderr();
    let grid = load_with_progress(&path, &mut progress)
        .with_context(|| format!("loading map '{name}'"))?;
    run_viewer(App::new(grid, name).with_theme(theme))
}

fn run_export(
    store: &MapStore,
    name: &str,
    format: ExportFormat,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let name = normalize_map_name(name);
    let grid = load(store.path_for(&name)?).with_context(|| format!("loading map '{name}'"))?;

    let out = out.unwrap_or_else(|| {
        Path::new(DEFAULT_EXPORT_DIR).join(format!("{name}.{}", format.extension()))
    });
    write_export(&grid, &name, format, &out)?;
    info!(%name, out = %out.display(), ?format, "map exported");
    println!("{}", out.display());
    Ok(())
}

fn write_export(grid: &Grid, name: &str, format: ExportFormat, out: &Path) -> anyhow::Result<()> {
    let contents = match format {
        ExportFormat::Html => export::to_html(grid, name),
        ExportFormat::Text => export::to_text(grid, true),
    };
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, contents).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn run_list(store: &MapStore) -> anyhow::Result<()> {
    let names = store.list()?;
    if names.is_empty() {
        println!("No saved maps in {}", store.dir().display());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn run_viewer(mut app: App) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(result?)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }
            if app.should_quit() {
                return Ok(());
            }
        }
    }
}
