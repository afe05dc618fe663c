// main.rs - Sheet-maze pipeline CLI: scan a sheet snapshot into a
// graph, locate the markers, solve, and paint the path back.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use maze_core::{graph, locate, render_default, scanner, solver, MazeError, RoleMap};
use maze_sheet_pipeline::{apply_all, interchange, Config, PacedSink, SheetSnapshot};
use maze_sheet_pipeline::interchange::MarkerFile;

/// CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pipeline configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Sheet snapshot to operate on
    #[arg(short, long, default_value = "sheet.json")]
    sheet: PathBuf,

    /// Scan cells in parallel (snapshot lookups are in-memory)
    #[arg(long)]
    parallel: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan the sheet and write the adjacency graph file
    ParseGraph,
    /// Locate the start/end markers and write the marker file
    FindMarkers,
    /// Read the graph and marker files and write the solved path file
    Solve {
        /// Use breadth-first search instead of A*
        #[arg(long)]
        bfs: bool,
    },
    /// Read the path file and paint it back onto the sheet
    DrawPath,
    /// Run the whole scan, solve, and draw pipeline in one go
    Run,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = Config::load_or_default(&args.config)?;

    match args.command {
        Command::ParseGraph => parse_graph(&args, &config),
        Command::FindMarkers => find_markers(&args, &config),
        Command::Solve { bfs } => solve(&config, bfs),
        Command::DrawPath => draw_path(&args, &config),
        Command::Run => run(&args, &config),
    }
}

fn load_sheet(args: &Args, config: &Config) -> Result<SheetSnapshot> {
    let sheet = SheetSnapshot::load(&args.sheet)?;
    if !sheet.sheet_name.is_empty() && sheet.sheet_name != config.sheet_name {
        warn!(
            "snapshot is of sheet '{}', config expects '{}'",
            sheet.sheet_name, config.sheet_name
        );
    }
    let size = sheet.size();
    info!("sheet has {} rows x {} cols", size.rows, size.cols);
    Ok(sheet)
}

fn scan_sheet(sheet: &SheetSnapshot, parallel: bool) -> RoleMap {
    let size = sheet.size();
    if parallel {
        scanner::scan_parallel(size, sheet)
    } else {
        scanner::scan(size, sheet)
    }
}

fn parse_graph(args: &Args, config: &Config) -> Result<()> {
    let sheet = load_sheet(args, config)?;
    let roles = scan_sheet(&sheet, args.parallel);
    let graph = graph::build(&roles)?;

    interchange::write_graph(Path::new(&config.file_graph), &graph)?;
    info!(
        "graph with {} vertices written to {}",
        graph.vertex_count(),
        config.file_graph
    );
    Ok(())
}

fn find_markers(args: &Args, config: &Config) -> Result<()> {
    let sheet = load_sheet(args, config)?;
    let roles = scan_sheet(&sheet, args.parallel);
    let breaks = Path::new(&config.file_breaks);

    match locate::locate(&roles) {
        Ok(markers) => {
            interchange::write_markers(breaks, &MarkerFile::from_markers(&markers))?;
            info!(
                "start {} and end {} written to {}",
                markers.start, markers.end, config.file_breaks
            );
            Ok(())
        }
        Err(MazeError::MultipleOrMissingMarker { ref starts, ref ends }) => {
            // Persist whatever was unambiguous before failing, so a
            // human can inspect the partial result
            interchange::write_markers(breaks, &MarkerFile::from_candidates(starts, ends))?;
            bail!(
                "marker scan failed: {} start(s), {} end(s); partial result in {}",
                starts.len(),
                ends.len(),
                config.file_breaks
            );
        }
        Err(err) => Err(err.into()),
    }
}

fn solve(config: &Config, use_bfs: bool) -> Result<()> {
    let graph = interchange::read_graph(Path::new(&config.file_graph))?;
    let markers = interchange::read_markers(Path::new(&config.file_breaks))?;

    let start = markers
        .start_coord()?
        .with_context(|| format!("{} has no start marker", config.file_breaks))?;
    let end = markers
        .end_coord()?
        .with_context(|| format!("{} has no end marker", config.file_breaks))?;

    let found = if use_bfs {
        solver::bfs(&graph, start, end)
    } else {
        solver::astar(&graph, start, end)
    };
    let Some(path) = found else {
        bail!("no path from {} to {}", start, end);
    };

    interchange::write_path(Path::new(&config.file_path), &path)?;
    info!(
        "path of {} cells ({} steps) written to {}",
        path.len(),
        path.len() - 1,
        config.file_path
    );
    Ok(())
}

fn draw_path(args: &Args, config: &Config) -> Result<()> {
    let sheet = load_sheet(args, config)?;
    let path = interchange::read_path(Path::new(&config.file_path))?;
    if path.is_empty() {
        warn!("{} is empty, nothing to draw", config.file_path);
        return Ok(());
    }

    let delay = Duration::try_from_secs_f64(config.sleep_time)
        .with_context(|| format!("invalid sleep_time {}", config.sleep_time))?;
    let paints = render_default(&path);

    let mut sink = PacedSink::new(sheet, delay);
    apply_all(&mut sink, &paints)?;
    sink.into_inner().save(&args.sheet)?;

    info!("painted {} cells back onto {}", paints.len(), args.sheet.display());
    Ok(())
}

fn run(args: &Args, config: &Config) -> Result<()> {
    parse_graph(args, config)?;
    find_markers(args, config)?;
    solve(config, false)?;
    draw_path(args, config)
}
