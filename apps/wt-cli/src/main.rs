use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wt_app::{
    AppError, AppResult, TimeKey, latest, list_wells, load_case, open_case, snapshot,
    state_summary, topology_summary,
};

#[derive(Parser)]
#[command(name = "wt-cli")]
#[command(about = "Well topology reconstruction from reservoir simulator restart reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// List the wells of a case
    Wells {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Show the segment tree and branches of a well
    Topology {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Well name
        well: String,
        /// Report step (defaults to the latest)
        #[arg(long)]
        report: Option<i32>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a well's state at a report step or simulation time
    State {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Well name
        well: String,
        /// Report step
        #[arg(long, conflicts_with = "time", required_unless_present = "time")]
        report: Option<i32>,
        /// Simulation time (RFC 3339)
        #[arg(long, value_parser = parse_time)]
        time: Option<DateTime<Utc>>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 time '{}': {}", s, e))
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Wells { case_path } => cmd_wells(&case_path),
        Commands::Topology {
            case_path,
            well,
            report,
            json,
        } => cmd_topology(&case_path, &well, report, json),
        Commands::State {
            case_path,
            well,
            report,
            time,
            json,
        } => {
            let key = match (report, time) {
                (Some(step), _) => TimeKey::Report(step),
                (None, Some(time)) => TimeKey::Time(time),
                (None, None) => {
                    return Err(AppError::InvalidInput(
                        "either --report or --time is required".to_string(),
                    ));
                }
            };
            cmd_state(&case_path, &well, key, json)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::InvalidInput(format!("Failed to serialize output: {}", e)))?;
    println!("{}", text);
    Ok(())
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let config = load_case(case_path)?;
    for report in &config.reports {
        if !report.exists() {
            return Err(AppError::Validation(format!(
                "Report file not found: {}",
                report.display()
            )));
        }
    }
    if let Some(grid) = &config.grid
        && !grid.exists()
    {
        return Err(AppError::Validation(format!(
            "Grid file not found: {}",
            grid.display()
        )));
    }
    println!(
        "✓ Case '{}' is valid ({} reports)",
        config.name,
        config.reports.len()
    );
    Ok(())
}

fn cmd_wells(case_path: &Path) -> AppResult<()> {
    let case = open_case(case_path)?;
    let wells = list_wells(&case.history);

    if wells.is_empty() {
        println!("No wells found in case");
    } else {
        println!("Wells in case '{}':", case.config.name);
        for well in wells {
            println!(
                "  {} - {:?}{} ({} snapshots, reports {}..={})",
                well.name,
                well.kind,
                if well.msw { ", multi-segment" } else { "" },
                well.snapshots,
                well.first_report,
                well.last_report
            );
        }
    }
    for outcome in &case.outcomes {
        for (well, reason) in &outcome.skipped {
            println!(
                "  ! {} skipped at report {}: {}",
                well, outcome.report_step, reason
            );
        }
    }
    Ok(())
}

fn cmd_topology(case_path: &Path, well: &str, report: Option<i32>, json: bool) -> AppResult<()> {
    let case = open_case(case_path)?;
    let state = match report {
        Some(step) => snapshot(&case.history, well, TimeKey::Report(step))?,
        None => latest(&case.history, well)?,
    };
    let summary = topology_summary(&state);
    if json {
        return print_json(&summary);
    }

    println!(
        "Well {} at report {} ({})",
        summary.well, summary.report_step, summary.sim_time
    );
    if !state.is_msw() {
        println!("  Normal well: no segment topology");
        return Ok(());
    }
    println!("  Segments:");
    for seg in &summary.segments {
        println!(
            "    {:>4} -> {:<4} branch {:<3} depth {:>10.2}  links {}  connections {}",
            seg.id, seg.outlet_id, seg.branch_id, seg.depth, seg.link_count, seg.global_connections
        );
    }
    println!("  Branches:");
    for branch in &summary.branches {
        let members: Vec<String> = branch.members.iter().map(|m| m.to_string()).collect();
        let junction = branch
            .junction
            .map(|j| format!(" -> junction {}", j))
            .unwrap_or_default();
        println!(
            "    {:>3}: {}{}",
            branch.branch_id,
            members.join(" -> "),
            junction
        );
    }
    Ok(())
}

fn cmd_state(case_path: &Path, well: &str, key: TimeKey, json: bool) -> AppResult<()> {
    let case = open_case(case_path)?;
    let state = snapshot(&case.history, well, key)?;
    let summary = state_summary(&state);
    if json {
        return print_json(&summary);
    }
    println!(
        "Well {} at report {} ({})",
        summary.well, summary.report_step, summary.sim_time
    );
    println!("  Kind: {:?}, {}", summary.kind, if summary.open { "open" } else { "shut" });
    println!(
        "  Segments: {}, branches: {}",
        summary.segments, summary.branches
    );
    for grid in &summary.grids {
        let head = grid
            .wellhead
            .map(|(i, j, k)| format!("({}, {}, {})", i + 1, j + 1, k + 1))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  Grid {}: wellhead {}, {} connections ({} open)",
            grid.grid, head, grid.connections, grid.open
        );
    }
    Ok(())
}
