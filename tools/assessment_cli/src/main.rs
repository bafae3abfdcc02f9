use assessment_core::catalog::model::{score_label, ControlStatus, Framework};
use assessment_core::catalog::Catalog;
use assessment_core::config::{AssessmentConfig, UnknownIdPolicy};
use assessment_core::error::CoreResult;
use assessment_core::persistence::slot::FileSlotStore;
use assessment_core::persistence::transfer::{parse_date, report_file_name, today_utc};
use assessment_core::report::{render_controls_csv, render_report_markdown, AssessmentReport};
use assessment_core::store::{AssessmentStore, LoadOutcome, MutationOutcome};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use time::Date;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assess")]
#[command(about = "Self-assessment of CIS Controls v8 and NIST SP 800-53 controls", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file (data_dir, slot_key, unknown_id_policy)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the saved assessment; overrides the config file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Silently skip updates to unknown control ids instead of failing
    #[arg(long, global = true)]
    ignore_unknown: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List controls, optionally for one framework
    Show {
        #[arg(long)]
        framework: Option<Framework>,
        /// Print the raw control list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print overall, framework, group and status metrics
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Set the 0-5 maturity score of a control
    Score { id: String, score: u8 },
    /// Set the implementation status of a control
    Status { id: String, status: ControlStatus },
    /// Attach notes to a control
    Notes { id: String, notes: String },
    /// Write the current assessment to storage
    Save,
    /// Reload the assessment from storage
    Load,
    /// Restore catalog defaults
    Reset,
    /// Export the assessment as security-assessment-<date>.json
    Export {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// YYYY-MM-DD; defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Replace the assessment with a previously exported JSON file
    Import { file: PathBuf },
    /// Render the assessment report
    Report {
        #[arg(long, value_enum, default_value = "markdown")]
        format: ReportFormat,
        /// Write into this directory instead of stdout
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// YYYY-MM-DD; defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Markdown,
    Csv,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CoreResult<()> {
    let mut config = AssessmentConfig::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.ignore_unknown {
        config.unknown_id_policy = UnknownIdPolicy::IGNORE;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "opening assessment");

    let storage = FileSlotStore::open(&config.data_dir)?;
    // Reset must work even when the saved slot can no longer be read.
    let mut store = match cli.command {
        Commands::Reset => {
            AssessmentStore::open_fresh(Catalog::builtin(), storage, config.store_settings())?
        }
        _ => AssessmentStore::open(Catalog::builtin(), storage, config.store_settings())?,
    };

    match cli.command {
        Commands::Show { framework, json } => {
            let controls: Vec<_> = store
                .controls()
                .iter()
                .filter(|c| framework.map_or(true, |fw| c.framework == Some(fw)))
                .cloned()
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&controls)?);
            } else {
                for c in &controls {
                    println!(
                        "{:<12} {:<4} {:<16} {:<20} {}",
                        c.id,
                        c.implementation_level.map_or("-", |level| level.as_str()),
                        c.status.label(),
                        score_label(c.score_value()),
                        c.name
                    );
                }
            }
        }
        Commands::Summary { json } => {
            if json {
                let summary = serde_json::json!({
                    "overall_score": store.overall_score(),
                    "framework_scores": Framework::ALL.iter().map(|fw| {
                        serde_json::json!({ "framework": fw, "score": store.framework_score(*fw) })
                    }).collect::<Vec<_>>(),
                    "implementation_groups": store.implementation_group_progress(),
                    "status_distribution": store.controls_by_status(),
                    "categories": store.category_progress(),
                    "cis_controls": store.cis_control_progress(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Overall score: {}/5", store.overall_score());
                for fw in Framework::ALL {
                    println!("  {}: {}/5", fw.display_name(), store.framework_score(fw));
                }
                println!("Implementation groups:");
                for g in store.implementation_group_progress() {
                    println!("  {}: {}%", g.name, g.percentage);
                }
                println!("Status:");
                for s in store.controls_by_status() {
                    println!("  {}: {}%", s.name, s.value);
                }
            }
        }
        Commands::Score { id, score } => {
            report_mutation(&id, store.update_score(&id, score)?);
        }
        Commands::Status { id, status } => {
            report_mutation(&id, store.update_status(&id, status)?);
        }
        Commands::Notes { id, notes } => {
            report_mutation(&id, store.update_notes(&id, &notes)?);
        }
        Commands::Save => {
            store.save()?;
            println!("Assessment saved successfully");
        }
        Commands::Load => match store.load()? {
            LoadOutcome::LOADED { count } => {
                println!("Assessment loaded successfully ({} controls)", count)
            }
            LoadOutcome::NOTHING_SAVED => println!("No saved assessment found"),
        },
        Commands::Reset => {
            store.reset()?;
            println!("Assessment reset to default values");
        }
        Commands::Export { out_dir, date } => {
            let date = report_date(date.as_deref())?;
            let path = store.export_to_dir(&out_dir, date)?;
            println!("{}", path.display());
        }
        Commands::Import { file } => {
            let count = store.import_file(&file)?;
            println!("Imported {} controls", count);
        }
        Commands::Report {
            format,
            out_dir,
            date,
        } => {
            let date = report_date(date.as_deref())?;
            let report = AssessmentReport::build(store.controls(), date)?;
            let (body, ext) = match format {
                ReportFormat::Markdown => (render_report_markdown(&report), "md"),
                ReportFormat::Csv => (render_controls_csv(&report)?, "csv"),
            };
            match out_dir {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)?;
                    let path = dir.join(report_file_name(date, ext)?);
                    std::fs::write(&path, body)?;
                    println!("{}", path.display());
                }
                None => print!("{}", body),
            }
        }
    }
    Ok(())
}

fn report_date(arg: Option<&str>) -> CoreResult<Date> {
    match arg {
        Some(d) => parse_date(d),
        None => Ok(today_utc()),
    }
}

fn report_mutation(id: &str, outcome: MutationOutcome) {
    match outcome {
        MutationOutcome::APPLIED => println!("Updated {}", id),
        MutationOutcome::IGNORED => println!("No control with id {}, nothing changed", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_accepts_a_fixed_date() {
        let cli = Cli::try_parse_from([
            "assess", "report", "--format", "csv", "--date", "2024-02-29",
        ])
        .unwrap();
        let Commands::Report { date, .. } = cli.command else {
            panic!("expected the report command");
        };
        let date = report_date(date.as_deref()).unwrap();
        assert_eq!(
            report_file_name(date, "csv").unwrap(),
            "security-assessment-report-2024-02-29.csv"
        );
    }

    #[test]
    fn report_date_defaults_to_today_and_rejects_bad_input() {
        assert_eq!(report_date(None).unwrap(), today_utc());
        assert!(report_date(Some("29/02/2024")).is_err());
    }
}
