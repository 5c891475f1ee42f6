#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use roulement::{
    config::{self, Preset, RosterConfig},
    io,
    model::{coverage_grid, headcount_range, ShiftCode},
    pattern::RotationPattern,
    report::{self, prepare_summary, TextSummary},
    scheduler::{ScheduleOptions, Scheduler},
    variants::{self, TeamSpec},
};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Générateur de plannings 24/7 à partir d'un motif de rotation
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer un planning à partir d'un motif
    Generate {
        /// Fichier de configuration JSON (voir `init-config`)
        #[arg(long)]
        config: Option<String>,
        /// Date de début (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// Heures par poste (0 = valeur par défaut)
        #[arg(long)]
        hours: Option<u32>,
        /// liste "nom1,nom2,..."
        #[arg(long)]
        names: Option<String>,
        /// CSV de noms (header `name`)
        #[arg(long, conflicts_with = "names")]
        names_csv: Option<String>,
        #[arg(long, value_enum)]
        preset: Option<Preset>,
        /// Motif O/F (implique le preset `custom`)
        #[arg(long)]
        pattern: Option<String>,
        /// Jours travaillés (preset `simple`)
        #[arg(long)]
        days_on: Option<usize>,
        /// Nombre d'équipes imposé (0 = automatique)
        #[arg(long)]
        crews: Option<usize>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Vérifier la couverture d'un motif
    Check {
        #[arg(long)]
        pattern: String,
        /// Nombre d'équipes (défaut : minimum calculé)
        #[arg(long)]
        crews: Option<usize>,
    },

    /// Rotation en bloc déduite du plafond de 80 h par période
    Block {
        #[arg(long, default_value = config::DEFAULT_NAMES)]
        names: String,
        #[arg(long, default_value_t = config::DEFAULT_HOURS_PER_SHIFT)]
        hours: u32,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Équipes pré-réparties avec deux jours de repos par semaine
    Teams {
        /// "nom:préfixe:jour,soir,nuit", répétable (défaut : Team 1 et Team 2)
        #[arg(long = "team")]
        teams: Vec<TeamSpec>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long, default_value_t = config::DEFAULT_HOURS_PER_SHIFT)]
        hours: u32,
        /// Répertoire de sortie des CSV (un fichier par équipe)
        #[arg(long)]
        out_dir: Option<String>,
    },

    /// Écrire une configuration par défaut
    InitConfig {
        #[arg(long, default_value = "roulement.json")]
        out: String,
    },
}

fn parse_start(raw: Option<&str>, fallback: NaiveDate) -> Result<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid start date: {s}")),
        None => Ok(fallback),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let opts = ScheduleOptions::default();

    let code = match cli.cmd {
        Commands::Generate {
            config,
            start,
            hours,
            names,
            names_csv,
            preset,
            pattern,
            days_on,
            crews,
            out_csv,
            out_json,
        } => {
            let mut cfg = match config {
                Some(path) => config::load_config_from_file(path)?,
                None => RosterConfig::default(),
            };
            cfg.start = parse_start(start.as_deref(), cfg.start)?;
            if let Some(h) = hours.filter(|h| *h > 0) {
                cfg.hours_per_shift = h;
            }
            if let Some(list) = names {
                cfg.names = io::parse_names(&list);
            }
            if let Some(path) = names_csv {
                cfg.names = io::import_names_csv(path)?;
            }
            if let Some(p) = pattern {
                cfg.pattern = Some(p);
                cfg.preset = Preset::Custom;
            }
            if let Some(p) = preset {
                cfg.preset = p;
            }
            if let Some(d) = days_on {
                cfg.days_on = d;
            }
            if let Some(c) = crews {
                cfg.crews = c;
            }

            let resolved = cfg.resolve()?;
            let scheduler = Scheduler::new(opts);
            let schedule = scheduler.build_schedule(
                &cfg.names,
                cfg.hours_per_shift,
                &resolved.pattern,
                resolved.crew_count,
            );

            if schedule.is_empty() {
                println!("No employees to schedule");
                0
            } else {
                let summary = prepare_summary(&schedule, cfg.start, opts, &TextSummary)?;
                let headers = io::date_headers(cfg.start, schedule.total_days)?;
                print!("{}", summary.content);
                for warning in &summary.warnings {
                    eprintln!("{warning}");
                }
                println!();
                print!("{}", report::render_roster_table(&schedule.employees, &headers));

                let unused = cfg.names.len().saturating_sub(schedule.employees.len());
                if unused > 0 {
                    eprintln!("Note: {unused} employee(s) not scheduled (crews are full)");
                }
                if let Some(path) = out_csv {
                    io::export_schedule_csv(path, &schedule.employees, &headers)?;
                }
                if let Some(path) = out_json {
                    io::export_schedule_json(path, &schedule)?;
                }
                // Code 2 = WARNING/INCOMPLETE
                if schedule.info.is_fully_covered() {
                    0
                } else {
                    2
                }
            }
        }
        Commands::Check { pattern, crews } => {
            let pat = RotationPattern::parse(&pattern).context("invalid pattern")?;
            let scheduler = Scheduler::new(opts);
            let minimum = scheduler.minimum_crews_for_coverage(&pat);
            let crews = crews.filter(|c| *c > 0).unwrap_or(minimum);
            let uncovered = scheduler.validate_coverage(&pat, crews);

            println!("Pattern: {} ({}-day cycle)", pat, pat.len());
            println!("Minimum crews: {minimum}");
            match report::uncovered_warning(&uncovered) {
                None => {
                    println!("OK: full coverage with {crews} crew(s)");
                    0
                }
                Some(line) => {
                    eprintln!("{line}");
                    2
                }
            }
        }
        Commands::Block {
            names,
            hours,
            start,
            out_csv,
        } => {
            let start = parse_start(start.as_deref(), config::default_start())?;
            let names = io::parse_names(&names);
            let schedule = variants::build_block_schedule(&names, hours, opts);
            if schedule.is_empty() {
                println!("No employees to schedule");
            } else {
                let summary = prepare_summary(&schedule, start, opts, &TextSummary)?;
                let headers = io::date_headers(start, schedule.total_days)?;
                print!("{}", summary.content);
                for warning in &summary.warnings {
                    eprintln!("{warning}");
                }
                println!();
                print!("{}", report::render_roster_table(&schedule.employees, &headers));
                if let Some(path) = out_csv {
                    io::export_schedule_csv(path, &schedule.employees, &headers)?;
                }
            }
            0
        }
        Commands::Teams {
            teams,
            start,
            hours,
            out_dir,
        } => {
            let start = parse_start(start.as_deref(), config::default_start())?;
            let teams = if teams.is_empty() {
                variants::default_teams()
            } else {
                teams
            };
            let days = opts.pay_period_days;
            let built = variants::build_teams(&teams, start, hours, days);
            let headers = io::date_headers(start, days)?;

            for team in &built {
                println!("{} ({} employees):", team.name, team.employees.len());
                if let Some((lo, hi)) = headcount_range(&team.grid, None) {
                    println!("  Daily total on duty: {lo}–{hi}");
                }
                for code in ShiftCode::ALL {
                    if let Some((lo, hi)) = headcount_range(&team.grid, Some(code)) {
                        println!("    {code}: {lo}–{hi} per day");
                    }
                }
                if let Some(first) = team.employees.first() {
                    println!("  Hours/employee: {}", first.hours);
                }
                println!();

                if let Some(dir) = &out_dir {
                    std::fs::create_dir_all(dir)
                        .with_context(|| format!("creating output directory {dir}"))?;
                    let file = format!("{}.csv", team.name.to_lowercase().replace(' ', "_"));
                    let path = PathBuf::from(dir).join(file);
                    io::export_schedule_csv(&path, &team.employees, &headers)?;
                    println!("  CSV → {}", path.display());
                }
            }

            let all: Vec<_> = built.iter().flat_map(|t| t.employees.clone()).collect();
            println!("Combined coverage:");
            print!("{}", report::render_coverage(&coverage_grid(&all, days)));
            0
        }
        Commands::InitConfig { out } => {
            config::export_config_json(&out, &RosterConfig::default())?;
            println!("Config written to {out}");
            0
        }
    };

    std::process::exit(code);
}
