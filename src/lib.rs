#![forbid(unsafe_code)]
//! Roulement — génération de plannings 24/7 (jour / soir / nuit) à partir d'un motif de rotation.
//!
//! - Motif textuel `O`/`F` (ou `1`/`0`), presets Panama et DuPont.
//! - Équipes décalées régulièrement, vérification de couverture du cycle.
//! - Planning par employé sur deux périodes de paie, heures et synthèse.
//! - Aucun état partagé : chaque calcul est une fonction pure de ses entrées.

#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod pattern;
pub mod report;
pub mod scheduler;
pub mod variants;

#[cfg(feature = "serde")]
pub use config::{load_config_from_file, Preset, ResolvedRoster, RosterConfig};
pub use model::{coverage_grid, DailyCoverage, Employee, PayPeriodInfo, Schedule, ShiftCode};
pub use pattern::{parse_pattern, PatternError, RotationPattern, DUPONT, PANAMA};
pub use report::{prepare_summary, Summary, SummaryRenderer, TextSummary};
pub use scheduler::{
    build_schedule, minimum_crews_for_coverage, validate_coverage, ScheduleOptions, Scheduler,
};
