use crate::model::{DailyCoverage, Employee, Schedule, ShiftCode};
use crate::scheduler::ScheduleOptions;
use anyhow::{bail, Context, Result};
use chrono::{Days, NaiveDate};
use std::fmt::Write;

/// Synthèse prête à afficher pour un planning.
#[derive(Debug, Clone)]
pub struct Summary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Avertissements (dépassement du plafond, jours non couverts).
    pub warnings: Vec<String>,
    pub content: String,
}

/// Permet de customiser le rendu de la synthèse (texte, markdown, etc.).
pub trait SummaryRenderer {
    fn render(
        &self,
        schedule: &Schedule,
        start: NaiveDate,
        end: NaiveDate,
        opts: ScheduleOptions,
    ) -> String;
}

/// Rendu texte sur quelques lignes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSummary;

impl SummaryRenderer for TextSummary {
    fn render(
        &self,
        schedule: &Schedule,
        start: NaiveDate,
        end: NaiveDate,
        opts: ScheduleOptions,
    ) -> String {
        let info = &schedule.info;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Schedule: {} – {} ({} days)",
            start.format("%B %d, %Y"),
            end.format("%B %d, %Y"),
            schedule.total_days
        );
        let _ = write!(
            out,
            "Pattern: {} ({}-day cycle, {} crews) | {} shifts, {} hours per pay period",
            info.pattern_string,
            info.pattern_length,
            info.crew_count,
            info.shifts_per_period,
            info.hours_per_period
        );
        if info.overage(opts.max_hours_per_period).is_some() {
            let _ = write!(out, " (exceeds {}h cap)", opts.max_hours_per_period);
        }
        out.push('\n');
        let _ = writeln!(
            out,
            "Crews: {} ({} employees minimum)",
            info.crew_count,
            info.min_employees()
        );
        if let Some(line) = uncovered_warning(&info.uncovered_days) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Avertissement lisible, jours numérotés à partir de 1.
pub fn uncovered_warning(uncovered: &[usize]) -> Option<String> {
    if uncovered.is_empty() {
        return None;
    }
    let days: Vec<String> = uncovered.iter().map(|d| (d + 1).to_string()).collect();
    Some(format!(
        "Warning: {} uncovered day(s) in cycle: {}",
        uncovered.len(),
        days.join(", ")
    ))
}

/// Prépare la synthèse d'un planning commençant le `start`.
pub fn prepare_summary(
    schedule: &Schedule,
    start: NaiveDate,
    opts: ScheduleOptions,
    renderer: &dyn SummaryRenderer,
) -> Result<Summary> {
    if schedule.is_empty() || schedule.total_days == 0 {
        bail!("no employees to schedule");
    }

    let end = start
        .checked_add_days(Days::new(schedule.total_days as u64 - 1))
        .context("date overflow")?;

    let info = &schedule.info;
    let mut warnings = Vec::new();
    if let Some(excess) = info.overage(opts.max_hours_per_period) {
        warnings.push(format!(
            "{} hours per pay period exceeds the {}h cap by {excess}h",
            info.hours_per_period, opts.max_hours_per_period
        ));
    }
    warnings.extend(uncovered_warning(&info.uncovered_days));

    let content = renderer.render(schedule, start, end, opts);
    Ok(Summary {
        start,
        end,
        warnings,
        content,
    })
}

/// Grille compacte : une ligne par employé, `.` pour un jour de repos.
pub fn render_roster_table(employees: &[Employee], headers: &[String]) -> String {
    let width = employees
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Employee".len());

    let mut out = String::new();
    let _ = write!(out, "{:<width$} ", "Employee");
    for h in headers {
        // initiale du jour de la semaine
        out.push(h.chars().next().unwrap_or(' '));
    }
    out.push_str(" Hours\n");

    for emp in employees {
        let _ = write!(out, "{:<width$} ", emp.name);
        for day in 0..headers.len() {
            match emp.code_on(day) {
                "" => out.push('.'),
                code => out.push_str(code),
            }
        }
        let _ = writeln!(out, " {}", emp.hours);
    }
    out
}

/// Effectif par poste et par jour, plus le total.
pub fn render_coverage(grid: &[DailyCoverage]) -> String {
    let mut out = String::new();
    for code in ShiftCode::ALL {
        let _ = write!(out, "{:<6}", code.label());
        for day in grid {
            let _ = write!(out, " {:>2}", day.get(code));
        }
        out.push('\n');
    }
    let _ = write!(out, "{:<6}", "Total");
    for day in grid {
        let _ = write!(out, " {:>2}", day.total());
    }
    out.push('\n');
    out
}
