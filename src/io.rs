use crate::model::{Employee, Schedule};
use anyhow::{bail, Context};
use chrono::{Days, NaiveDate};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Liste de noms séparés par des virgules ; les entrées vides sont ignorées.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Import de noms depuis CSV: header `name[,...]`, seule la première colonne est lue.
pub fn import_names_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<String>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid name row (empty)");
        }
        out.push(name.to_string());
    }
    Ok(out)
}

/// En-têtes de colonnes, un par jour : `Mon 01/26`.
pub fn date_headers(start: NaiveDate, days: usize) -> anyhow::Result<Vec<String>> {
    (0..days)
        .map(|i| {
            start
                .checked_add_days(Days::new(i as u64))
                .map(|d| d.format("%a %m/%d").to_string())
                .with_context(|| format!("date overflow at day {i}"))
        })
        .collect()
}

/// CSV du planning: header `Employee,<jours...>,Total Hours`.
pub fn write_schedule_csv<W: Write>(
    writer: W,
    employees: &[Employee],
    headers: &[String],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(writer);

    let mut header = Vec::with_capacity(headers.len() + 2);
    header.push("Employee");
    header.extend(headers.iter().map(String::as_str));
    header.push("Total Hours");
    w.write_record(&header)?;

    for emp in employees {
        let hours = emp.hours.to_string();
        let mut row = Vec::with_capacity(headers.len() + 2);
        row.push(emp.name.as_str());
        row.extend((0..headers.len()).map(|day| emp.code_on(day)));
        row.push(hours.as_str());
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV, écrit de manière atomique (fichier temporaire puis renommage).
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    employees: &[Employee],
    headers: &[String],
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut tmp = temp_beside(path)?;
    write_schedule_csv(&mut tmp, employees, headers)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

fn temp_beside(path: &Path) -> anyhow::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    NamedTempFile::new_in(dir).with_context(|| "creating temp file")
}
