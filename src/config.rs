use crate::io::parse_names;
use crate::pattern::{PatternError, RotationPattern, DUPONT, PANAMA};
use crate::scheduler::minimum_crews_for_coverage;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_HOURS_PER_SHIFT: u32 = 8;
pub const DEFAULT_DAYS_ON: usize = 3;
pub const DEFAULT_NAMES: &str = "Alice, Bob, Charlie, Diana, Ethan, Fiona, George";

/// Lundi 26 janvier 2026.
pub fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 26).unwrap_or(NaiveDate::MIN)
}

/// Motifs prédéfinis proposés à l'appelant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// `days_on` jours travaillés sur un cycle de `days_on` × équipes
    #[default]
    Simple,
    Panama,
    #[value(name = "dupont")]
    DuPont,
    Custom,
}

/// Paramètres d'une demande de planning (fichier JSON ou CLI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub start: NaiveDate,
    pub hours_per_shift: u32,
    pub names: Vec<String>,
    pub preset: Preset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub days_on: usize,
    /// 0 = nombre minimal d'équipes couvrant le cycle.
    pub crews: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            hours_per_shift: DEFAULT_HOURS_PER_SHIFT,
            names: parse_names(DEFAULT_NAMES),
            preset: Preset::Simple,
            pattern: None,
            days_on: DEFAULT_DAYS_ON,
            crews: 0,
        }
    }
}

/// Motif et nombre d'équipes retenus pour une demande.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoster {
    pub pattern: RotationPattern,
    pub crew_count: usize,
    /// `true` si le nombre d'équipes a été calculé et non imposé.
    pub auto_crews: bool,
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hours_per_shift == 0 {
            bail!("hours_per_shift must be > 0");
        }
        if self.days_on == 0 {
            bail!("days_on must be > 0");
        }
        if self.preset == Preset::Custom
            && self.pattern.as_deref().map_or(true, |p| p.trim().is_empty())
        {
            bail!("custom preset requires a pattern");
        }
        Ok(())
    }

    /// Équipes nécessaires pour placer tous les noms, trois par équipe (au moins une).
    pub fn crews_for_names(&self) -> usize {
        self.names.len().div_ceil(3).max(1)
    }

    pub fn resolve_pattern(&self) -> Result<RotationPattern, PatternError> {
        match self.preset {
            Preset::Panama => RotationPattern::parse(PANAMA),
            Preset::DuPont => RotationPattern::parse(DUPONT),
            Preset::Simple => Ok(RotationPattern::simple(self.days_on, self.crews_for_names())),
            Preset::Custom => RotationPattern::parse(self.pattern.as_deref().unwrap_or("")),
        }
    }

    pub fn resolve(&self) -> Result<ResolvedRoster> {
        self.validate()?;
        let pattern = self.resolve_pattern().context("invalid pattern")?;
        let (crew_count, auto_crews) = if self.crews > 0 {
            (self.crews, false)
        } else {
            (minimum_crews_for_coverage(&pattern), true)
        };

        #[cfg(feature = "logging")]
        tracing::debug!(pattern = %pattern, crew_count, auto_crews, "roster resolved");

        Ok(ResolvedRoster {
            pattern,
            crew_count,
            auto_crews,
        })
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<RosterConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: RosterConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &RosterConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
