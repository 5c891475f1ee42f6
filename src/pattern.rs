use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Panama : cycle de 28 jours, 50 % de présence, prévu pour 4 équipes.
pub const PANAMA: &str = "OOFFOOOFFOOFFFOOFFOOOFFOOFFF";

/// DuPont : cycle de 28 jours, prévu pour 4 équipes.
pub const DUPONT: &str = "OOOOFFFOOOFOOOFFFOOOOFFFFFFF";

/// Erreur de lecture d'un motif de rotation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("invalid character {ch:?} at position {position} (expected O/F or 1/0)")]
    InvalidChar { ch: char, position: usize },
}

/// Motif de rotation : un cycle complet de jours travaillés (`true`) / repos (`false`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RotationPattern {
    days: Vec<bool>,
}

impl RotationPattern {
    /// Construit un motif brut. Un motif vide est accepté ici : le planificateur
    /// le traite comme un cas dégénéré (résultat vide).
    pub fn new(days: Vec<bool>) -> Self {
        Self { days }
    }

    /// Lit un motif textuel : `O`/`1` = travaillé, `F`/`0` = repos, casse ignorée.
    /// Les blancs et les tirets servent de séparateurs et sont ignorés.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let cleaned = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-');

        let mut days = Vec::new();
        for (position, ch) in cleaned.enumerate() {
            let on = match ch.to_ascii_uppercase() {
                'O' | '1' => true,
                'F' | '0' => false,
                _ => return Err(PatternError::InvalidChar { ch, position }),
            };
            days.push(on);
        }

        if days.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { days })
    }

    /// Motif "simple" : `days_on` jours travaillés puis repos, sur
    /// `days_on * crew_count` jours. Les deux valeurs sont ramenées à 1 au minimum.
    pub fn simple(days_on: usize, crew_count: usize) -> Self {
        let days_on = days_on.max(1);
        let crew_count = crew_count.max(1);
        Self::block(days_on, days_on * crew_count)
    }

    /// Bloc fixe : les `days_on` premiers jours travaillés sur un cycle de `cycle_len` jours.
    pub fn block(days_on: usize, cycle_len: usize) -> Self {
        Self {
            days: (0..cycle_len).map(|d| d < days_on).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[bool] {
        &self.days
    }

    /// Nombre de jours travaillés dans un cycle.
    pub fn on_days(&self) -> usize {
        self.days.iter().filter(|on| **on).count()
    }

    /// Indique si le jour `day` est travaillé pour une équipe décalée de `offset` jours.
    ///
    /// Retourne `false` pour un motif vide.
    pub fn is_on(&self, day: usize, offset: usize) -> bool {
        let cycle = self.days.len();
        if cycle == 0 {
            return false;
        }
        let idx = (day % cycle + cycle - offset % cycle) % cycle;
        self.days[idx]
    }
}

impl fmt::Display for RotationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for on in &self.days {
            f.write_str(if *on { "O" } else { "F" })?;
        }
        Ok(())
    }
}

impl FromStr for RotationPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RotationPattern {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RotationPattern> for String {
    fn from(pattern: RotationPattern) -> Self {
        pattern.to_string()
    }
}

/// Raccourci fonctionnel pour [`RotationPattern::parse`].
pub fn parse_pattern(text: &str) -> Result<RotationPattern, PatternError> {
    RotationPattern::parse(text)
}
