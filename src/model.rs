use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Poste de travail sur 24 h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftCode {
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Day,
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Swing,
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    Night,
}

impl ShiftCode {
    /// Ordre d'affectation au sein d'une équipe : jour, soir, nuit.
    pub const ALL: [ShiftCode; 3] = [ShiftCode::Day, ShiftCode::Swing, ShiftCode::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftCode::Day => "D",
            ShiftCode::Swing => "S",
            ShiftCode::Night => "N",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShiftCode::Day => "Day",
            ShiftCode::Swing => "Swing",
            ShiftCode::Night => "Night",
        }
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employé planifié : un poste fixe, une équipe, une affectation par jour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Employee {
    pub name: String,
    pub shift: ShiftCode,
    pub crew: usize,
    /// `None` = repos.
    pub assignments: Vec<Option<ShiftCode>>,
    pub hours: u32,
}

impl Employee {
    pub fn worked_days(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_some()).count()
    }

    /// Code affiché pour un jour donné (`""` si repos ou hors plage).
    pub fn code_on(&self, day: usize) -> &'static str {
        self.assignments
            .get(day)
            .copied()
            .flatten()
            .map(|c| c.as_str())
            .unwrap_or("")
    }
}

/// Synthèse d'une période de paie canonique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PayPeriodInfo {
    pub shifts_per_period: u32,
    pub hours_per_period: u32,
    pub off_days_per_period: u32,
    pub crew_count: usize,
    pub pattern_length: usize,
    pub pattern_string: String,
    /// Jours du cycle (base 0) sans aucune équipe en poste.
    pub uncovered_days: Vec<usize>,
}

impl PayPeriodInfo {
    /// Dépassement du plafond d'heures (avertissement, jamais bloquant).
    pub fn overage(&self, max_hours: u32) -> Option<u32> {
        self.hours_per_period
            .checked_sub(max_hours)
            .filter(|excess| *excess > 0)
    }

    pub fn is_fully_covered(&self) -> bool {
        self.uncovered_days.is_empty()
    }

    /// Effectif minimal pour remplir toutes les équipes (3 postes par équipe).
    pub fn min_employees(&self) -> usize {
        self.crew_count.saturating_mul(ShiftCode::ALL.len())
    }
}

/// Planning complet produit par le constructeur.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub employees: Vec<Employee>,
    pub total_days: usize,
    pub info: PayPeriodInfo,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Effectif présent sur une journée, par poste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailyCoverage {
    pub day: u32,
    pub swing: u32,
    pub night: u32,
}

impl DailyCoverage {
    pub fn get(&self, code: ShiftCode) -> u32 {
        match code {
            ShiftCode::Day => self.day,
            ShiftCode::Swing => self.swing,
            ShiftCode::Night => self.night,
        }
    }

    fn bump(&mut self, code: ShiftCode) {
        match code {
            ShiftCode::Day => self.day += 1,
            ShiftCode::Swing => self.swing += 1,
            ShiftCode::Night => self.night += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.day + self.swing + self.night
    }
}

/// Grille de couverture jour par jour sur `days` jours.
pub fn coverage_grid(employees: &[Employee], days: usize) -> Vec<DailyCoverage> {
    let mut grid = vec![DailyCoverage::default(); days];
    for emp in employees {
        for (slot, assignment) in grid.iter_mut().zip(&emp.assignments) {
            if let Some(code) = assignment {
                slot.bump(*code);
            }
        }
    }
    grid
}

/// Plage (min, max) d'effectif pour un poste sur la grille ; `None` si elle est vide.
pub fn headcount_range(grid: &[DailyCoverage], code: Option<ShiftCode>) -> Option<(u32, u32)> {
    let counts = grid.iter().map(|g| match code {
        Some(c) => g.get(c),
        None => g.total(),
    });
    let min = counts.clone().min()?;
    let max = counts.max()?;
    Some((min, max))
}
