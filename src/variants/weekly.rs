use crate::model::{coverage_grid, DailyCoverage, Employee, ShiftCode};
use anyhow::{bail, Context};
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// Jours de repos (0 = lundi) pour les équipes de 5 personnes sur un poste.
const OFF_PAIRS_5: [(u32, u32); 5] = [(2, 3), (5, 6), (0, 1), (3, 4), (6, 0)];
/// Idem pour 6 personnes.
const OFF_PAIRS_6: [(u32, u32); 6] = [(0, 1), (2, 3), (4, 5), (6, 0), (1, 2), (3, 4)];

/// Équipe pré-répartie entre les trois postes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSpec {
    pub name: String,
    pub prefix: String,
    pub split: Vec<(ShiftCode, usize)>,
}

impl TeamSpec {
    pub fn new<N: Into<String>, P: Into<String>>(
        name: N,
        prefix: P,
        day: usize,
        swing: usize,
        night: usize,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            split: vec![
                (ShiftCode::Day, day),
                (ShiftCode::Swing, swing),
                (ShiftCode::Night, night),
            ],
        }
    }

    pub fn size(&self) -> usize {
        self.split.iter().map(|(_, n)| n).sum()
    }
}

/// Format `nom:préfixe:jour,soir,nuit`, par ex. `Team 1:T1:6,5,5`.
impl FromStr for TeamSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().map(str::trim).unwrap_or("");
        let prefix = parts.next().map(str::trim).context("missing team prefix")?;
        let counts = parts.next().context("missing shift split")?;
        if name.is_empty() || prefix.is_empty() {
            bail!("team name and prefix cannot be empty");
        }
        let counts = counts
            .split(',')
            .map(|c| c.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid shift split for team {name}"))?;
        let &[day, swing, night] = counts.as_slice() else {
            bail!("team {name}: expected three counts (day,swing,night)");
        };
        Ok(Self::new(name, prefix, day, swing, night))
    }
}

pub fn default_teams() -> Vec<TeamSpec> {
    vec![
        TeamSpec::new("Team 1", "T1", 6, 5, 5),
        TeamSpec::new("Team 2", "T2", 5, 5, 5),
    ]
}

/// Planning d'une équipe et sa grille de couverture.
#[derive(Debug, Clone)]
pub struct TeamSchedule {
    pub name: String,
    pub employees: Vec<Employee>,
    pub grid: Vec<DailyCoverage>,
}

/// Deux jours de repos consécutifs pour le membre `member` d'un poste de `count` personnes.
pub fn days_off_for(count: usize, member: usize) -> (u32, u32) {
    let first = match count {
        5 => OFF_PAIRS_5[member % 5].0,
        6 => OFF_PAIRS_6[member % 6].0,
        0 => 0,
        n => ((member % n) * 7 / n) as u32,
    };
    (first, (first + 1) % 7)
}

fn build_team(
    team: &TeamSpec,
    crew: usize,
    start: NaiveDate,
    hours_per_shift: u32,
    days: usize,
) -> TeamSchedule {
    let first_weekday = start.weekday().num_days_from_monday() as usize;
    let mut employees = Vec::with_capacity(team.size());
    let mut number = 1usize;

    for (code, count) in &team.split {
        for member in 0..*count {
            let (a, b) = days_off_for(*count, member);
            let assignments: Vec<Option<ShiftCode>> = (0..days)
                .map(|day| {
                    let weekday = ((first_weekday + day) % 7) as u32;
                    (weekday != a && weekday != b).then_some(*code)
                })
                .collect();
            let worked = assignments.iter().filter(|a| a.is_some()).count() as u32;
            employees.push(Employee {
                name: format!("{}-{:02}", team.prefix, number),
                shift: *code,
                crew,
                assignments,
                hours: worked.saturating_mul(hours_per_shift),
            });
            number += 1;
        }
    }

    let grid = coverage_grid(&employees, days);
    TeamSchedule {
        name: team.name.clone(),
        employees,
        grid,
    }
}

/// Construit chaque équipe sur `days` jours à partir de `start`.
pub fn build_teams(
    teams: &[TeamSpec],
    start: NaiveDate,
    hours_per_shift: u32,
    days: usize,
) -> Vec<TeamSchedule> {
    teams
        .iter()
        .enumerate()
        .map(|(crew, team)| build_team(team, crew, start, hours_per_shift, days))
        .collect()
}
