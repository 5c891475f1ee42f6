mod builder;
mod coverage;
mod types;
mod util;

pub use types::ScheduleOptions;

use crate::model::Schedule;
use crate::pattern::RotationPattern;

/// Scheduler : porte les options de fenêtre ; chaque appel reste une fonction pure.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scheduler {
    opts: ScheduleOptions,
}

impl Scheduler {
    pub fn new(opts: ScheduleOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> ScheduleOptions {
        self.opts
    }

    /// Jours du cycle (base 0, ordre croissant) qu'aucune équipe ne couvre.
    pub fn validate_coverage(&self, pattern: &RotationPattern, crew_count: usize) -> Vec<usize> {
        coverage::validate_coverage(pattern, crew_count)
    }

    /// Plus petit nombre d'équipes régulièrement décalées couvrant tout le cycle,
    /// borné par la longueur du cycle.
    pub fn minimum_crews_for_coverage(&self, pattern: &RotationPattern) -> usize {
        coverage::minimum_crews_for_coverage(pattern)
    }

    /// Déploie les équipes sur la fenêtre affichée ; trois employés par équipe
    /// (jour, soir, nuit), dans l'ordre fourni.
    pub fn build_schedule<S: AsRef<str>>(
        &self,
        names: &[S],
        hours_per_shift: u32,
        pattern: &RotationPattern,
        crew_count: usize,
    ) -> Schedule {
        builder::build_schedule(names, hours_per_shift, pattern, crew_count, self.opts)
    }
}

pub fn validate_coverage(pattern: &RotationPattern, crew_count: usize) -> Vec<usize> {
    coverage::validate_coverage(pattern, crew_count)
}

pub fn minimum_crews_for_coverage(pattern: &RotationPattern) -> usize {
    coverage::minimum_crews_for_coverage(pattern)
}

/// Construit un planning avec les options par défaut (paie sur 14 jours, 2 périodes).
pub fn build_schedule<S: AsRef<str>>(
    names: &[S],
    hours_per_shift: u32,
    pattern: &RotationPattern,
    crew_count: usize,
) -> Schedule {
    Scheduler::default().build_schedule(names, hours_per_shift, pattern, crew_count)
}
