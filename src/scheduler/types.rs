/// Paramètres de fenêtre et de plafond utilisés par le constructeur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOptions {
    pub pay_period_days: usize,
    pub display_periods: usize,
    pub max_hours_per_period: u32,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            pay_period_days: 14,
            display_periods: 2,
            max_hours_per_period: 80,
        }
    }
}

impl ScheduleOptions {
    /// Taille de la fenêtre affichée, indépendante du cycle du motif.
    pub fn total_days(&self) -> usize {
        self.pay_period_days * self.display_periods
    }
}
