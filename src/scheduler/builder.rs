use super::{coverage, util, ScheduleOptions};
use crate::model::{Employee, PayPeriodInfo, Schedule, ShiftCode};
use crate::pattern::RotationPattern;

pub(super) fn build_schedule<S: AsRef<str>>(
    names: &[S],
    hours_per_shift: u32,
    pattern: &RotationPattern,
    crew_count: usize,
    opts: ScheduleOptions,
) -> Schedule {
    let cycle = pattern.len();
    if names.is_empty() || hours_per_shift == 0 || cycle == 0 {
        return Schedule::default();
    }

    let total_days = opts.total_days();
    let period_days = opts.pay_period_days.min(total_days);

    // l'équipe 0 (décalage nul) sert de référence : toutes les équipes ont le même
    // nombre de jours travaillés, seul le déphasage change
    let shifts_in_period = (0..period_days).filter(|d| pattern.is_on(*d, 0)).count();

    let capacity = crew_count.saturating_mul(ShiftCode::ALL.len());
    let mut employees = Vec::with_capacity(names.len().min(capacity));
    let mut remaining = names.iter();

    'crews: for crew in 0..crew_count {
        let offset = util::crew_offset(crew, cycle, crew_count);
        let on: Vec<bool> = (0..total_days).map(|d| pattern.is_on(d, offset)).collect();
        let worked = on.iter().filter(|b| **b).count() as u32;

        for code in ShiftCode::ALL {
            let Some(name) = remaining.next() else {
                break 'crews;
            };
            employees.push(Employee {
                name: name.as_ref().to_string(),
                shift: code,
                crew,
                assignments: on.iter().map(|b| b.then_some(code)).collect(),
                hours: worked.saturating_mul(hours_per_shift),
            });
        }
    }

    let shifts = shifts_in_period as u32;
    let info = PayPeriodInfo {
        shifts_per_period: shifts,
        hours_per_period: shifts.saturating_mul(hours_per_shift),
        off_days_per_period: opts.pay_period_days.saturating_sub(shifts_in_period) as u32,
        crew_count,
        pattern_length: cycle,
        pattern_string: pattern.to_string(),
        uncovered_days: coverage::validate_coverage(pattern, crew_count),
    };

    #[cfg(feature = "logging")]
    tracing::debug!(
        employees = employees.len(),
        unused = names.len().saturating_sub(employees.len()),
        total_days,
        crew_count,
        uncovered = info.uncovered_days.len(),
        "schedule built"
    );

    Schedule {
        employees,
        total_days,
        info,
    }
}
