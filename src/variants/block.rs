use crate::model::Schedule;
use crate::pattern::RotationPattern;
use crate::scheduler::{ScheduleOptions, Scheduler};

/// Rotation en bloc déduite du plafond d'heures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRotation {
    pub pattern: RotationPattern,
    pub crew_count: usize,
    pub shifts_per_period: usize,
}

/// Calcule le bloc : autant de postes que le plafond le permet (au plus un par jour),
/// puis assez d'équipes pour remplir la période. `None` si aucun poste ne tient
/// sous le plafond.
pub fn block_rotation(hours_per_shift: u32, opts: ScheduleOptions) -> Option<BlockRotation> {
    if hours_per_shift == 0 || opts.pay_period_days == 0 {
        return None;
    }
    let shifts = ((opts.max_hours_per_period / hours_per_shift) as usize).min(opts.pay_period_days);
    if shifts == 0 {
        return None;
    }
    Some(BlockRotation {
        pattern: RotationPattern::block(shifts, opts.pay_period_days),
        crew_count: opts.pay_period_days.div_ceil(shifts),
        shifts_per_period: shifts,
    })
}

pub fn build_block_schedule<S: AsRef<str>>(
    names: &[S],
    hours_per_shift: u32,
    opts: ScheduleOptions,
) -> Schedule {
    let Some(rotation) = block_rotation(hours_per_shift, opts) else {
        return Schedule::default();
    };
    Scheduler::new(opts).build_schedule(names, hours_per_shift, &rotation.pattern, rotation.crew_count)
}
