use super::util;
use crate::pattern::RotationPattern;

pub(super) fn validate_coverage(pattern: &RotationPattern, crew_count: usize) -> Vec<usize> {
    let cycle = pattern.len();
    if crew_count == 0 || cycle == 0 {
        return Vec::new();
    }

    // à partir de `cycle` équipes, les décalages parcourent tous les jours du cycle
    let offsets: Vec<usize> = if crew_count >= cycle {
        (0..cycle).collect()
    } else {
        (0..crew_count)
            .map(|crew| util::crew_offset(crew, cycle, crew_count))
            .collect()
    };

    (0..cycle)
        .filter(|day| !offsets.iter().any(|offset| pattern.is_on(*day, *offset)))
        .collect()
}

pub(super) fn minimum_crews_for_coverage(pattern: &RotationPattern) -> usize {
    let cycle = pattern.len();
    // au pire `cycle` équipes : une par jour de décalage
    let crews = (1..cycle)
        .find(|crews| validate_coverage(pattern, *crews).is_empty())
        .unwrap_or(cycle);

    #[cfg(feature = "logging")]
    tracing::debug!(cycle, crews, "minimum crew count");

    crews
}
