/// Décalage d'une équipe : `crew * cycle_len / crew_count` (division entière).
pub(super) fn crew_offset(crew: usize, cycle_len: usize, crew_count: usize) -> usize {
    if crew_count == 0 {
        return 0;
    }
    (crew as u128 * cycle_len as u128 / crew_count as u128) as usize
}

