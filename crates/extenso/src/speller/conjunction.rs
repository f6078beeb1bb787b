use crate::types::Group;

/// Decides whether the least-significant spoken segment is joined to the
/// rest of the phrase with "e" instead of a plain space.
///
/// `groups` is the full decomposition, least-significant first. The join
/// applies only when more than one group is spoken and the units group is
/// either a multiple of one hundred (zero included) or below one hundred:
/// "mil e um", "mil e cem", but "mil cento e um".
///
/// ```
/// use extenso::Group;
/// use extenso::speller::joins_final_segment;
///
/// assert!(joins_final_segment(&Group::split(1_001)));
/// assert!(!joins_final_segment(&Group::split(1_101)));
/// assert!(!joins_final_segment(&Group::split(1_000)));
/// ```
pub fn joins_final_segment(groups: &[Group]) -> bool {
    let spoken = groups.iter().filter(|group| !group.is_zero()).count();
    if spoken < 2 {
        return false;
    }
    let Some(units) = groups.first() else {
        return false;
    };
    units.value() % 100 == 0 || units.value() < 100
}
