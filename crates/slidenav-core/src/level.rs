use crate::source::LevelInfo;

/// Pick the level whose downsample is closest to `1/zoom`.
///
/// Scans from level 0 upward and keeps the first minimum, so ties resolve
/// to the lower index. This determines which resolution is rendered at
/// boundary zoom values and must stay deterministic.
pub fn best_level(levels: &[LevelInfo], zoom: f64) -> usize {
    if levels.len() <= 1 {
        return 0;
    }

    let target = 1.0 / zoom;
    let mut best = 0;
    let mut min_diff = (levels[0].downsample - target).abs();
    for (index, level) in levels.iter().enumerate().skip(1) {
        let diff = (level.downsample - target).abs();
        if diff < min_diff {
            min_diff = diff;
            best = index;
        }
    }
    best
}
