/// Tiered by project count: none → 0, one → half, two or more → full.
pub fn score_projects(project_count: usize, max_points: f64) -> f64 {
    match project_count {
        0 => 0.0,
        1 => max_points / 2.0,
        _ => max_points,
    }
}
