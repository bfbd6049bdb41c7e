/// Points deducted per detected writing issue.
pub const ISSUE_PENALTY: f64 = 1.0;

pub fn score_writing(issue_count: usize, max_points: f64) -> f64 {
    (max_points - issue_count as f64 * ISSUE_PENALTY).max(0.0)
}
