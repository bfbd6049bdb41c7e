/// Shortfall in years still treated as a near miss.
pub const EXPERIENCE_BUFFER_YEARS: f64 = 0.5;
/// Share of the maximum awarded for a near miss (28 of 30).
pub const NEAR_MISS_FRACTION: f64 = 28.0 / 30.0;

/// Experience sub-score from required vs. actual relevant years.
///
/// No minimum or a met minimum earns `max_points`; a shortfall within the
/// buffer earns the near-miss share; anything larger ramps linearly from 0.
pub fn score_experience(required_years: f64, actual_years: f64, max_points: f64) -> f64 {
    if required_years <= 0.0 || actual_years >= required_years {
        return max_points;
    }

    let deficit = required_years - actual_years;
    if deficit <= EXPERIENCE_BUFFER_YEARS {
        return max_points * NEAR_MISS_FRACTION;
    }

    (max_points * actual_years / required_years).clamp(0.0, max_points)
}
