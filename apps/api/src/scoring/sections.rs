use crate::models::resume::ResumeRecord;

/// Structural sections every resume is expected to carry.
pub const REQUIRED_SECTIONS: [&str; 5] = ["summary", "experience", "education", "skills", "projects"];

#[derive(Debug, Clone, PartialEq)]
pub struct SectionCoverage {
    pub score: f64,
    pub found: Vec<&'static str>,
}

/// Maps a detected header onto the canonical section vocabulary.
///
/// Unrecognized headers come back lowercased and trimmed; callers match them
/// by substring so "professional experience" still counts as experience.
pub fn normalize_header(header: &str) -> String {
    let header = header.trim().to_lowercase();

    if ["work", "employment", "history"]
        .iter()
        .any(|k| header.contains(k))
    {
        "experience".to_string()
    } else if header.contains("academic") || header.contains("qualification") {
        "education".to_string()
    } else if header.contains("tech") || header.contains("competencies") {
        "skills".to_string()
    } else if (header.starts_with("pro") && header.ends_with("file")) || header.contains("objective")
    {
        "summary".to_string()
    } else {
        header
    }
}

/// Share of [`REQUIRED_SECTIONS`] present, scaled to `max_points`.
///
/// A section is present when a normalized header contains its name, or, for
/// resumes without explicit headers, when the matching structured list is
/// non-empty. Summary has no structured fallback.
pub fn score_sections(resume: &ResumeRecord, max_points: f64) -> SectionCoverage {
    let headers: Vec<String> = resume.sections.iter().map(|h| normalize_header(h)).collect();

    let found: Vec<&'static str> = REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| {
            headers.iter().any(|h| h.contains(section)) || has_structured_content(resume, section)
        })
        .collect();

    let score = max_points * found.len() as f64 / REQUIRED_SECTIONS.len() as f64;
    SectionCoverage { score, found }
}

fn has_structured_content(resume: &ResumeRecord, section: &str) -> bool {
    match section {
        "skills" => !resume.skills.is_empty(),
        "experience" => !resume.experience.is_empty(),
        "projects" => !resume.projects.is_empty(),
        "education" => !resume.education.is_empty(),
        _ => false,
    }
}
