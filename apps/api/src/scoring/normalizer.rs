/// Canonical comparison form of a skill: lowercased, trimmed, synonym-resolved.
///
/// Only used for comparison; the original spelling is kept for display.
pub fn normalize_skill(raw: &str) -> String {
    let token = raw.trim().to_lowercase();
    match canonical_synonym(&token) {
        Some(canonical) => canonical.to_string(),
        None => token,
    }
}

/// Static synonym table. Exact lookup on the lowercased, trimmed token.
fn canonical_synonym(token: &str) -> Option<&'static str> {
    let canonical = match token {
        "react" | "react.js" => "reactjs",
        "js" => "javascript",
        "ts" => "typescript",
        "node" | "node.js" => "nodejs",
        "py" => "python",
        "golang" => "go",
        "c++" => "cpp",
        "dot net" | "dotnet" => ".net",
        "aws" => "amazon web services",
        "gcp" => "google cloud platform",
        "k8s" => "kubernetes",
        "postgres" => "postgresql",
        _ => return None,
    };
    Some(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize_skill("  Rust \n"), "rust");
    }

    #[test]
    fn test_synonyms_resolve() {
        assert_eq!(normalize_skill("React"), "reactjs");
        assert_eq!(normalize_skill("React.js"), "reactjs");
        assert_eq!(normalize_skill("JS"), "javascript");
        assert_eq!(normalize_skill("Node.js"), "nodejs");
        assert_eq!(normalize_skill("golang"), "go");
        assert_eq!(normalize_skill("C++"), "cpp");
        assert_eq!(normalize_skill("Dot Net"), ".net");
        assert_eq!(normalize_skill("AWS"), "amazon web services");
        assert_eq!(normalize_skill("ts"), "typescript");
        assert_eq!(normalize_skill("py"), "python");
    }

    #[test]
    fn test_lookup_is_exact_not_partial() {
        assert_eq!(normalize_skill("react native"), "react native");
        assert_eq!(normalize_skill("jsx"), "jsx");
    }

    #[test]
    fn test_canonical_forms_are_fixed_points() {
        for raw in ["reactjs", "javascript", "nodejs", "go", "cpp", ".net"] {
            assert_eq!(normalize_skill(raw), raw);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_skill("   "), "");
    }
}
