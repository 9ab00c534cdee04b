//! Config validation: unknown-key detection with Levenshtein suggestions
//! and output-name sanity checks.
//!
//! Two-pass parse: the raw TOML is first read into `toml::Value` and every key
//! path is compared against the known set, producing "did you mean?" warnings.
//! Serde deserialization runs afterwards. Warnings never fail a config.

use std::collections::HashSet;
use std::path::Path;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path in `SynthConfig`.
///
/// Kept by hand in step with the structs in `synth_config.rs`.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        // [generation]
        "generation",
        "generation.points",
        "generation.seed",
        // [output]
        "output",
        "output.dir",
        "output.csv_file",
        "output.xlsx_file",
        "output.sheet_name",
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively collect all dotted key paths of a `toml::Value` tree.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Closest known key within edit distance 3. Ties go to the
/// lexicographically smaller key so suggestions are stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|&(dist, _)| dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation
// ============================================================================

/// Warn about every key in `raw_toml` that `SynthConfig` does not know.
///
/// Unparseable documents produce no warnings; serde reports those.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Output Name Checks
// ============================================================================

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Warnings for output file names whose extension does not match the format
/// written into them.
pub fn validate_output_names(config: &super::SynthConfig) -> Vec<ValidationWarning> {
    let o = &config.output;
    let mut warnings = Vec::new();

    if !o.csv_file.as_os_str().is_empty() && !has_extension(&o.csv_file, "csv") {
        warnings.push(ValidationWarning {
            field: "output.csv_file".to_string(),
            message: format!(
                "output.csv_file '{}' does not end in .csv",
                o.csv_file.display()
            ),
            suggestion: None,
        });
    }
    if !o.xlsx_file.as_os_str().is_empty() && !has_extension(&o.xlsx_file, "xlsx") {
        warnings.push(ValidationWarning {
            field: "output.xlsx_file".to_string(),
            message: format!(
                "output.xlsx_file '{}' does not end in .xlsx; spreadsheet tools may refuse to open it",
                o.xlsx_file.display()
            ),
            suggestion: None,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("seed", "seed"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein("generation.pionts", "generation.points"), 2);
        assert_eq!(levenshtein("generation.sed", "generation.seed"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let value: toml::Value = "[output]\ndir = \"x\"\n[generation]\nseed = 1\n"
            .parse()
            .unwrap();
        let mut keys = walk_toml_keys(&value, "");
        keys.sort();
        assert_eq!(
            keys,
            vec!["generation", "generation.seed", "output", "output.dir"]
        );
    }

    #[test]
    fn test_suggestion_for_typo() {
        let known = known_config_keys();
        assert_eq!(
            suggest_correction("output.sheet_nam", &known).as_deref(),
            Some("output.sheet_name")
        );
        assert_eq!(suggest_correction("completely.unrelated", &known), None);
    }

    #[test]
    fn test_output_extension_warnings() {
        let mut c = crate::config::SynthConfig::default();
        assert!(validate_output_names(&c).is_empty());

        c.output.csv_file = "table.txt".into();
        c.output.xlsx_file = "table.XLSX".into();
        let w = validate_output_names(&c);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].field, "output.csv_file");
    }
}
