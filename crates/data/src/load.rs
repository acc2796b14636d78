use anyhow::{bail, Context};
use bomb_core::{Registry, RuleSet};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const RULES_FILE: &str = "rules.json";

/// Loads `rules.json` from an assets directory, falling back to the
/// standard rules when the file is absent.
pub fn load_rules(dir: &Path) -> anyhow::Result<RuleSet> {
    let path = dir.join(RULES_FILE);
    if !path.exists() {
        info!(dir = %dir.display(), "no rules file, using standard rules");
        return Ok(RuleSet::default());
    }
    load_rules_file(&path)
}

pub fn load_rules_file(path: &Path) -> anyhow::Result<RuleSet> {
    let rules: RuleSet = load_json(path)?;
    validate_rules(&rules).with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?rules, "loaded rules");
    Ok(rules)
}

/// Builds the analyzer registry for rules loaded from `dir`.
pub fn load_registry(dir: &Path) -> anyhow::Result<Registry> {
    Ok(Registry::new(load_rules(dir)?))
}

pub fn validate_rules(rules: &RuleSet) -> anyhow::Result<()> {
    if rules.min_straight_len < 2 || rules.min_straight_len > RuleSet::MAX_RUN {
        bail!(
            "min_straight_len must be between 2 and {}, got {}",
            RuleSet::MAX_RUN,
            rules.min_straight_len
        );
    }
    if rules.min_pair_run < 2 || rules.min_pair_run > RuleSet::MAX_RUN {
        bail!(
            "min_pair_run must be between 2 and {}, got {}",
            RuleSet::MAX_RUN,
            rules.min_pair_run
        );
    }
    if rules.min_triple_run < 2 || rules.min_triple_run > RuleSet::MAX_RUN {
        bail!(
            "min_triple_run must be between 2 and {}, got {}",
            RuleSet::MAX_RUN,
            rules.min_triple_run
        );
    }
    if rules.min_bomb < 4 {
        bail!("min_bomb must be at least 4, got {}", rules.min_bomb);
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomb_core::{parse_cards, HandType};
    use std::path::PathBuf;

    fn assets_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("assets")
    }

    #[test]
    fn bundled_rules_are_the_standard_rules() {
        let rules = load_rules(&assets_root()).expect("load rules");
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load_rules(dir.path()).expect("load"), RuleSet::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(RULES_FILE),
            r#"{ "min_straight_len": 3, "rocket": false }"#,
        )
        .expect("write");
        let rules = load_rules(dir.path()).expect("load");
        assert_eq!(rules.min_straight_len, 3);
        assert!(!rules.rocket);
        assert_eq!(rules.min_bomb, 4);

        let registry = load_registry(dir.path()).expect("registry");
        let short = parse_cards("3S 4H 5D").expect("parse");
        assert_eq!(registry.resolve(&short), Ok(Some(HandType::Straight { len: 3 })));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(RULES_FILE);
        fs::write(&path, r#"{ "min_bomb": 3 }"#).expect("write");
        let err = load_rules_file(&path).expect_err("bomb of three");
        assert!(format!("{err:#}").contains("min_bomb"));
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(RULES_FILE);
        fs::write(&path, "{ not json").expect("write");
        let err = load_rules_file(&path).expect_err("parse error");
        assert!(format!("{err:#}").contains("parse"));
    }
}
