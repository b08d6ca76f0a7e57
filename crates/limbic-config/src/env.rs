use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// A placeholder may carry a fallback via
/// `{{ env.VAR | default("value") }}`, used when the variable is unset.
/// A placeholder without a fallback whose variable is unset is an error,
/// so a missing secret fails at startup instead of reaching the provider.
pub fn expand_env(raw: &str) -> anyhow::Result<String> {
    fn placeholder() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut expanded = String::with_capacity(raw.len());
    let mut last_end = 0;

    for captures in placeholder().captures_iter(raw) {
        let overall = captures.get(0).expect("capture 0 always present");
        let var_name = &captures[1];
        let fallback = captures.get(2).map(|m| m.as_str());

        expanded.push_str(&raw[last_end..overall.start()]);

        match std::env::var(var_name) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => match fallback {
                Some(value) => expanded.push_str(value),
                None => anyhow::bail!("environment variable not found: `{var_name}`"),
            },
        }

        last_end = overall.end();
    }

    expanded.push_str(&raw[last_end..]);

    Ok(expanded)
}
