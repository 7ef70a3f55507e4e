/// Config sections that can be set from `NODAL_<SECTION>__<KEY>` env vars.
const SECTIONS: [(&str, &str); 2] = [
    ("NODAL_CATALOG", "NODAL_CATALOG__BASE_URL"),
    ("NODAL_EXPORT", "NODAL_EXPORT__DIRECTORY"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_misnamed_env() {
    for warning in collect_misnamed_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_misnamed_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    SECTIONS
        .iter()
        .filter_map(|(prefix, example)| {
            let single = format!("{prefix}_");
            let double = format!("{prefix}__");
            let misnamed = env_keys
                .iter()
                .find(|key| key.starts_with(&single) && !key.starts_with(&double))?;
            Some(format!(
                "{misnamed} is ignored. Use double underscores (example: {example})."
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::collect_misnamed_env_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_misnamed_env_warnings(vec![
            ("NODAL_CATALOG_BASE_URL".to_string(), "http://x".to_string()),
            ("NODAL_EXPORT_DIRECTORY".to_string(), "/tmp".to_string()),
        ]);

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("NODAL_CATALOG_BASE_URL is ignored"));
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let warnings = collect_misnamed_env_warnings(vec![
            ("NODAL_CATALOG__BASE_URL".to_string(), "http://x".to_string()),
            ("NODAL_EXPORT__DIRECTORY".to_string(), "/tmp".to_string()),
            ("NODAL_LOG".to_string(), "debug".to_string()),
        ]);

        assert!(warnings.is_empty());
    }
}
