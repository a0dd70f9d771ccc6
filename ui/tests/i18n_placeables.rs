use std::collections::{BTreeMap, BTreeSet};

/// Every locale must define the fallback's messages with the same variables.
///
/// A translation that drops `{ $count }` or renames `$metric` still parses,
/// but the `fl!` compile-time check only looks at the fallback, so the
/// mismatch would only show up as a broken string at runtime.
const EN_US: &str = include_str!("../i18n/en-US/modelbench-ui.ftl");
const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/modelbench-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/modelbench-ui.ftl")),
];

/// Message id → variables referenced anywhere in its value (including
/// indented continuation lines such as select variants).
fn message_variables(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut messages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in src.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let body = if line.starts_with(char::is_whitespace) {
            line
        } else {
            let Some((id, value)) = line.split_once('=') else {
                current = None;
                continue;
            };
            let id = id.trim().to_string();
            messages.entry(id.clone()).or_default();
            current = Some(id);
            value
        };

        if let Some(id) = current.as_ref() {
            let vars = messages.entry(id.clone()).or_default();
            vars.extend(variables_in(body));
        }
    }

    messages
}

fn variables_in(text: &str) -> Vec<String> {
    text.split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn fallback_parses_with_expected_placeables() {
    let fallback = message_variables(EN_US);
    assert!(fallback.len() > 10, "fallback looks truncated");
    assert_eq!(
        fallback["metrics-selected-count"],
        BTreeSet::from(["count".to_string()])
    );
    assert_eq!(
        fallback["chart-unavailable"],
        BTreeSet::from(["metric".to_string()])
    );
    assert!(fallback["compare-title"].is_empty());
}

#[test]
fn locales_match_fallback_messages_and_variables() {
    let fallback = message_variables(EN_US);
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let messages = message_variables(src);
        for (id, vars) in &fallback {
            match messages.get(id) {
                None => failures.push(format!("{locale}: missing `{id}`")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: `{id}` uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in messages.keys().filter(|id| !fallback.contains_key(*id)) {
            failures.push(format!("{locale}: `{id}` not in fallback"));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
