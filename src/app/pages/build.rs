//! Build import view: paste the gem list the progress tracker should follow.

use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::app::progress::use_progress;

/// Parse pasted gem names.
///
/// Accepts a JSON array of strings, or plain text with one gem per line
/// (commas also separate). Blank entries are dropped.
pub fn parse_gem_list(input: &str) -> BTreeSet<String> {
    if let Ok(names) = serde_json::from_str::<Vec<String>>(input) {
        return names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
    }

    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn BuildImport() -> Element {
    let progress = use_progress();
    let mut input = use_signal(String::new);

    let gems = progress.gems();
    let gem_count = gems.len();

    rsx! {
        h1 { "Build import" }
        textarea {
            rows: "10",
            placeholder: "[\"Frostblink\", \"Arc\"] or one gem per line",
            value: "{input}",
            oninput: move |evt| input.set(evt.value()),
        }
        button {
            onclick: move |_| {
                let parsed = parse_gem_list(&input.read());
                tracing::info!("Imported {} gems", parsed.len());
                progress.set_gems(parsed);
            },
            "Import"
        }
        p { "{gem_count} gems tracked" }
        ul {
            for gem in gems {
                li { key: "{gem}", "{gem}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_gem_list() {
        let gems = parse_gem_list(r#"["Arc", " Frostblink ", ""]"#);
        assert_eq!(gems.len(), 2);
        assert!(gems.contains("Arc"));
        assert!(gems.contains("Frostblink"));
    }

    #[test]
    fn test_parse_plain_gem_list() {
        let gems = parse_gem_list("Arc\nFrostblink, Flame Dash\n\n Arc ");
        let expected: BTreeSet<String> = ["Arc", "Flame Dash", "Frostblink"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(gems, expected);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_gem_list("").is_empty());
        assert!(parse_gem_list("[]").is_empty());
    }
}
