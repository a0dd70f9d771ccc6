//! Fluent localization for the UI.
//!
//! Locale files are embedded from `i18n/<lang>/modelbench-ui.ftl`, with
//! `en-US` as the fallback. Call [`init`] once at startup, then look strings
//! up with `t!("message-id")` or `t!("message-id", name = value)`.
//! The initial language comes from the OS (desktop) or `navigator.languages`
//! (web) and can be changed with [`set_language`].
use std::collections::BTreeSet;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!` against the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// File stem of every locale's `.ftl`; must equal `domain` in `i18n.toml`.
const DOMAIN: &str = "modelbench-ui";

/// Every locale folder under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Loader every `t!` lookup goes through.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Selects the requested languages once; later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "no requested language available; using en-US");
        }
    });
}

/// Switches the UI language. Tags that don't parse are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparsable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_owned))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn domain_matches_the_macro_config_and_file_names() {
        let config = include_str!("../i18n.toml");
        assert!(
            config.contains(&format!("domain = \"{DOMAIN}\"")),
            "i18n.toml must pin the domain to {DOMAIN}"
        );
        for lang in available_languages() {
            let path = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn localized_views_resolve_every_label() {
        init();
        assert_eq!(crate::t!("prompt-submit"), fl!(&*LOADER, "prompt-submit"));
        assert!(!crate::t!("chart-unavailable", metric = "Latency").is_empty());
    }

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn every_locale_is_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn placeables_are_substituted() {
        init();
        let s = fl!(&*LOADER, "metrics-selected-count", count = 2);
        assert!(s.contains('2'), "{s}");
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "brand-name");
        assert_eq!(s, "Modelbench");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "compare-title");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "compare-title");
        assert_eq!(before, after);
    }
}
