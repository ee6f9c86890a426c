// SPDX-License-Identifier: MPL-2.0
//! Fluent-based translation store.
//!
//! Translations are embedded at compile time from `assets/i18n/`. An
//! optional directory can be supplied on the command line to load or
//! override `.ftl` files at startup, which keeps translator round trips
//! short.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

fn default_locale() -> LanguageIdentifier {
    "en-US".parse().expect("default locale must parse")
}

/// Translation store with one bundle per available locale.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads all embedded translations, then any `.ftl` files found in
    /// `i18n_dir`. Disk files replace the embedded bundle for the same
    /// locale. The startup locale follows CLI over config over OS locale.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                let bundle = build_bundle(&locale, source).expect("Failed to parse embedded FTL");
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }

        if let Some(dir) = &i18n_dir {
            load_directory(Path::new(dir), &mut bundles, &mut available_locales);
        }

        // Keep the language picker ordering stable across platforms.
        available_locales.sort_by_key(std::string::ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// The locale used to resolve translations.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches to `locale` if a bundle for it exists.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Resolves `key` in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Resolves `key` with interpolation arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(value) = self.format_in(&self.current_locale, key, args) {
            return value;
        }
        // Untranslated keys fall back to the default locale before the
        // MISSING marker, so partial translations stay usable.
        if self.current_locale != default_locale() {
            if let Some(value) = self.format_in(&default_locale(), key, args) {
                return value;
            }
        }
        format!("MISSING: {key}")
    }

    fn format_in(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let res = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Skip Unicode isolation marks around placeables. Every message is
    // rendered as a whole line, so bidi isolation only adds stray glyphs.
    bundle.set_use_isolating(false);
    bundle.add_resource(res).ok()?;
    Some(bundle)
}

/// Loads every parseable `.ftl` file in `dir`. Unreadable or malformed
/// files are skipped so a translator typo cannot prevent startup.
fn load_directory(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ftl") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Ok(locale) = stem.parse::<LanguageIdentifier>() else {
            continue;
        };
        let Ok(source) = std::fs::read_to_string(&path) else {
            continue;
        };
        let Some(bundle) = build_bundle(&locale, source) else {
            continue;
        };

        if !available_locales.contains(&locale) {
            available_locales.push(locale.clone());
        }
        bundles.insert(locale, bundle);
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Command line argument
    if let Some(lang) = cli_lang.as_deref().and_then(|s| match_available(s, available)) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|s| match_available(s, available))
    {
        return Some(lang);
    }

    // 3. OS locale
    if let Some(lang) = sys_locale::get_locale()
        .as_deref()
        .and_then(|s| match_available(s, available))
    {
        return Some(lang);
    }

    None
}

/// Matches a requested locale against the available ones, first exactly,
/// then by primary language subtag ("fr-FR" finds "fr").
fn match_available(
    requested: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let requested: LanguageIdentifier = requested.parse().ok()?;
    if available.contains(&requested) {
        return Some(requested);
    }
    available
        .iter()
        .find(|candidate| candidate.language == requested.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli_over_config() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config_when_no_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());

        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_request() {
        let mut config = Config::default();
        config.general.language = Some("de".to_string());

        let lang = resolve_locale(None, &config, &available());
        // Either the OS locale matched or nothing did. "de" must not win.
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn match_available_falls_back_to_primary_language() {
        let lang = match_available("fr-FR", &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn match_available_rejects_unknown_language() {
        assert_eq!(match_available("ja", &available()), None);
        assert_eq!(match_available("not a locale!", &available()), None);
    }

    #[test]
    fn tr_resolves_embedded_key() {
        let i18n = I18n::default();
        let title = i18n.tr("app-title");
        assert!(!title.starts_with("MISSING:"), "got {title}");
    }

    #[test]
    fn tr_marks_unknown_keys() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_interpolates_values() {
        let i18n = I18n::default();
        let text = i18n.tr_with_args("notification-save-success", &[("filename", "qrcode.png")]);
        assert!(text.contains("qrcode.png"), "got {text}");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();

        i18n.set_locale("zz-ZZ".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn set_locale_switches_to_available_locale() {
        let mut i18n = I18n::default();
        let target: LanguageIdentifier = "fr".parse().unwrap();
        assert!(i18n.available_locales.contains(&target));

        i18n.set_locale(target.clone());
        assert_eq!(i18n.current_locale(), &target);
    }

    #[test]
    fn untranslated_key_falls_back_to_default_locale() {
        let dir = tempdir().expect("failed to create temp dir");
        // A deliberately incomplete locale: only one key translated.
        fs::write(dir.path().join("it.ftl"), "app-title = IcedQr\n").expect("write ftl");

        let mut i18n = I18n::new(
            Some("it".to_string()),
            Some(dir.path().to_string_lossy().to_string()),
            &Config::default(),
        );
        i18n.set_locale("it".parse().unwrap());

        let text = i18n.tr("generator-generate");
        assert!(!text.starts_with("MISSING:"), "got {text}");
    }

    #[test]
    fn directory_files_override_embedded_bundles() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("en-US.ftl"), "app-title = Overridden\n").expect("write ftl");

        let i18n = I18n::new(
            Some("en-US".to_string()),
            Some(dir.path().to_string_lossy().to_string()),
            &Config::default(),
        );

        assert_eq!(i18n.tr("app-title"), "Overridden");
    }

    #[test]
    fn malformed_directory_files_are_skipped() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("en-US.ftl"), "== not fluent ==\n").expect("write ftl");

        let i18n = I18n::new(
            None,
            Some(dir.path().to_string_lossy().to_string()),
            &Config::default(),
        );

        // The embedded bundle is still in place.
        assert!(!i18n.tr("app-title").starts_with("MISSING:"));
    }

    #[test]
    fn missing_directory_is_ignored() {
        let i18n = I18n::new(None, Some("/nonexistent/i18n".to_string()), &Config::default());
        assert!(!i18n.available_locales.is_empty());
    }

    #[test]
    fn available_locales_are_sorted() {
        let i18n = I18n::default();
        let mut sorted = i18n.available_locales.clone();
        sorted.sort_by_key(std::string::ToString::to_string);
        assert_eq!(i18n.available_locales, sorted);
    }
}
