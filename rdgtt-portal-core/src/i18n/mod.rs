//! Localization resolver
//!
//! Every rendered text goes through [`Localizer::translate`] (or [`Localizer::t`]
//! for the shell's own keys). The current language is a single cell read on
//! each lookup, so a language change shows up everywhere on the next render
//! pass without notifying individual readers.

mod catalog;
mod keys;

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

pub use catalog::Catalog;
pub use keys::MessageKey;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::CoreResult;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French
    #[default]
    Fr,
    /// English
    En,
}

impl Language {
    /// All supported languages, in menu order
    pub fn all() -> &'static [Language] {
        &[Language::Fr, Language::En]
    }

    /// Name of the language written in that language
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
        }
    }

    /// Short language code, also the catalog file stem
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Parse a language code, tolerant of region tags and case
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Next language (cycling)
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    const fn index(self) -> usize {
        match self {
            Language::Fr => 0,
            Language::En => 1,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation lookup bound to the current language
pub struct Localizer {
    catalogs: [Catalog; 2],
    current: Language,
    reported: Mutex<HashSet<(Language, String)>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Localizer {
    pub fn new(fr: Catalog, en: Catalog, language: Language, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            catalogs: [fr, en],
            current: language,
            reported: Mutex::new(HashSet::new()),
            sink,
        }
    }

    /// Localizer over the catalogs shipped with the crate
    pub fn builtin(language: Language, sink: Arc<dyn DiagnosticSink>) -> CoreResult<Self> {
        Ok(Self::new(
            Catalog::builtin(Language::Fr)?,
            Catalog::builtin(Language::En)?,
            language,
            sink,
        ))
    }

    /// Current language
    pub fn language(&self) -> Language {
        self.current
    }

    /// Switch language; takes effect on the very next lookup
    pub fn set_language(&mut self, language: Language) {
        if self.current != language {
            log::info!("Language changed: {} -> {}", self.current, language);
        }
        self.current = language;
    }

    pub fn catalog(&self, language: Language) -> &Catalog {
        &self.catalogs[language.index()]
    }

    /// Look up `key` in the current language.
    ///
    /// A missing key returns the key itself and reports a
    /// [`Diagnostic::MissingTranslation`] (once per language/key pair).
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        let language = self.current;
        if let Some(text) = self.catalog(language).get(key) {
            return text;
        }
        self.report_missing(language, key);
        key
    }

    /// Look up one of the shell's own keys
    pub fn t(&self, key: MessageKey) -> &str {
        self.translate(key.as_str())
    }

    /// Look up `key` and substitute `{name}` placeholders.
    ///
    /// The template is scanned once; substituted values are never rescanned
    /// and unknown placeholders are kept as written.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.translate(key);
        let mut text = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let substitution = after.find('}').and_then(|close| {
                let name = &after[..close];
                args.iter()
                    .find(|(arg, _)| *arg == name)
                    .map(|(_, value)| (close, *value))
            });
            match substitution {
                Some((close, value)) => {
                    text.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    text.push('{');
                    rest = after;
                }
            }
        }
        text.push_str(rest);
        text
    }

    /// [`translate_with`](Self::translate_with) for the shell's own keys
    pub fn t_with(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        self.translate_with(key.as_str(), args)
    }

    /// Every `(language, key)` pair that does not resolve.
    ///
    /// Each gap is also reported as a [`Diagnostic::MissingTranslation`],
    /// whatever the current language, sharing the once-per-pair rule with
    /// [`translate`](Self::translate).
    pub fn audit<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Vec<(Language, String)> {
        let mut missing = Vec::new();
        for key in keys {
            for &language in Language::all() {
                if !self.catalog(language).contains(key) {
                    self.report_missing(language, key);
                    missing.push((language, key.to_string()));
                }
            }
        }
        missing
    }

    fn report_missing(&self, language: Language, key: &str) {
        let first_time = match self.reported.lock() {
            Ok(mut reported) => reported.insert((language, key.to_string())),
            Err(poisoned) => poisoned.into_inner().insert((language, key.to_string())),
        };
        if first_time {
            self.sink.report(Diagnostic::MissingTranslation {
                language,
                key: key.to_string(),
            });
        }
    }
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("current", &self.current)
            .field("fr_keys", &self.catalogs[0].len())
            .field("en_keys", &self.catalogs[1].len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticJournal;

    fn localizer(language: Language) -> (Localizer, Arc<DiagnosticJournal>) {
        let journal = Arc::new(DiagnosticJournal::new());
        let mut fr = Catalog::default();
        fr.insert("nav.dashboard", "Tableau de bord");
        fr.insert("greeting", "Bonjour {name}, {name} !");
        fr.insert("fr.only", "seulement");
        fr.insert("pair", "{a} / {b}");
        let mut en = Catalog::default();
        en.insert("nav.dashboard", "Dashboard");
        en.insert("greeting", "Hello {name}, {name}!");
        en.insert("pair", "{a} / {b}");
        (Localizer::new(fr, en, language, journal.clone()), journal)
    }

    #[test]
    fn language_codes_parse() {
        assert_eq!(Language::from_code("fr"), Some(Language::Fr));
        assert_eq!(Language::from_code("fr-FR"), Some(Language::Fr));
        assert_eq!(Language::from_code("EN_us"), Some(Language::En));
        assert_eq!(Language::from_code("en-GB"), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn default_language_is_french() {
        assert_eq!(Language::default(), Language::Fr);
    }

    #[test]
    fn set_language_applies_to_next_lookup() {
        let (mut l, _) = localizer(Language::Fr);
        assert_eq!(l.translate("nav.dashboard"), "Tableau de bord");
        l.set_language(Language::En);
        assert_eq!(l.translate("nav.dashboard"), "Dashboard");
        l.set_language(Language::Fr);
        assert_eq!(l.translate("nav.dashboard"), "Tableau de bord");
    }

    #[test]
    fn missing_key_falls_back_to_key_and_reports_once() {
        let (mut l, journal) = localizer(Language::En);
        assert_eq!(l.translate("fr.only"), "fr.only");
        assert_eq!(l.translate("fr.only"), "fr.only");
        assert_eq!(journal.len(), 1);
        assert_eq!(
            journal.latest(),
            Some(Diagnostic::MissingTranslation {
                language: Language::En,
                key: "fr.only".into()
            })
        );

        l.set_language(Language::Fr);
        assert_eq!(l.translate("fr.only"), "seulement");
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn placeholders_are_substituted() {
        let (l, _) = localizer(Language::En);
        assert_eq!(
            l.translate_with("greeting", &[("name", "Awa")]),
            "Hello Awa, Awa!"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let (l, _) = localizer(Language::En);
        assert_eq!(
            l.translate_with("pair", &[("a", "{b}"), ("b", "x")]),
            "{b} / x"
        );
        assert_eq!(l.translate_with("pair", &[("a", "1")]), "1 / {b}");
    }

    #[test]
    fn audit_lists_gaps_per_language() {
        let (l, journal) = localizer(Language::Fr);
        let missing = l.audit(["nav.dashboard", "fr.only", "nowhere"]);
        assert_eq!(
            missing,
            vec![
                (Language::En, "fr.only".to_string()),
                (Language::Fr, "nowhere".to_string()),
                (Language::En, "nowhere".to_string()),
            ]
        );
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn audit_reports_gaps_in_the_other_language() {
        let (mut l, journal) = localizer(Language::Fr);
        l.audit(["fr.only"]);
        assert_eq!(
            journal.entries(),
            vec![Diagnostic::MissingTranslation {
                language: Language::En,
                key: "fr.only".into()
            }]
        );

        // already reported by the audit
        l.set_language(Language::En);
        assert_eq!(l.translate("fr.only"), "fr.only");
        l.audit(["fr.only"]);
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn builtin_catalogs_cover_every_message_key() {
        let journal: Arc<dyn DiagnosticSink> = Arc::new(DiagnosticJournal::new());
        let l = Localizer::builtin(Language::Fr, journal).unwrap();
        let missing = l.audit(MessageKey::ALL.iter().map(|k| k.as_str()));
        assert!(missing.is_empty(), "missing translations: {missing:?}");
    }
}
