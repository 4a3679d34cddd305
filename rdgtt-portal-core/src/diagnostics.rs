//! Diagnostics channel
//!
//! Recoverable conditions (navigation misses, missing translations) never
//! interrupt the user; they are reported here instead. The default sink logs
//! every diagnostic and keeps the most recent ones for display.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use crate::i18n::Language;

/// How many diagnostics the journal keeps
pub const JOURNAL_CAPACITY: usize = 64;

/// A recoverable condition observed by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Active path matched no route; the not-found view was mounted
    NavigationMiss { path: String },
    /// Key absent from the catalog of the current language
    MissingTranslation { language: Language, key: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NavigationMiss { path } => write!(f, "no route for {path}"),
            Self::MissingTranslation { language, key } => {
                write!(f, "missing translation {}:{key}", language.code())
            }
        }
    }
}

/// Receiver of diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that logs through `log` and keeps a bounded journal
#[derive(Debug, Default)]
pub struct DiagnosticJournal {
    entries: Mutex<VecDeque<Diagnostic>>,
}

impl DiagnosticJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the journal, oldest first
    pub fn entries(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Most recent diagnostic, if any
    pub fn latest(&self) -> Option<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.back().cloned(),
            Err(poisoned) => poisoned.into_inner().back().cloned(),
        }
    }

    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(entries) => entries.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for DiagnosticJournal {
    fn report(&self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        if entries.len() == JOURNAL_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_keeps_reports_in_order() {
        let journal = DiagnosticJournal::new();
        journal.report(Diagnostic::NavigationMiss { path: "/a".into() });
        journal.report(Diagnostic::NavigationMiss { path: "/b".into() });

        assert_eq!(journal.len(), 2);
        assert_eq!(
            journal.latest(),
            Some(Diagnostic::NavigationMiss { path: "/b".into() })
        );
    }

    #[test]
    fn journal_is_bounded() {
        let journal = DiagnosticJournal::new();
        for i in 0..JOURNAL_CAPACITY + 5 {
            journal.report(Diagnostic::NavigationMiss {
                path: format!("/{i}"),
            });
        }
        let entries = journal.entries();
        assert_eq!(entries.len(), JOURNAL_CAPACITY);
        assert_eq!(entries[0], Diagnostic::NavigationMiss { path: "/5".into() });
    }

    #[test]
    fn display_is_readable() {
        let d = Diagnostic::MissingTranslation {
            language: Language::En,
            key: "nav.unknown".into(),
        };
        assert_eq!(d.to_string(), "missing translation en:nav.unknown");
    }
}
