//! Language-region tags and the localized bundles the shell ships.

/// Local storage key the i18n layer persists the UI language under.
pub const LANGUAGE_STORAGE_KEY: &str = "i18nextLng";

/// A parsed tag such as `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    pub language: String,
    pub region: Option<String>,
}

impl LocaleTag {
    /// Parse a language tag without ever failing loudly.
    ///
    /// Accepts `pt-BR`, `pt_BR`, `pt_BR.UTF-8`, `en` and similar. The
    /// language must be 2 or 3 ASCII letters; the optional region 2 letters
    /// or 3 digits. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = raw.trim();
        // POSIX locales carry a codeset and modifier: `pt_BR.UTF-8@euro`
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() {
            return None;
        }

        let mut parts = tag.split(['-', '_']);
        let language = parts.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let region = match parts.next() {
            None => None,
            Some(r) if r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()) => {
                Some(r.to_ascii_uppercase())
            }
            Some(r) if r.len() == 3 && r.chars().all(|c| c.is_ascii_digit()) => Some(r.to_string()),
            Some(_) => return None,
        };

        Some(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    /// Language and region run together, e.g. `ptBR`.
    pub fn code(&self) -> String {
        match &self.region {
            Some(region) => format!("{}{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

/// Component labels a locale bundle overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleLabels {
    pub rows_per_page: &'static str,
    pub close: &'static str,
    pub no_options: &'static str,
    pub loading: &'static str,
    pub dark_mode: &'static str,
}

pub const DEFAULT_LABELS: LocaleLabels = LocaleLabels {
    rows_per_page: "Rows per page:",
    close: "Close",
    no_options: "No options",
    loading: "Loading…",
    dark_mode: "Dark Mode",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub id: &'static str,
    pub tag: &'static str,
    pub labels: LocaleLabels,
}

impl Locale {
    pub fn pt_br() -> Self {
        Self {
            id: "ptBR",
            tag: "pt-BR",
            labels: LocaleLabels {
                rows_per_page: "Linhas por página:",
                close: "Fechar",
                no_options: "Sem opções",
                loading: "Carregando…",
                dark_mode: "Modo Escuro",
            },
        }
    }
}

/// Labels for an optional locale, English when none is selected.
pub fn labels_for(locale: Option<&Locale>) -> &LocaleLabels {
    locale.map(|l| &l.labels).unwrap_or(&DEFAULT_LABELS)
}

/// Pick the bundle for a persisted language tag. Only Brazilian Portuguese
/// has one; every other tag, and every malformed one, selects nothing.
pub fn detect_locale(raw: Option<&str>) -> Option<Locale> {
    let tag = LocaleTag::parse(raw?)?;
    let pt_br = Locale::pt_br();
    (tag.code() == pt_br.id).then_some(pt_br)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bcp47_and_posix_forms() {
        let expected = LocaleTag {
            language: "pt".into(),
            region: Some("BR".into()),
        };
        for raw in ["pt-BR", "pt_BR", "pt_BR.UTF-8", " pt-br ", "PT-BR", "pt_BR@latin"] {
            assert_eq!(LocaleTag::parse(raw).as_ref(), Some(&expected), "{raw:?}");
        }
    }

    #[test]
    fn code_concatenates_language_and_region() {
        assert_eq!(LocaleTag::parse("pt-BR").map(|t| t.code()).as_deref(), Some("ptBR"));
        assert_eq!(LocaleTag::parse("en").map(|t| t.code()).as_deref(), Some("en"));
        assert_eq!(LocaleTag::parse("es-419").map(|t| t.code()).as_deref(), Some("es419"));
    }

    #[test]
    fn malformed_tags_are_rejected() {
        for raw in ["", "   ", "p", "pt-", "pt-B", "pt-BRA", "12-BR", "pt--BR", "português", "-BR"] {
            assert_eq!(LocaleTag::parse(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn detects_brazilian_portuguese_only() {
        assert_eq!(detect_locale(Some("pt-BR")), Some(Locale::pt_br()));
        assert_eq!(detect_locale(Some("pt_BR.UTF-8")), Some(Locale::pt_br()));
        assert_eq!(detect_locale(Some("en-US")), None);
        assert_eq!(detect_locale(Some("pt-PT")), None);
        assert_eq!(detect_locale(Some("pt")), None);
        assert_eq!(detect_locale(Some("x")), None);
        assert_eq!(detect_locale(None), None);
    }

    #[test]
    fn labels_default_to_english() {
        assert_eq!(labels_for(None).dark_mode, "Dark Mode");
        assert_eq!(labels_for(Some(&Locale::pt_br())).dark_mode, "Modo Escuro");
    }
}
