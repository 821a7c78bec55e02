//! Text-to-slug transform.
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercases and strips diacritics: `"São Paulo"` becomes `"sao paulo"`.
pub fn fold(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Builds a URL slug from a display name.
///
/// The result holds only `[a-z0-9]` and single hyphens, never starts or ends
/// with a hyphen, and is stable under repeated application. Distinct names can
/// produce the same slug; see [`dedupe_slug`].
pub fn slugify(input: &str) -> String {
    let kept: String = fold(input)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    kept.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Returns `base` if unused, otherwise `base-2`, `base-3`, ... and records the choice.
pub fn dedupe_slug(base: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(base.to_string()) {
        return base.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_punctuation() {
        assert_eq!(slugify("Conta Azul"), "conta-azul");
        assert_eq!(slugify("  São João -- Gestão!  "), "sao-joao-gestao");
        assert_eq!(slugify("iFood 2.0"), "ifood-20");
        assert_eq!(slugify("Ação & Reação"), "acao-reacao");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_is_idempotent_and_well_formed() {
        let samples = [
            "Nubank",
            "  --Leading and trailing--  ",
            "Tab\tSeparated\nWords",
            "ÀÉÎÕÜ çñ",
            "a--b__c",
            "100% Brasileiro",
        ];
        for s in samples {
            let once = slugify(s);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", s);
            assert!(!once.chars().any(|c| c.is_uppercase()));
            assert!(!once.starts_with('-') && !once.ends_with('-'));
            assert!(!once.contains("--"));
        }
    }

    #[test]
    fn test_dedupe_appends_counter() {
        let mut taken = HashSet::new();
        assert_eq!(dedupe_slug("pipefy", &mut taken), "pipefy");
        assert_eq!(dedupe_slug("pipefy", &mut taken), "pipefy-2");
        assert_eq!(dedupe_slug("pipefy", &mut taken), "pipefy-3");
        assert_eq!(dedupe_slug("rd-station", &mut taken), "rd-station");
    }
}
