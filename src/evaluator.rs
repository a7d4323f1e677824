//! Password strength analyzer - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{entropy_bits, CharClasses};
use crate::crack_time::CrackTime;
use crate::config::Settings;
use crate::denylist::{Denylist, DenylistError};
use crate::sections::{
    closing_section, length_section, missing_classes_section, restricted_pool_section, Facts,
    Section,
};
use crate::strength::Strength;
use crate::suggestion::Suggestion;

/// Result of analysing one password. Produced fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    strength: Strength,
    crack_time: CrackTime,
    suggestions: Vec<Suggestion>,
    entropy_bits: f64,
}

impl Analysis {
    fn empty() -> Self {
        Self {
            strength: Strength::Empty,
            crack_time: CrackTime::Placeholder,
            suggestions: vec![Suggestion::plain("Pre analýzu zadajte heslo.")],
            entropy_bits: 0.0,
        }
    }

    fn known_common() -> Self {
        Self {
            strength: Strength::KnownCommon,
            crack_time: CrackTime::KnownPassword,
            suggestions: vec![
                Suggestion::plain("Toto heslo je na zozname veľmi bežných/uniknutých hesiel."),
                Suggestion::from_markup("**Okamžite ho zmeňte všade, kde ho používate!**"),
                Suggestion::plain("Nikdy nepoužívajte bežné slová, frázy alebo jednoduché sekvencie."),
                Suggestion::plain("Silné heslo je unikátne, dlhé a komplexné."),
            ],
            entropy_bits: 0.0,
        }
    }

    /// Ordinal strength in `0..=4`.
    pub fn score(&self) -> u8 {
        self.strength.score()
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn strength_label(&self) -> &'static str {
        self.strength.label()
    }

    pub fn crack_time(&self) -> CrackTime {
        self.crack_time
    }

    pub fn crack_time_label(&self) -> String {
        self.crack_time.to_string()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    pub fn color_tag(&self) -> &'static str {
        self.strength.color_tag()
    }

    pub fn fill_tag(&self) -> &'static str {
        self.strength.fill_tag()
    }

    /// True when the password matched the common-password denylist.
    pub fn is_known_common(&self) -> bool {
        self.strength == Strength::KnownCommon
    }
}

/// Local, synchronous strength analyzer.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    denylist: Denylist,
}

impl Analyzer {
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    /// Built-in denylist, merged with the file named by
    /// `settings.denylist_path` when one is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, DenylistError> {
        let denylist = match &settings.denylist_path {
            Some(path) => Denylist::builtin_with_path(path)?,
            None => Denylist::builtin(),
        };
        Ok(Self::new(denylist))
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Analyzes `password`. Never fails.
    pub fn analyze(&self, password: &SecretString) -> Analysis {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Analysis::empty();
        }

        if self.denylist.contains(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("password matched common-password denylist");
            return Analysis::known_common();
        }

        let length = pwd.encode_utf16().count();
        let classes = CharClasses::scan(pwd);
        let pool_size = classes.pool_size();
        let entropy = entropy_bits(length, pool_size);
        let strength = Strength::classify(entropy, length);

        let facts = Facts {
            length,
            score: strength.score(),
            classes,
            pool_size,
        };

        // Orchestrator: execute sections in sequence
        let sections: [(&str, Section); 4] = [
            ("length", length_section),
            ("variety", missing_classes_section),
            ("closing", closing_section),
            ("pool", restricted_pool_section),
        ];

        let mut suggestions = Vec::new();
        for (_section_name, section_fn) in sections {
            let emitted = section_fn(&facts, &suggestions);
            #[cfg(feature = "tracing")]
            tracing::trace!("section {} emitted {} suggestion(s)", _section_name, emitted.len());
            suggestions.extend(emitted);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "analysis: length={} pool={} entropy={:.2} score={}",
            length,
            pool_size,
            entropy,
            strength.score()
        );

        Analysis {
            strength,
            crack_time: CrackTime::from_entropy(entropy),
            suggestions,
            entropy_bits: entropy,
        }
    }
}

/// Analyzes `password` against the built-in denylist.
///
/// # Example
///
/// ```rust
/// use pwd_exposure::analyze;
/// use secrecy::SecretString;
///
/// let analysis = analyze(&SecretString::new("Tr0ub4dor&3".to_string().into()));
/// assert_eq!(analysis.score(), 3);
/// ```
pub fn analyze(password: &SecretString) -> Analysis {
    Analyzer::default().analyze(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn texts(analysis: &Analysis) -> Vec<&str> {
        analysis.suggestions().iter().map(Suggestion::text).collect()
    }

    #[test]
    fn test_analyze_empty_password() {
        let analysis = analyze(&secret(""));
        assert_eq!(analysis.score(), 0);
        assert_eq!(analysis.entropy_bits(), 0.0);
        assert_eq!(analysis.strength_label(), "Zadajte heslo");
        assert_eq!(analysis.crack_time_label(), "-");
        assert_eq!(texts(&analysis), vec!["Pre analýzu zadajte heslo."]);
        assert_eq!(analysis.fill_tag(), "w-0");
    }

    #[test]
    fn test_analyze_known_common_password() {
        for pwd in ["password", "Password", "PASSWORD", "heslo123", "123"] {
            let analysis = analyze(&secret(pwd));
            assert_eq!(analysis.score(), 0, "{}", pwd);
            assert!(analysis.is_known_common());
            assert_eq!(analysis.entropy_bits(), 0.0);
            assert_eq!(analysis.crack_time(), CrackTime::KnownPassword);
            assert_eq!(analysis.crack_time_label(), "Okamžite (známe heslo)");
            assert_eq!(analysis.strength_label(), "Extrémne nebezpečné!");
            assert_eq!(analysis.suggestions().len(), 4);
        }
    }

    #[test]
    fn test_known_common_urges_change_with_emphasis() {
        let analysis = analyze(&secret("qwerty"));
        let urgent = &analysis.suggestions()[1];
        assert_eq!(urgent.text(), "Okamžite ho zmeňte všade, kde ho používate!");
        assert_eq!(urgent.emphasis().len(), 1);
    }

    #[test]
    fn test_known_sentinel_differs_from_generic_instant() {
        let analysis = analyze(&secret("zz"));
        assert_eq!(analysis.crack_time(), CrackTime::Instant);
        assert_ne!(analysis.crack_time_label(), "Okamžite (známe heslo)");
    }

    #[test]
    fn test_custom_denylist() {
        let analyzer = Analyzer::new(Denylist::from_entries(["letmein"]));
        assert!(analyzer.analyze(&secret("LetMeIn")).is_known_common());
        assert!(!analyzer.analyze(&secret("password")).is_known_common());
    }

    #[test]
    fn test_from_settings_merges_denylist_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "correcthorse").expect("Failed to write");

        let settings = Settings {
            denylist_path: Some(temp_file.path().to_path_buf()),
            ..Settings::default()
        };
        let analyzer = Analyzer::from_settings(&settings).expect("denylist should load");
        assert!(analyzer.analyze(&secret("CorrectHorse")).is_known_common());
        assert!(analyzer.analyze(&secret("admin")).is_known_common());
    }

    #[test]
    fn test_from_settings_missing_file() {
        let settings = Settings {
            denylist_path: Some("/nonexistent/denylist.txt".into()),
            ..Settings::default()
        };
        assert!(matches!(
            Analyzer::from_settings(&settings),
            Err(DenylistError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_entropy_depends_only_on_class_and_length() {
        let pairs = [("abcdef", "zyxwvu"), ("Ab1!", "Zz9~"), ("00000000", "31415926")];
        for (p, q) in pairs {
            assert_eq!(
                analyze(&secret(p)).entropy_bits(),
                analyze(&secret(q)).entropy_bits(),
                "{} vs {}",
                p,
                q
            );
        }
    }

    #[test]
    fn test_entropy_monotonic_in_length_and_classes() {
        let mut last = 0.0;
        for len in 1..30 {
            let entropy = analyze(&secret(&"k".repeat(len))).entropy_bits();
            assert!(entropy >= last);
            last = entropy;
        }

        let growing = ["kkkkkkkkkk", "kkkkkKKKKK", "kkkkkKKK11", "kkkkkKK1!!"];
        let mut last = 0.0;
        for pwd in growing {
            let entropy = analyze(&secret(pwd)).entropy_bits();
            assert!(entropy >= last, "{}", pwd);
            last = entropy;
        }
    }

    #[test]
    fn test_short_password_scores_zero() {
        let analysis = analyze(&secret("aB1"));
        assert_eq!(analysis.score(), 0);
        let analysis = analyze(&secret("a!Z"));
        assert_eq!(analysis.score(), 0);
    }

    #[test]
    fn test_tiers_on_real_passwords() {
        // 8 lowercase: 8 * log2(26) = 37.6
        assert_eq!(analyze(&secret("sunshine")).score(), 2);
        // 6 lowercase: 28.2
        assert_eq!(analyze(&secret("abcdef")).score(), 1);
        // 5 lowercase: 23.5
        assert_eq!(analyze(&secret("abcde")).score(), 0);
        // 12 mixed: 12 * log2(94) = 78.7
        assert_eq!(analyze(&secret("Xk9!mQ2#vL7$")).score(), 3);
        // 20 mixed: 131.1
        assert_eq!(analyze(&secret("Xk9!mQ2#vL7$aP4%nR6&")).score(), 4);
    }

    #[test]
    fn test_suggestions_for_digits_only() {
        let analysis = analyze(&secret("8675309"));
        let texts = texts(&analysis);
        assert_eq!(texts.len(), 5);
        assert!(texts[0].contains("8 znakov"));
        assert!(texts[1].contains("a-z"));
        assert!(texts[2].contains("A-Z"));
        assert!(texts[3].contains("!@#$%"));
        assert!(texts[4].contains("obmedzenú"));
    }

    #[test]
    fn test_suggestions_for_strong_password() {
        let analysis = analyze(&secret("Xk9!mQ2#vL7$aP4%nR6&"));
        assert_eq!(texts(&analysis), vec!["Výborné heslo! Je dlhé a obsahuje rôzne typy znakov."]);
        assert_eq!(analysis.color_tag(), "bg-emerald-600");
    }

    #[test]
    fn test_suggestions_for_good_password() {
        let analysis = analyze(&secret("Xk9!mQ2#vL7$"));
        assert_eq!(texts(&analysis).len(), 1);
        assert!(texts(&analysis)[0].starts_with("Heslo je dobré"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // The emoji is two UTF-16 units, so this is 8 long: 8 * log2(26) = 37.6
        let analysis = analyze(&secret("abcdef😀"));
        assert!((analysis.entropy_bits() - 8.0 * 26f64.log2()).abs() < 1e-9);
        assert_eq!(analysis.score(), 2);
        assert!(texts(&analysis)[0].contains("12-16"));
    }

    #[test]
    fn test_out_of_class_password_has_zero_entropy() {
        let analysis = analyze(&secret("žžžžžžžžžž"));
        assert_eq!(analysis.entropy_bits(), 0.0);
        assert_eq!(analysis.score(), 0);
        assert!(texts(&analysis).iter().any(|t| t.contains("obmedzenú")));
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let pwd = secret("MyPass123!");
        assert_eq!(analyze(&pwd), analyze(&pwd));
    }
}
