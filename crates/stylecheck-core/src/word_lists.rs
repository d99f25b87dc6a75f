//! Word lists consumed by the lexical scanner and the passive-voice detector.
//!
//! The built-in tables cover complex words (with simpler replacements),
//! adverbs, hedging qualifiers and passive-voice precursors. Configuration can
//! extend, trim or replace them; see [`WordListConfig`].
//!
//! List order matters: diagnostics for one rule come out in list order.

use std::collections::HashSet;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complex words and phrases, each with its suggested replacements.
const COMPLEX_WORDS: &[(&str, &[&str])] = &[
    ("a number of", &["many", "some"]),
    ("abundance", &["enough", "plenty"]),
    ("accede to", &["allow", "agree to"]),
    ("accelerate", &["speed up"]),
    ("accentuate", &["stress"]),
    ("accompany", &["go with", "with"]),
    ("accomplish", &["do"]),
    ("accorded", &["given"]),
    ("accrue", &["add", "gain"]),
    ("acquiesce", &["agree"]),
    ("acquire", &["get"]),
    ("additional", &["more", "extra"]),
    ("adjacent to", &["next to"]),
    ("adjustment", &["change"]),
    ("admissible", &["allowed", "accepted"]),
    ("advantageous", &["helpful"]),
    ("adversely impact", &["hurt"]),
    ("aforementioned", &["remove"]),
    ("aggregate", &["total", "add"]),
    ("alleviate", &["ease", "reduce"]),
    ("allocate", &["divide"]),
    ("along the lines of", &["like", "as in"]),
    ("already existing", &["existing"]),
    ("ameliorate", &["improve", "help"]),
    ("anticipate", &["expect"]),
    ("appreciable", &["many"]),
    ("as a means of", &["to"]),
    ("as of yet", &["yet"]),
    ("ascertain", &["find out", "learn"]),
    ("assistance", &["help"]),
    ("at this time", &["now"]),
    ("attributable to", &["because"]),
    ("because of the fact that", &["because"]),
    ("belated", &["late"]),
    ("benefit from", &["enjoy"]),
    ("bestow", &["give", "award"]),
    ("by virtue of", &["by", "under"]),
    ("cease", &["stop"]),
    ("close proximity", &["near"]),
    ("commence", &["begin", "start"]),
    ("comply with", &["follow"]),
    ("concerning", &["about", "on"]),
    ("consequently", &["so"]),
    ("consolidate", &["join", "merge"]),
    ("constitutes", &["is", "forms", "makes up"]),
    ("demonstrate", &["prove", "show"]),
    ("designate", &["choose", "name"]),
    ("discontinue", &["drop", "stop"]),
    ("due to the fact that", &["because", "since"]),
    ("each and every", &["each"]),
    ("economical", &["cheap"]),
    ("eliminate", &["cut", "drop", "end"]),
    ("elucidate", &["explain"]),
    ("endeavor", &["try"]),
    ("enumerate", &["count"]),
    ("equitable", &["fair"]),
    ("equivalent", &["equal"]),
    ("exclusively", &["only"]),
    ("expedite", &["hurry"]),
    ("expenditure", &["cost", "spending"]),
    ("facilitate", &["ease", "help"]),
    ("factual evidence", &["facts", "evidence"]),
    ("feasible", &["workable"]),
    ("finalize", &["complete", "finish"]),
    ("first and foremost", &["first"]),
    ("for the purpose of", &["to"]),
    ("forfeit", &["lose", "give up"]),
    ("formulate", &["plan"]),
    ("honest truth", &["truth"]),
    ("however", &["but", "yet"]),
    ("if and when", &["if", "when"]),
    ("impacted", &["affected", "harmed", "changed"]),
    ("in a timely manner", &["on time"]),
    ("in accordance with", &["by", "under"]),
    ("in all likelihood", &["probably"]),
    ("in an effort to", &["to"]),
    ("in excess of", &["more than"]),
    ("in lieu of", &["instead"]),
    ("in light of the fact that", &["because"]),
    ("in order to", &["to"]),
    ("in regard to", &["about", "concerning", "on"]),
    ("in some instances", &["sometimes"]),
    ("in terms of", &["as", "for", "with"]),
    ("in the near future", &["soon"]),
    ("inception", &["start"]),
    ("incumbent upon", &["must"]),
    ("indication", &["sign"]),
    ("initiate", &["start"]),
    ("is applicable to", &["applies to"]),
    ("is authorized to", &["may"]),
    ("is responsible for", &["handles"]),
    ("it is essential", &["must", "need to"]),
    ("magnitude", &["size"]),
    ("methodology", &["method"]),
    ("necessitate", &["cause", "need"]),
    ("nevertheless", &["still", "besides", "even so"]),
    ("notwithstanding", &["in spite of", "still"]),
    ("null and void", &["null", "void"]),
    ("numerous", &["many"]),
    ("obligate", &["bind", "compel"]),
    ("optimum", &["best", "greatest", "most"]),
    ("owing to the fact that", &["because", "since"]),
    ("participate", &["take part"]),
    ("particulars", &["details"]),
    ("pertaining to", &["about", "of", "on"]),
    ("point in time", &["time", "point", "moment", "now"]),
    ("preclude", &["prevent"]),
    ("prior to", &["before"]),
    ("prioritize", &["rank", "focus on"]),
    ("procure", &["buy", "get"]),
    ("proficiency", &["skill"]),
    ("provided that", &["if"]),
    ("readily apparent", &["clear"]),
    ("refer back", &["refer"]),
    ("relocate", &["move"]),
    ("remainder", &["rest"]),
    ("remuneration", &["payment"]),
    ("reside", &["live"]),
    ("retain", &["keep"]),
    ("should you wish", &["if you want"]),
    ("solicit", &["ask for", "request"]),
    ("span across", &["span", "cross"]),
    ("strategize", &["plan"]),
    ("subsequent", &["later", "next", "after", "then"]),
    ("substantial", &["large", "much"]),
    ("successfully complete", &["complete", "pass"]),
    ("sufficient", &["enough"]),
    ("terminate", &["end", "stop"]),
    ("time period", &["time", "period"]),
    ("transmit", &["send"]),
    ("transpire", &["happen"]),
    ("until such time as", &["until"]),
    ("utilization", &["use"]),
    ("utilize", &["use"]),
    ("various different", &["various", "different"]),
    ("whether or not", &["whether"]),
    ("with respect to", &["on", "about"]),
    ("with the exception of", &["except for"]),
];

/// Adverbs that usually weaken the verb they modify.
const ADVERBS: &[&str] = &[
    "absolutely",
    "accidentally",
    "actually",
    "angrily",
    "anxiously",
    "apparently",
    "awkwardly",
    "badly",
    "barely",
    "boldly",
    "bravely",
    "briefly",
    "brightly",
    "briskly",
    "calmly",
    "carelessly",
    "certainly",
    "cheerfully",
    "clearly",
    "cleverly",
    "closely",
    "completely",
    "constantly",
    "continually",
    "correctly",
    "cruelly",
    "curiously",
    "deeply",
    "definitely",
    "deliberately",
    "desperately",
    "directly",
    "dramatically",
    "eagerly",
    "easily",
    "effectively",
    "enormously",
    "entirely",
    "especially",
    "essentially",
    "eventually",
    "exactly",
    "extremely",
    "fairly",
    "famously",
    "fiercely",
    "finally",
    "foolishly",
    "frankly",
    "frequently",
    "generally",
    "gently",
    "genuinely",
    "gladly",
    "greatly",
    "happily",
    "hardly",
    "heavily",
    "highly",
    "honestly",
    "hopefully",
    "hugely",
    "immediately",
    "incredibly",
    "instantly",
    "intensely",
    "ironically",
    "largely",
    "lazily",
    "literally",
    "loudly",
    "merely",
    "mostly",
    "naturally",
    "nearly",
    "nervously",
    "normally",
    "obviously",
    "occasionally",
    "openly",
    "particularly",
    "patiently",
    "perfectly",
    "politely",
    "practically",
    "precisely",
    "presumably",
    "probably",
    "promptly",
    "purely",
    "quickly",
    "quietly",
    "rapidly",
    "rarely",
    "really",
    "reasonably",
    "relatively",
    "reluctantly",
    "remarkably",
    "repeatedly",
    "roughly",
    "rudely",
    "sadly",
    "seemingly",
    "seriously",
    "sharply",
    "significantly",
    "silently",
    "simply",
    "sincerely",
    "slightly",
    "slowly",
    "smoothly",
    "softly",
    "specifically",
    "steadily",
    "strangely",
    "strictly",
    "strongly",
    "suddenly",
    "surely",
    "surprisingly",
    "swiftly",
    "terribly",
    "thankfully",
    "thoroughly",
    "totally",
    "truly",
    "typically",
    "ultimately",
    "unfortunately",
    "usually",
    "utterly",
    "virtually",
    "warmly",
    "wholly",
    "widely",
    "wildly",
    "wisely",
];

/// Hedging phrases.
const QUALIFIERS: &[&str] = &[
    "I believe",
    "I consider",
    "I don't believe",
    "I don't consider",
    "I don't feel",
    "I don't suggest",
    "I don't think",
    "I feel",
    "I hope to",
    "I might",
    "I suggest",
    "I think",
    "I was wondering",
    "I will try",
    "I wonder",
    "in my opinion",
    "is kind of",
    "is sort of",
    "just",
    "maybe",
    "perhaps",
    "possibly",
    "we believe",
    "we consider",
    "we don't believe",
    "we don't consider",
    "we don't feel",
    "we don't suggest",
    "we don't think",
    "we feel",
    "we hope to",
    "we might",
    "we suggest",
    "we think",
    "we were wondering",
    "we will try",
    "we wonder",
];

/// Forms of "to be" that can introduce a passive construction.
const PASSIVE_PRECURSORS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

static DEFAULT_WORD_LISTS: LazyLock<WordLists> = LazyLock::new(|| {
    WordLists::new(
        COMPLEX_WORDS
            .iter()
            .map(|(word, suggestions)| ComplexWord::new(*word, suggestions.iter().copied())),
        ADVERBS.iter().copied(),
        QUALIFIERS.iter().copied(),
        PASSIVE_PRECURSORS.iter().copied(),
    )
});

/// A complex word or phrase and the simpler alternatives to suggest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ComplexWord {
    /// The word or phrase to flag.
    pub word: String,
    /// Replacements, in the order they are suggested.
    pub suggestions: Vec<String>,
}

impl ComplexWord {
    /// Create an entry.
    pub fn new<S: Into<String>>(
        word: impl Into<String>,
        suggestions: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            word: word.into(),
            suggestions: suggestions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Word-list settings from the configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct WordListConfig {
    /// Start from empty lists instead of the built-in ones.
    pub replace_defaults: bool,
    /// Extra complex words with their suggestions.
    pub complex_words: Vec<ComplexWord>,
    /// Extra adverbs.
    pub adverbs: Vec<String>,
    /// Extra qualifiers.
    pub qualifiers: Vec<String>,
    /// Extra passive-voice precursor words.
    pub passive_precursors: Vec<String>,
    /// Words to remove from every list.
    pub ignore: Vec<String>,
}

/// The immutable lookup tables for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    complex_words: Vec<ComplexWord>,
    adverbs: Vec<String>,
    qualifiers: Vec<String>,
    passive_precursors: Vec<String>,
}

impl Default for WordLists {
    fn default() -> Self {
        DEFAULT_WORD_LISTS.clone()
    }
}

impl WordLists {
    /// Build word lists, dropping empty and repeated entries.
    pub fn new<A, Q, P>(
        complex_words: impl IntoIterator<Item = ComplexWord>,
        adverbs: impl IntoIterator<Item = A>,
        qualifiers: impl IntoIterator<Item = Q>,
        passive_precursors: impl IntoIterator<Item = P>,
    ) -> Self
    where
        A: Into<String>,
        Q: Into<String>,
        P: Into<String>,
    {
        let mut seen = HashSet::new();
        let complex_words = complex_words
            .into_iter()
            .filter(|entry| !entry.word.is_empty() && seen.insert(entry.word.clone()))
            .collect();

        Self {
            complex_words,
            adverbs: unique(adverbs),
            qualifiers: unique(qualifiers),
            passive_precursors: unique(passive_precursors),
        }
    }

    /// Lists with no entries at all.
    pub fn empty() -> Self {
        Self::new(
            Vec::new(),
            Vec::<String>::new(),
            Vec::<String>::new(),
            Vec::<String>::new(),
        )
    }

    /// Build the lists described by `config`.
    ///
    /// Configured entries are appended after the built-in ones (unless
    /// `replace_defaults` is set), then every `ignore`d word is removed. A
    /// configured complex word that already exists replaces its suggestions.
    pub fn from_config(config: &WordListConfig) -> Self {
        let base = if config.replace_defaults {
            Self::empty()
        } else {
            Self::default()
        };

        let mut complex_words = base.complex_words;
        for entry in &config.complex_words {
            match complex_words.iter_mut().find(|e| e.word == entry.word) {
                Some(existing) => existing.suggestions.clone_from(&entry.suggestions),
                None => complex_words.push(entry.clone()),
            }
        }

        let ignored: HashSet<&str> = config.ignore.iter().map(String::as_str).collect();
        let keep = |word: &String| !ignored.contains(word.as_str());

        let lists = Self::new(
            complex_words
                .into_iter()
                .filter(|entry| keep(&entry.word)),
            base.adverbs
                .into_iter()
                .chain(config.adverbs.iter().cloned())
                .filter(keep),
            base.qualifiers
                .into_iter()
                .chain(config.qualifiers.iter().cloned())
                .filter(keep),
            base.passive_precursors
                .into_iter()
                .chain(config.passive_precursors.iter().cloned())
                .filter(keep),
        );
        tracing::debug!(
            complex_words = lists.complex_words.len(),
            adverbs = lists.adverbs.len(),
            qualifiers = lists.qualifiers.len(),
            passive_precursors = lists.passive_precursors.len(),
            "word lists resolved"
        );
        lists
    }

    /// Complex words with their suggestions.
    pub fn complex_words(&self) -> &[ComplexWord] {
        &self.complex_words
    }

    /// Adverbs.
    pub fn adverbs(&self) -> &[String] {
        &self.adverbs
    }

    /// Qualifying words and phrases.
    pub fn qualifiers(&self) -> &[String] {
        &self.qualifiers
    }

    /// Passive-voice precursor words.
    pub fn passive_precursors(&self) -> &[String] {
        &self.passive_precursors
    }
}

fn unique<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(Into::into)
        .filter(|w: &String| !w.is_empty() && seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_populated() {
        let lists = WordLists::default();
        assert!(!lists.complex_words().is_empty());
        assert!(lists.adverbs().iter().any(|w| w == "unfortunately"));
        assert!(lists.qualifiers().iter().any(|w| w == "perhaps"));
        assert!(lists.passive_precursors().iter().any(|w| w == "be"));
    }

    #[test]
    fn default_complex_words_keep_table_order() {
        let lists = WordLists::default();
        let first = &lists.complex_words()[0];
        assert_eq!(first.word, "a number of");
        assert_eq!(first.suggestions, vec!["many", "some"]);
    }

    #[test]
    fn default_tables_have_no_duplicates() {
        assert_eq!(WordLists::default().complex_words().len(), COMPLEX_WORDS.len());
        assert_eq!(WordLists::default().adverbs().len(), ADVERBS.len());
        assert_eq!(WordLists::default().qualifiers().len(), QUALIFIERS.len());
    }

    #[test]
    fn new_drops_empty_and_repeated_entries() {
        let lists = WordLists::new(
            vec![
                ComplexWord::new("utilize", ["use"]),
                ComplexWord::new("", ["nothing"]),
                ComplexWord::new("utilize", ["employ"]),
            ],
            ["really", "", "really"],
            Vec::<String>::new(),
            ["was"],
        );
        assert_eq!(lists.complex_words().len(), 1);
        assert_eq!(lists.complex_words()[0].suggestions, vec!["use"]);
        assert_eq!(lists.adverbs(), ["really"]);
    }

    #[test]
    fn config_extends_defaults() {
        let config = WordListConfig {
            adverbs: vec!["groovily".to_string()],
            complex_words: vec![ComplexWord::new("leverage", ["use"])],
            ..Default::default()
        };
        let lists = WordLists::from_config(&config);
        assert!(lists.adverbs().iter().any(|w| w == "unfortunately"));
        assert_eq!(lists.adverbs().last().map(String::as_str), Some("groovily"));
        assert_eq!(
            lists.complex_words().last().map(|c| c.word.as_str()),
            Some("leverage")
        );
    }

    #[test]
    fn config_overrides_suggestions_in_place() {
        let config = WordListConfig {
            complex_words: vec![ComplexWord::new("a number of", ["several"])],
            ..Default::default()
        };
        let lists = WordLists::from_config(&config);
        assert_eq!(lists.complex_words()[0].word, "a number of");
        assert_eq!(lists.complex_words()[0].suggestions, vec!["several"]);
    }

    #[test]
    fn config_replaces_and_ignores() {
        let config = WordListConfig {
            replace_defaults: true,
            qualifiers: vec!["arguably".to_string(), "maybe".to_string()],
            ignore: vec!["maybe".to_string()],
            ..Default::default()
        };
        let lists = WordLists::from_config(&config);
        assert!(lists.complex_words().is_empty());
        assert!(lists.adverbs().is_empty());
        assert_eq!(lists.qualifiers(), ["arguably"]);
        assert!(lists.passive_precursors().is_empty());
    }

    #[test]
    fn ignore_removes_default_entries() {
        let config = WordListConfig {
            ignore: vec!["however".to_string(), "just".to_string()],
            ..Default::default()
        };
        let lists = WordLists::from_config(&config);
        assert!(lists.complex_words().iter().all(|c| c.word != "however"));
        assert!(lists.qualifiers().iter().all(|w| w != "just"));
    }
}
