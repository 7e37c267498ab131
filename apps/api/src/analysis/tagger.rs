//! Skill tagging — pulls the significant terms (noun-like words and short noun
//! phrases) out of résumé text.
//!
//! Pluggable, trait-based like the rest of the analysis pipeline: `AppState`
//! holds an `Arc<dyn SkillTagger>`, `LexicalTagger` by default.

use std::collections::BTreeSet;

/// Extracts the set of candidate skill terms from free text.
///
/// Implementations must be deterministic: the same text always yields the same
/// set. Terms are case-sensitive.
pub trait SkillTagger: Send + Sync {
    fn significant_terms(&self, text: &str) -> BTreeSet<String>;

    /// Short label for logs and API responses.
    fn name(&self) -> &str;
}

/// Longest run of adjacent significant words emitted as a single phrase.
const MAX_PHRASE_WORDS: usize = 3;

/// Closed-class words that are never skills: articles, pronouns, prepositions,
/// conjunctions, auxiliaries and common determiners.
const CLOSED_CLASS: &[&str] = &[
    "a", "about", "above", "across", "after", "against", "all", "also", "am", "among", "an",
    "and", "any", "are", "as", "at", "be", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "could", "did", "do", "does", "doing", "during", "each",
    "either", "etc", "every", "few", "for", "from", "had", "has", "have", "having", "he",
    "her", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "may", "me", "might", "more", "most", "must", "my", "myself", "neither", "no", "nor",
    "not", "of", "off", "on", "once", "only", "onto", "or", "other", "our", "ours", "out",
    "over", "own", "per", "same", "shall", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "toward", "towards", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "were", "what", "when", "where", "whether", "which",
    "while", "who", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours",
];

/// Lowercase `-ly` words that are nouns, not adverbs.
const LY_NOUNS: &[&str] = &[
    "anomaly", "assembly", "butterfly", "family", "homily", "monopoly", "rally", "reply",
    "supply",
];

/// Rule-based tagger.
///
/// A word is significant when it contains a letter, is not a closed-class word
/// and is not a `-ly` adverb. Besides single words it emits 2- and 3-word
/// phrases of adjacent significant words, so catalog entries such as
/// "Machine Learning" can match. Punctuation, line breaks and insignificant
/// words all end a phrase.
#[derive(Debug, Clone, Default)]
pub struct LexicalTagger;

impl SkillTagger for LexicalTagger {
    fn significant_terms(&self, text: &str) -> BTreeSet<String> {
        let mut terms = BTreeSet::new();

        for line in text.lines() {
            let mut run: Vec<&str> = Vec::new();

            for raw in line.split_whitespace() {
                let word = trim_word(raw);
                let leading_break = !raw.starts_with(word);
                let trailing_break = !raw.ends_with(word);

                if leading_break {
                    flush_phrases(&mut run, &mut terms);
                }

                if is_significant(word) {
                    terms.insert(word.to_string());
                    run.push(word);
                } else {
                    flush_phrases(&mut run, &mut terms);
                }

                if trailing_break {
                    flush_phrases(&mut run, &mut terms);
                }
            }

            flush_phrases(&mut run, &mut terms);
        }

        terms
    }

    fn name(&self) -> &str {
        "lexical"
    }
}

/// Strips surrounding punctuation while keeping characters that belong to
/// skill names: internal dots and slashes (`Node.js`, `UI/UX`) and trailing
/// `+`/`#` (`C++`, `C#`).
fn trim_word(raw: &str) -> &str {
    let start_trimmed = raw.trim_start_matches(|c: char| !c.is_alphanumeric());
    start_trimmed.trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
}

fn is_significant(word: &str) -> bool {
    if !word.chars().any(char::is_alphabetic) {
        return false;
    }

    let lower = word.to_lowercase();
    if CLOSED_CLASS.contains(&lower.as_str()) {
        return false;
    }

    let is_adverb = word == lower
        && word.len() > 4
        && word.ends_with("ly")
        && !LY_NOUNS.contains(&word);
    !is_adverb
}

/// Emits every 2..=MAX_PHRASE_WORDS window of the current run, then clears it.
fn flush_phrases(run: &mut Vec<&str>, terms: &mut BTreeSet<String>) {
    for size in 2..=MAX_PHRASE_WORDS {
        for window in run.windows(size) {
            terms.insert(window.join(" "));
        }
    }
    run.clear();
}
