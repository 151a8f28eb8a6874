//! Word filtering module
//!
//! Each stage takes the current candidate list and returns the survivors,
//! preserving dictionary order. Stages only ever remove words.

use ahash::RandomState;
use hashbrown::HashSet;

use crate::attempt::Attempt;
use crate::report::FilterStats;
use crate::WORD_LENGTH;

/// Letters known to be absent from the solution
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    letters: HashSet<char, RandomState>,
}

impl ExclusionSet {
    /// Build from the raw option value. Letters are case-folded and
    /// whitespace is ignored; `None` or `""` excludes nothing.
    pub fn new(raw: Option<&str>) -> Self {
        let letters = raw
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self { letters }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// True if any character of `word` is excluded
    #[inline]
    pub fn rejects(&self, word: &str) -> bool {
        word.chars().any(|c| self.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Excluded letters, sorted
    pub fn letters(&self) -> Vec<char> {
        let mut v: Vec<_> = self.letters.iter().copied().collect();
        v.sort_unstable();
        v
    }
}

/// Check that a dictionary entry is exactly five lowercase ASCII letters
#[inline]
pub fn is_five_letter_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Keep only five-letter lowercase entries
pub fn five_letter_words<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines
        .into_iter()
        .map(Into::into)
        .filter(|w| is_five_letter_word(w))
        .collect()
}

/// Remove words containing any excluded letter
pub fn exclude_letters(words: Vec<String>, exclusions: &ExclusionSet) -> Vec<String> {
    if exclusions.is_empty() {
        return words;
    }

    words.into_iter().filter(|w| !exclusions.rejects(w)).collect()
}

/// Check a word against the fixed letters of a direct-hit pattern
#[inline]
pub fn matches_direct_hits(word: &str, pattern: &[Option<u8>; WORD_LENGTH]) -> bool {
    let bytes = word.as_bytes();
    bytes.len() == WORD_LENGTH
        && pattern
            .iter()
            .zip(bytes)
            .all(|(fixed, b)| fixed.map_or(true, |letter| letter == *b))
}

/// Keep words that agree with every direct hit of `attempt`
pub fn filter_direct_hits(words: Vec<String>, attempt: &Attempt) -> Vec<String> {
    let pattern = attempt.direct_hits();
    if pattern.iter().all(Option::is_none) {
        return words;
    }

    words
        .into_iter()
        .filter(|w| matches_direct_hits(w, pattern))
        .collect()
}

/// Remove words that place `letter` at `position`
pub fn exclude_at_position(words: Vec<String>, position: usize, letter: u8) -> Vec<String> {
    words
        .into_iter()
        .filter(|w| w.as_bytes().get(position) != Some(&letter))
        .collect()
}

/// Apply every misplaced-letter constraint of `attempt`
pub fn filter_misplaced(words: Vec<String>, attempt: &Attempt) -> Vec<String> {
    attempt
        .misplaced()
        .iter()
        .fold(words, |acc, &(position, letter)| {
            exclude_at_position(acc, position, letter)
        })
}

/// The full set of constraints gathered so far in a game
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub exclusions: ExclusionSet,
    pub attempts: Vec<Attempt>,
}

impl Constraints {
    pub fn new(exclusions: ExclusionSet, attempts: Vec<Attempt>) -> Self {
        Self {
            exclusions,
            attempts,
        }
    }

    /// Letters that are both excluded and reported present by an attempt.
    /// Any such letter guarantees an empty result.
    pub fn contradictions(&self) -> Vec<char> {
        let mut found: Vec<char> = self
            .attempts
            .iter()
            .flat_map(Attempt::known_letters)
            .filter(|&c| self.exclusions.contains(c))
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Run the exclusion, direct-hit and misplaced-letter stages in order
    pub fn apply(&self, words: Vec<String>) -> Vec<String> {
        self.run(words, None)
    }

    /// Same as [`Constraints::apply`], recording survivor counts per stage
    pub fn apply_with_stats(&self, words: Vec<String>, stats: &mut FilterStats) -> Vec<String> {
        self.run(words, Some(stats))
    }

    fn run(&self, words: Vec<String>, mut stats: Option<&mut FilterStats>) -> Vec<String> {
        for letter in self.contradictions() {
            log::warn!(
                "Letter '{}' is excluded but reported present by an attempt; no word can match",
                letter
            );
        }

        let words = exclude_letters(words, &self.exclusions);
        log::debug!("{} candidates after exclusions {:?}", words.len(), self.exclusions.letters());
        if let Some(stats) = stats.as_deref_mut() {
            stats.after_exclusions = words.len();
        }

        let words = self.attempts.iter().fold(words, |acc, attempt| {
            let acc = filter_direct_hits(acc, attempt);
            log::debug!("{} candidates after direct hits of {}", acc.len(), attempt);
            acc
        });
        if let Some(stats) = stats.as_deref_mut() {
            stats.after_direct_hits = words.len();
        }

        let words = self.attempts.iter().fold(words, |acc, attempt| {
            let acc = filter_misplaced(acc, attempt);
            log::debug!("{} candidates after misplaced letters of {}", acc.len(), attempt);
            acc
        });
        if let Some(stats) = stats {
            stats.after_misplaced = words.len();
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn constraints(exclusions: Option<&str>, attempts: &[&str]) -> Constraints {
        Constraints::new(
            ExclusionSet::new(exclusions),
            attempts.iter().map(|a| Attempt::parse(a).unwrap()).collect(),
        )
    }

    fn sample_dictionary() -> Vec<String> {
        words(&[
            "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast",
            "beast", "spore", "stone", "scone", "stove", "plaza", "fuzzy", "proxy", "waxed",
        ])
    }

    #[test]
    fn test_five_letter_words() {
        let raw = vec!["apple", "Apple", "apples", "app", "ap-le", "caf\u{e9}s", "zebra", ""];
        assert_eq!(five_letter_words(raw), words(&["apple", "zebra"]));
    }

    #[test]
    fn test_exclusion_filter() {
        let dict = words(&["plaza", "fuzzy", "proxy", "stone", "waxed", "crane"]);
        let result = exclude_letters(dict, &ExclusionSet::new(Some("xyz")));
        assert_eq!(result, words(&["stone", "crane"]));
    }

    #[test]
    fn test_exclusion_case_folded() {
        let set = ExclusionSet::new(Some("X Y z"));
        assert_eq!(set.letters(), vec!['x', 'y', 'z']);
        assert!(set.rejects("proxy"));
    }

    #[test]
    fn test_empty_exclusions_is_identity() {
        let dict = sample_dictionary();
        assert_eq!(exclude_letters(dict.clone(), &ExclusionSet::new(Some(""))), dict);
        assert_eq!(exclude_letters(dict.clone(), &ExclusionSet::new(None)), dict);

        let with_empty = constraints(Some(""), &["ST.NE"]).apply(dict.clone());
        let without = constraints(None, &["ST.NE"]).apply(dict);
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_direct_hits_scenario() {
        let dict = words(&["spore", "stone", "scone", "stove"]);
        let result = constraints(None, &["ST.NE"]).apply(dict);
        assert_eq!(result, words(&["stone"]));
    }

    #[test]
    fn test_direct_hit_matching_is_anchored() {
        let pattern = [Some(b's'), None, None, None, None];
        assert!(matches_direct_hits("stone", &pattern));
        assert!(!matches_direct_hits("aston", &pattern));
        assert!(!matches_direct_hits("s", &pattern));
    }

    #[test]
    fn test_misplaced_excludes_flagged_position_only() {
        let dict = words(&["black", "abbey", "crane", "ultra"]);
        let result = constraints(None, &["..a.."]).apply(dict);
        // 'a' at position 2 is removed; 'a' elsewhere stays
        assert_eq!(result, words(&["abbey", "ultra"]));
    }

    #[test]
    fn test_misplaced_does_not_require_letter_elsewhere() {
        let dict = words(&["stone", "crane"]);
        let result = constraints(None, &["..a.."]).apply(dict);
        assert_eq!(result, words(&["stone"]));
    }

    #[test]
    fn test_no_attempts_only_exclusions() {
        let raw = vec!["fuzzy", "Crane", "stone", "waxed", "toast", "toasts"];
        let result = constraints(Some("xyz"), &[]).apply(five_letter_words(raw));
        assert_eq!(result, words(&["stone", "toast"]));
    }

    #[test]
    fn test_contradiction_gives_empty_result() {
        let c = constraints(Some("s"), &["S...."]);
        assert_eq!(c.contradictions(), vec!['s']);
        assert!(c.apply(sample_dictionary()).is_empty());
    }

    #[test]
    fn test_output_is_subsequence_of_input() {
        let dict = sample_dictionary();
        let result = constraints(Some("p"), &["..a..", "c...E"]).apply(dict.clone());

        let mut remaining = dict.iter();
        for word in &result {
            assert!(remaining.any(|w| w == word), "{} out of order or invented", word);
        }
    }

    #[test]
    fn test_idempotence() {
        let c = constraints(Some("bo"), &["cRa.e", "..A.E"]);
        let once = c.apply(sample_dictionary());
        let twice = c.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_invariance() {
        let forward = constraints(Some("o"), &["s.a..", "..A.E", "t...e"]);
        let backward = constraints(Some("o"), &["t...e", "..A.E", "s.a.."]);
        assert_eq!(
            forward.apply(sample_dictionary()),
            backward.apply(sample_dictionary())
        );
    }

    #[test]
    fn test_apply_with_stats() {
        let mut stats = FilterStats::new();
        let result =
            constraints(Some("xyz"), &["ST.NE"]).apply_with_stats(sample_dictionary(), &mut stats);

        assert_eq!(result, words(&["stone"]));
        assert_eq!(stats.after_exclusions, 14);
        assert_eq!(stats.after_direct_hits, 1);
        assert_eq!(stats.after_misplaced, 1);
    }
}
