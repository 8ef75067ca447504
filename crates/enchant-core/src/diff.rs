//! Character pairing between an old and a new string

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::VecDeque;
use std::ops::Index;

/// Cumulative left-to-right advance offsets, one per character
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OffsetTable {
    offsets: Vec<f32>,
    total_width: f32,
}

impl OffsetTable {
    /// Prefix sums of `width` over the characters of `text`, starting at 0
    pub fn measure<F>(text: &str, mut width: F) -> Self
    where
        F: FnMut(char) -> f32,
    {
        let mut offsets = Vec::with_capacity(text.len());
        let mut accumulated = 0.0;
        for c in text.chars() {
            offsets.push(accumulated);
            accumulated += width(c);
        }
        Self {
            offsets,
            total_width: accumulated,
        }
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.offsets.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Sum of every advance in the string
    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.offsets
    }
}

impl Index<usize> for OffsetTable {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.offsets[index]
    }
}

/// A new-string character reusing a glyph from the old string
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftingChar {
    pub character: char,
    /// Character index in the old string the glyph is taken from
    pub old_index: usize,
    /// Character index in the new string the glyph moves to
    pub new_index: usize,
    pub start_offset_x: f32,
    pub end_offset_x: f32,
}

impl ShiftingChar {
    /// Horizontal distance travelled over the whole transition
    pub fn distance(&self) -> f32 {
        self.end_offset_x - self.start_offset_x
    }
}

/// Result of pairing two strings. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionPlan {
    old_string: String,
    new_string: String,
    /// New-string indices with no glyph to reuse
    appearing: Vec<usize>,
    /// Reused glyphs in new-string order
    shifting: Vec<ShiftingChar>,
    old_offsets: OffsetTable,
    new_offsets: OffsetTable,
    #[serde(skip)]
    new_chars: Vec<char>,
}

impl TransitionPlan {
    pub fn old_string(&self) -> &str {
        &self.old_string
    }

    pub fn new_string(&self) -> &str {
        &self.new_string
    }

    pub fn appearing(&self) -> &[usize] {
        &self.appearing
    }

    pub fn shifting(&self) -> &[ShiftingChar] {
        &self.shifting
    }

    pub fn old_offsets(&self) -> &OffsetTable {
        &self.old_offsets
    }

    pub fn new_offsets(&self) -> &OffsetTable {
        &self.new_offsets
    }

    /// Appearing glyphs with their resting offset in the new string
    pub fn appearing_chars(&self) -> impl Iterator<Item = (char, f32)> + '_ {
        self.appearing
            .iter()
            .map(|&index| (self.new_chars[index], self.new_offsets[index]))
    }

    /// Width able to hold both strings while the transition runs
    pub fn bounding_width(&self) -> f32 {
        self.old_offsets.total_width().max(self.new_offsets.total_width())
    }

    /// True when nothing would be drawn (empty new string)
    pub fn is_empty(&self) -> bool {
        self.appearing.is_empty() && self.shifting.is_empty()
    }
}

/// Pair every character of `new` with the earliest unused identical
/// character of `old`.
///
/// New characters are visited left to right; a match consumes the old
/// occurrence so it can never be paired twice. Characters left without a
/// match are reported as appearing.
pub fn compute_transition<F>(old: &str, new: &str, mut width: F) -> TransitionPlan
where
    F: FnMut(char) -> f32,
{
    let old_offsets = OffsetTable::measure(old, &mut width);
    let new_offsets = OffsetTable::measure(new, &mut width);

    // Per-character queues of unused old indices, in ascending order
    let mut available: FxHashMap<char, VecDeque<usize>> = FxHashMap::default();
    for (index, c) in old.chars().enumerate() {
        available.entry(c).or_default().push_back(index);
    }

    let new_chars: Vec<char> = new.chars().collect();
    let mut appearing = Vec::new();
    let mut shifting = Vec::new();

    for (new_index, &c) in new_chars.iter().enumerate() {
        match available.get_mut(&c).and_then(VecDeque::pop_front) {
            Some(old_index) => shifting.push(ShiftingChar {
                character: c,
                old_index,
                new_index,
                start_offset_x: old_offsets[old_index],
                end_offset_x: new_offsets[new_index],
            }),
            None => appearing.push(new_index),
        }
    }

    tracing::trace!(
        appearing = appearing.len(),
        shifting = shifting.len(),
        "computed transition {:?} -> {:?}",
        old,
        new
    );

    TransitionPlan {
        old_string: old.to_string(),
        new_string: new.to_string(),
        appearing,
        shifting,
        old_offsets,
        new_offsets,
        new_chars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(_: char) -> f32 {
        1.0
    }

    fn char_count(s: &str, c: char) -> usize {
        s.chars().filter(|&x| x == c).count()
    }

    #[test]
    fn test_offset_table() {
        let table = OffsetTable::measure("abc", |c| if c == 'b' { 2.0 } else { 1.0 });
        assert_eq!(table.as_slice(), &[0.0, 1.0, 3.0]);
        assert_eq!(table.total_width(), 4.0);
        assert_eq!(table.get(3), None);

        let empty = OffsetTable::measure("", unit);
        assert!(empty.is_empty());
        assert_eq!(empty.total_width(), 0.0);
    }

    #[test]
    fn test_partition_covers_new_string() {
        let pairs = [
            ("", ""),
            ("", "abc"),
            ("abc", ""),
            ("January", "February"),
            ("September", "October"),
            ("aaaa", "aa"),
            ("aa", "aaaa"),
            ("hello world", "world hello"),
            ("日本語", "語本"),
        ];
        for (old, new) in pairs {
            let plan = compute_transition(old, new, unit);
            assert_eq!(
                plan.appearing().len() + plan.shifting().len(),
                new.chars().count(),
                "{old:?} -> {new:?}"
            );
        }
    }

    #[test]
    fn test_shifting_never_double_matches() {
        let pairs = [
            ("bb", "bbb"),
            ("banana", "ananas"),
            ("December", "November"),
            ("mississippi", "misspell"),
        ];
        for (old, new) in pairs {
            let plan = compute_transition(old, new, unit);

            let mut used: Vec<usize> = plan.shifting().iter().map(|s| s.old_index).collect();
            used.sort_unstable();
            used.dedup();
            assert_eq!(used.len(), plan.shifting().len(), "{old:?} -> {new:?}");

            for s in plan.shifting() {
                let shifted = plan
                    .shifting()
                    .iter()
                    .filter(|other| other.character == s.character)
                    .count();
                let bound = char_count(old, s.character).min(char_count(new, s.character));
                assert!(shifted <= bound);
                assert_eq!(old.chars().nth(s.old_index), Some(s.character));
                assert_eq!(new.chars().nth(s.new_index), Some(s.character));
            }
        }
    }

    #[test]
    fn test_earliest_unused_occurrence_wins() {
        let plan = compute_transition("aab", "aba", unit);
        assert!(plan.appearing().is_empty());

        let pairs: Vec<(usize, usize)> = plan
            .shifting()
            .iter()
            .map(|s| (s.new_index, s.old_index))
            .collect();
        assert_eq!(pairs, vec![(0, 0), (1, 2), (2, 1)]);

        let s = plan.shifting();
        assert_eq!((s[1].start_offset_x, s[1].end_offset_x), (2.0, 1.0));
        assert_eq!((s[2].start_offset_x, s[2].end_offset_x), (1.0, 2.0));
    }

    #[test]
    fn test_repeated_letters_extra_is_appearing() {
        let plan = compute_transition("bb", "bbb", unit);
        assert_eq!(plan.appearing(), &[2]);
        let old_indices: Vec<usize> = plan.shifting().iter().map(|s| s.old_index).collect();
        assert_eq!(old_indices, vec![0, 1]);
        assert!(plan.shifting().iter().all(|s| s.distance() == 0.0));
    }

    #[test]
    fn test_no_shared_characters() {
        let plan = compute_transition("May", "June", unit);
        assert_eq!(plan.appearing(), &[0, 1, 2, 3]);
        assert!(plan.shifting().is_empty());

        let chars: Vec<(char, f32)> = plan.appearing_chars().collect();
        assert_eq!(chars, vec![('J', 0.0), ('u', 1.0), ('n', 2.0), ('e', 3.0)]);
    }

    #[test]
    fn test_march_to_april() {
        let plan = compute_transition("March", "April", unit);
        assert!(!plan.shifting().is_empty());

        let r = plan
            .shifting()
            .iter()
            .find(|s| s.character == 'r')
            .expect("'r' is shared");
        assert_eq!((r.old_index, r.new_index), (2, 2));
        assert_eq!(plan.appearing(), &[0, 1, 3, 4]);
    }

    #[test]
    fn test_empty_strings() {
        let plan = compute_transition("", "abc", unit);
        assert_eq!(plan.appearing(), &[0, 1, 2]);
        assert!(plan.shifting().is_empty());

        let plan = compute_transition("abc", "", unit);
        assert!(plan.is_empty());
        assert_eq!(plan.bounding_width(), 3.0);
    }

    #[test]
    fn test_matching_ignores_proximity() {
        // The earliest 'a' travels even though a closer one exists
        let plan = compute_transition("a----a", "-----a", unit);
        let a = plan.shifting().iter().find(|s| s.character == 'a').unwrap();
        assert_eq!(a.old_index, 0);
        assert_eq!((a.start_offset_x, a.end_offset_x), (0.0, 5.0));
    }

    #[test]
    fn test_offsets_use_measured_widths() {
        let width = |c: char| if c == 'W' { 3.0 } else { 1.0 };
        let plan = compute_transition("Wa", "aW", width);
        let s = plan.shifting();
        assert_eq!(s[0].character, 'a');
        assert_eq!((s[0].start_offset_x, s[0].end_offset_x), (3.0, 0.0));
        assert_eq!(s[1].character, 'W');
        assert_eq!((s[1].start_offset_x, s[1].end_offset_x), (0.0, 1.0));
        assert_eq!(plan.bounding_width(), 4.0);
    }

    #[test]
    fn test_plan_serializes() {
        let plan = compute_transition("ab", "ba", unit);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["old_string"], "ab");
        assert_eq!(json["shifting"].as_array().unwrap().len(), 2);
        assert!(json.get("new_chars").is_none());
    }
}
