//! Rule-based English lemmatization with a lightweight part-of-speech tagger.
//!
//! Tags follow the Penn Treebank tag set. Each tag is mapped to one of the
//! four WordNet parts of speech, and every word is reduced with the
//! morphological detachment rules for that part of speech, after consulting
//! a table of irregular forms.

use std::{collections::HashMap, sync::LazyLock};

/// WordNet parts of speech used to pick lemmatization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("phenomena", "phenomenon"),
    ("criteria", "criterion"),
    ("series", "series"),
    ("species", "species"),
    ("news", "news"),
    ("lens", "lens"),
    ("lenses", "lens"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("atlases", "atlas"),
    ("aliases", "alias"),
    ("biases", "bias"),
    ("canvases", "canvas"),
    ("bonuses", "bonus"),
    ("campuses", "campus"),
    ("viruses", "virus"),
    ("statuses", "status"),
    ("pluses", "plus"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("saw", "see"),
    ("seen", "see"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("said", "say"),
    ("wrote", "write"),
    ("written", "write"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("began", "begin"),
    ("begun", "begin"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("built", "build"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("felt", "feel"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("held", "hold"),
    ("kept", "keep"),
    ("left", "leave"),
    ("lost", "lose"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("sat", "sit"),
    ("sent", "send"),
    ("slept", "sleep"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("swam", "swim"),
    ("taught", "teach"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("understood", "understand"),
    ("won", "win"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("led", "lead"),
    ("broke", "break"),
    ("broken", "break"),
    ("ridden", "ride"),
    ("rode", "ride"),
    ("shook", "shake"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("died", "die"),
    ("dying", "die"),
    ("lied", "lie"),
    ("lying", "lie"),
    ("tied", "tie"),
    ("tying", "tie"),
    ("vied", "vie"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
    ("farthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[("better", "well"), ("best", "well")];

/// Closed-class words and function verbs with a fixed tag.
const LEXICON: &[(&str, &str)] = &[
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("every", "DT"),
    ("each", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("about", "IN"),
    ("against", "IN"),
    ("between", "IN"),
    ("into", "IN"),
    ("through", "IN"),
    ("during", "IN"),
    ("before", "IN"),
    ("after", "IN"),
    ("above", "IN"),
    ("below", "IN"),
    ("from", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("than", "IN"),
    ("as", "IN"),
    ("if", "IN"),
    ("because", "IN"),
    ("while", "IN"),
    ("until", "IN"),
    ("without", "IN"),
    ("up", "RP"),
    ("down", "RP"),
    ("out", "RP"),
    ("off", "RP"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("to", "TO"),
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("i", "PRP"),
    ("me", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("who", "WP"),
    ("what", "WP"),
    ("which", "WDT"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("not", "RB"),
    ("very", "RB"),
    ("also", "RB"),
    ("too", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("here", "RB"),
    ("there", "RB"),
    ("now", "RB"),
    ("then", "RB"),
    ("just", "RB"),
    ("again", "RB"),
    ("already", "RB"),
    ("soon", "RB"),
    ("well", "RB"),
    ("more", "JJR"),
    ("most", "JJS"),
    ("less", "JJR"),
    ("least", "JJS"),
    ("better", "JJR"),
    ("worse", "JJR"),
    ("best", "JJS"),
    ("worst", "JJS"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("doing", "VBG"),
    ("hundred", "CD"),
    ("thousand", "CD"),
    ("million", "CD"),
];

/// Common adjectives without a recognizable suffix.
const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "big", "small", "fast", "slow", "quick", "lazy", "brown", "red",
    "green", "blue", "black", "white", "high", "low", "large", "long", "short", "great", "little",
    "own", "other", "same", "different", "important", "easy", "hard", "simple", "free", "open",
    "full", "hot", "cold", "true", "false", "young", "happy", "early", "late", "real", "main",
];

/// Words ending in "ly" that are not adverbs.
const NON_ADVERBS_LY: &[&str] = &[
    "family", "supply", "reply", "apply", "rely", "ally", "fly", "july", "italy", "assembly",
    "early", "friendly", "likely", "daily", "ugly", "holy", "belly", "jelly", "only",
];

/// Base adjectives that look like comparatives or superlatives.
const NON_COMPARATIVES: &[&str] = &[
    "other", "clever", "proper", "bitter", "silver", "tender", "eager", "super", "inner",
    "outer", "upper", "former", "latter", "sober", "honest", "modest", "earnest",
];

/// Base forms ending in "ie", whose inflections end in "ies" or "ied".
const IE_WORDS: &[&str] = &[
    "movie", "cookie", "zombie", "calorie", "rookie", "selfie", "hippie", "brownie", "genie",
    "prairie", "auntie", "goalie", "hoodie", "newbie", "smoothie", "sweetie", "veggie", "freebie",
    "birdie", "pixie", "cutie", "magpie", "necktie", "lingerie", "untie", "belie", "underlie",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ical", "ish"];

type FormMap = HashMap<&'static str, &'static str>;

fn pairs_map(pairs: &'static [(&'static str, &'static str)]) -> FormMap {
    pairs.iter().copied().collect()
}

static NOUN_EXC: LazyLock<FormMap> = LazyLock::new(|| pairs_map(NOUN_EXCEPTIONS));
static VERB_EXC: LazyLock<FormMap> = LazyLock::new(|| pairs_map(VERB_EXCEPTIONS));
static ADJ_EXC: LazyLock<FormMap> = LazyLock::new(|| pairs_map(ADJECTIVE_EXCEPTIONS));
static ADV_EXC: LazyLock<FormMap> = LazyLock::new(|| pairs_map(ADVERB_EXCEPTIONS));
static LEXICON_MAP: LazyLock<FormMap> = LazyLock::new(|| pairs_map(LEXICON));

/// Maps a Penn Treebank tag to a WordNet part of speech, defaulting to noun.
pub fn wordnet_pos(tag: &str) -> PartOfSpeech {
    match tag.as_bytes().first() {
        Some(b'J') => PartOfSpeech::Adjective,
        Some(b'V') => PartOfSpeech::Verb,
        Some(b'N') => PartOfSpeech::Noun,
        Some(b'R') => PartOfSpeech::Adverb,
        _ => PartOfSpeech::Noun,
    }
}

/// Tags every word with a Penn Treebank part-of-speech tag.
///
/// The tagger looks at the word itself and at the tag of the previous word,
/// so the same word can be tagged differently depending on its context
/// ("the building" vs "they are building").
pub fn pos_tag<'a>(words: &[&'a str]) -> Vec<(&'a str, &'static str)> {
    let mut tagged: Vec<(&'a str, &'static str)> = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        let prev = tagged.last().map(|(_, tag)| *tag);
        let next = words.get(i + 1).map(|w| w.to_lowercase());
        tagged.push((*word, tag_word(&lower, prev, next.as_deref())));
    }
    tagged
}

fn tag_word(word: &str, prev: Option<&str>, next: Option<&str>) -> &'static str {
    if let Some(tag) = LEXICON_MAP.get(word) {
        return *tag;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return "CD";
    }

    let nominal_context = matches!(prev, Some("DT" | "PRP$" | "JJ" | "JJR" | "JJS" | "CD"));
    if matches!(prev, Some("MD" | "TO")) {
        return "VB";
    }
    if ADJECTIVES.contains(&word) {
        return "JJ";
    }
    if VERB_EXC.contains_key(word) && !nominal_context {
        return "VBD";
    }

    let len = word.len();
    if word.ends_with("ly") && len > 4 && !NON_ADVERBS_LY.contains(&word) {
        return "RB";
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| word.ends_with(suffix) && len > suffix.len() + 2)
    {
        return "JJ";
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if stem.len() >= 2 && has_vowel(stem) {
            return if nominal_context { "NN" } else { "VBG" };
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.len() >= 2 && has_vowel(stem) && !word.ends_with("eed") {
            return if nominal_context { "JJ" } else { "VBD" };
        }
    }
    if word.ends_with("est") && len > 5 && nominal_context {
        return "JJS";
    }
    if word.ends_with("er") && len > 4 && next == Some("than") {
        return "JJR";
    }
    if matches!(prev, Some("PRP")) {
        return if word.ends_with('s') { "VBZ" } else { "VBP" };
    }
    if word.ends_with('s') && !has_singular_s_ending(word) {
        if matches!(prev, Some("NN")) {
            return "VBZ";
        }
        return "NNS";
    }
    "NN"
}

/// Reduces a word to its lowercase base form for the given part of speech.
pub fn lemmatize_word(word: &str, pos: PartOfSpeech) -> String {
    let word = word.to_lowercase();
    let exceptions = match pos {
        PartOfSpeech::Noun => &NOUN_EXC,
        PartOfSpeech::Verb => &VERB_EXC,
        PartOfSpeech::Adjective => &ADJ_EXC,
        PartOfSpeech::Adverb => &ADV_EXC,
    };
    if let Some(base) = exceptions.get(word.as_str()) {
        return base.to_string();
    }
    if !word.is_ascii() || word.len() < 3 {
        return word;
    }

    let lemma = match pos {
        PartOfSpeech::Noun => lemmatize_noun(&word),
        PartOfSpeech::Verb => lemmatize_verb(&word),
        PartOfSpeech::Adjective => lemmatize_adjective(&word),
        PartOfSpeech::Adverb => None,
    };
    lemma.unwrap_or(word)
}

/// Lemmatizes whitespace separated text using part-of-speech tags.
pub fn lemmatize(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    pos_tag(&words)
        .into_iter()
        .map(|(word, tag)| lemmatize_word(word, wordnet_pos(tag)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lemmatizes whitespace separated text treating every word as a noun.
pub fn lemmatize_nouns(text: &str) -> String {
    text.split_whitespace()
        .map(|word| lemmatize_word(word, PartOfSpeech::Noun))
        .collect::<Vec<_>>()
        .join(" ")
}

const SIBILANT_PLURALS: &[&str] = &["sses", "shes", "ches", "xes", "zes"];

/// Whether a word ending in "s" is usually singular ("glass", "status", "axis").
fn has_singular_s_ending(word: &str) -> bool {
    word.ends_with("ss") || word.ends_with("us") || word.ends_with("is")
}

/// Base form for a stem left after removing "ies" or "ied".
fn ies_base(stem: &str) -> String {
    let ie = format!("{stem}ie");
    if IE_WORDS.contains(&ie.as_str()) {
        ie
    } else {
        format!("{stem}y")
    }
}

fn lemmatize_noun(word: &str) -> Option<String> {
    if has_singular_s_ending(word) {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return Some(ies_base(stem));
        }
    }
    if SIBILANT_PLURALS.iter().any(|s| word.ends_with(s)) {
        return Some(word[..word.len() - 2].to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        if word.len() > 3 {
            return Some(stem.to_string());
        }
    }
    None
}

fn lemmatize_verb(word: &str) -> Option<String> {
    if let Some(stem) = word
        .strip_suffix("ies")
        .or_else(|| word.strip_suffix("ied"))
    {
        if word.len() > 4 {
            return Some(ies_base(stem));
        }
    }
    if SIBILANT_PLURALS.iter().any(|s| word.ends_with(s)) || word.ends_with("oes") {
        return Some(word[..word.len() - 2].to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        if word.len() > 3 && !has_singular_s_ending(word) {
            return Some(stem.to_string());
        }
        return None;
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if stem.len() >= 2 && has_vowel(stem) {
            return Some(restore_stem(stem));
        }
        return None;
    }
    if word.ends_with("eed") {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.len() >= 2 && has_vowel(stem) {
            return Some(restore_stem(stem));
        }
    }
    None
}

fn lemmatize_adjective(word: &str) -> Option<String> {
    if ADJECTIVES.contains(&word) || NON_COMPARATIVES.contains(&word) {
        return None;
    }
    if let Some(stem) = word
        .strip_suffix("iest")
        .or_else(|| word.strip_suffix("ier"))
    {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }
    let stem = match word.strip_suffix("est") {
        Some(stem) if word.len() > 5 => stem,
        _ => match word.strip_suffix("er") {
            Some(stem) if word.len() > 4 => stem,
            _ => return None,
        },
    };
    if !has_vowel(stem) {
        return None;
    }
    if ends_with_double_consonant(stem) {
        return Some(stem[..stem.len() - 1].to_string());
    }
    if needs_silent_e(stem) || stem.ends_with('u') || stem.ends_with("rg") {
        return Some(format!("{stem}e"));
    }
    Some(stem.to_string())
}

/// Undoes consonant doubling ("runn" -> "run") or restores a silent e
/// ("mak" -> "make") on a stem whose inflectional suffix was removed.
fn restore_stem(stem: &str) -> String {
    if ends_with_double_consonant(stem) {
        return stem[..stem.len() - 1].to_string();
    }
    if needs_silent_e(stem) || stem.ends_with('v') || stem.ends_with("iz") || stem.ends_with("yz") {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn has_vowel(stem: &str) -> bool {
    stem.bytes()
        .enumerate()
        .any(|(i, b)| is_vowel(b) || (b == b'y' && i > 0))
}

fn ends_with_double_consonant(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    n >= 3
        && bytes[n - 1] == bytes[n - 2]
        && bytes[n - 1].is_ascii_alphabetic()
        && !is_vowel(bytes[n - 1])
        && !matches!(bytes[n - 1], b'l' | b's' | b'z')
}

/// Single-syllable stems ending consonant-vowel-consonant ("writ", "hop"), or
/// two-letter vowel-consonant stems ("us"), dropped a silent e.
fn needs_silent_e(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n == 2 {
        return is_vowel(bytes[0]) && !is_vowel(bytes[1]);
    }
    if n < 3 {
        return false;
    }
    let cvc = !is_vowel(bytes[n - 3])
        && is_vowel(bytes[n - 2])
        && !is_vowel(bytes[n - 1])
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y');
    cvc && vowel_groups(stem) == 1
}

fn vowel_groups(stem: &str) -> usize {
    let mut groups = 0;
    let mut in_vowel = false;
    for b in stem.bytes() {
        let v = is_vowel(b);
        if v && !in_vowel {
            groups += 1;
        }
        in_vowel = v;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordnet_pos() {
        assert_eq!(wordnet_pos("JJ"), PartOfSpeech::Adjective);
        assert_eq!(wordnet_pos("JJS"), PartOfSpeech::Adjective);
        assert_eq!(wordnet_pos("VBD"), PartOfSpeech::Verb);
        assert_eq!(wordnet_pos("NNS"), PartOfSpeech::Noun);
        assert_eq!(wordnet_pos("RB"), PartOfSpeech::Adverb);
        assert_eq!(wordnet_pos("DT"), PartOfSpeech::Noun);
        assert_eq!(wordnet_pos(""), PartOfSpeech::Noun);
    }

    #[test]
    fn test_pos_tag() {
        let words = ["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dogs"];
        let tags: Vec<&str> = pos_tag(&words).into_iter().map(|(_, t)| t).collect();
        assert_eq!(tags, vec!["DT", "JJ", "JJ", "NN", "VBZ", "IN", "DT", "JJ", "NNS"]);

        let tags: Vec<&str> = pos_tag(&["they", "are", "running", "quickly"])
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(tags, vec!["PRP", "VBP", "VBG", "RB"]);

        // context turns a gerund into a noun
        let tags: Vec<&str> = pos_tag(&["the", "building"])
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(tags, vec!["DT", "NN"]);

        let tags: Vec<&str> = pos_tag(&["to", "code", "is", "wonderful"])
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(tags, vec!["TO", "VB", "VBZ", "JJ"]);

        assert!(pos_tag(&[]).is_empty());
    }

    #[test]
    fn test_lemmatize_noun() {
        assert_eq!(lemmatize_word("cats", PartOfSpeech::Noun), "cat");
        assert_eq!(lemmatize_word("cities", PartOfSpeech::Noun), "city");
        assert_eq!(lemmatize_word("boxes", PartOfSpeech::Noun), "box");
        assert_eq!(lemmatize_word("churches", PartOfSpeech::Noun), "church");
        assert_eq!(lemmatize_word("children", PartOfSpeech::Noun), "child");
        assert_eq!(lemmatize_word("glass", PartOfSpeech::Noun), "glass");
        assert_eq!(lemmatize_word("status", PartOfSpeech::Noun), "status");
        assert_eq!(lemmatize_word("analysis", PartOfSpeech::Noun), "analysis");
        assert_eq!(lemmatize_word("Databases", PartOfSpeech::Noun), "database");
        assert_eq!(lemmatize_word("running", PartOfSpeech::Noun), "running");
        assert_eq!(lemmatize_word("gas", PartOfSpeech::Noun), "gas");
        assert_eq!(lemmatize_word("movies", PartOfSpeech::Noun), "movie");
        assert_eq!(lemmatize_word("cookies", PartOfSpeech::Noun), "cookie");
        assert_eq!(lemmatize_word("zombies", PartOfSpeech::Noun), "zombie");
        assert_eq!(lemmatize_word("calories", PartOfSpeech::Noun), "calorie");
        assert_eq!(lemmatize_word("pies", PartOfSpeech::Noun), "pie");
        assert_eq!(lemmatize_word("buses", PartOfSpeech::Noun), "bus");
        assert_eq!(lemmatize_word("gases", PartOfSpeech::Noun), "gas");
        assert_eq!(lemmatize_word("lenses", PartOfSpeech::Noun), "lens");
        assert_eq!(lemmatize_word("lens", PartOfSpeech::Noun), "lens");
        assert_eq!(lemmatize_word("houses", PartOfSpeech::Noun), "house");
    }

    #[test]
    fn test_lemmatize_verb() {
        assert_eq!(lemmatize_word("running", PartOfSpeech::Verb), "run");
        assert_eq!(lemmatize_word("ran", PartOfSpeech::Verb), "run");
        assert_eq!(lemmatize_word("making", PartOfSpeech::Verb), "make");
        assert_eq!(lemmatize_word("writing", PartOfSpeech::Verb), "write");
        assert_eq!(lemmatize_word("jumped", PartOfSpeech::Verb), "jump");
        assert_eq!(lemmatize_word("hoped", PartOfSpeech::Verb), "hope");
        assert_eq!(lemmatize_word("hopped", PartOfSpeech::Verb), "hop");
        assert_eq!(lemmatize_word("visited", PartOfSpeech::Verb), "visit");
        assert_eq!(lemmatize_word("used", PartOfSpeech::Verb), "use");
        assert_eq!(lemmatize_word("played", PartOfSpeech::Verb), "play");
        assert_eq!(lemmatize_word("studies", PartOfSpeech::Verb), "study");
        assert_eq!(lemmatize_word("tried", PartOfSpeech::Verb), "try");
        assert_eq!(lemmatize_word("died", PartOfSpeech::Verb), "die");
        assert_eq!(lemmatize_word("dies", PartOfSpeech::Verb), "die");
        assert_eq!(lemmatize_word("lying", PartOfSpeech::Verb), "lie");
        assert_eq!(lemmatize_word("tied", PartOfSpeech::Verb), "tie");
        assert_eq!(lemmatize_word("untied", PartOfSpeech::Verb), "untie");
        assert_eq!(lemmatize_word("watches", PartOfSpeech::Verb), "watch");
        assert_eq!(lemmatize_word("makes", PartOfSpeech::Verb), "make");
        assert_eq!(lemmatize_word("passes", PartOfSpeech::Verb), "pass");
        assert_eq!(lemmatize_word("was", PartOfSpeech::Verb), "be");
        assert_eq!(lemmatize_word("needed", PartOfSpeech::Verb), "need");
        assert_eq!(lemmatize_word("proceed", PartOfSpeech::Verb), "proceed");
        assert_eq!(lemmatize_word("sing", PartOfSpeech::Verb), "sing");
        assert_eq!(lemmatize_word("bring", PartOfSpeech::Verb), "bring");
        assert_eq!(lemmatize_word("filling", PartOfSpeech::Verb), "fill");
    }

    #[test]
    fn test_lemmatize_adjective_and_adverb() {
        assert_eq!(lemmatize_word("better", PartOfSpeech::Adjective), "good");
        assert_eq!(lemmatize_word("faster", PartOfSpeech::Adjective), "fast");
        assert_eq!(lemmatize_word("fastest", PartOfSpeech::Adjective), "fast");
        assert_eq!(lemmatize_word("bigger", PartOfSpeech::Adjective), "big");
        assert_eq!(lemmatize_word("happier", PartOfSpeech::Adjective), "happy");
        assert_eq!(lemmatize_word("easiest", PartOfSpeech::Adjective), "easy");
        assert_eq!(lemmatize_word("larger", PartOfSpeech::Adjective), "large");
        assert_eq!(lemmatize_word("nicer", PartOfSpeech::Adjective), "nice");
        assert_eq!(lemmatize_word("other", PartOfSpeech::Adjective), "other");
        assert_eq!(lemmatize_word("honest", PartOfSpeech::Adjective), "honest");
        assert_eq!(lemmatize_word("quickly", PartOfSpeech::Adverb), "quickly");
        assert_eq!(lemmatize_word("better", PartOfSpeech::Adverb), "well");
    }

    #[test]
    fn test_lemmatize_text() {
        assert_eq!(
            lemmatize("the cats were running quickly"),
            "the cat be run quickly"
        );
        assert_eq!(lemmatize("the building"), "the building");
        assert_eq!(lemmatize("they are building"), "they be build");
        assert_eq!(lemmatize(""), "");
        assert_eq!(lemmatize_nouns("cats were running"), "cat were running");
    }
}
