use std::sync::Arc;
use std::sync::LazyLock;

use dinopark_domain::Dinosaur;
use regex_lite::Regex;

use super::length::DinosaurLengthDeterminator;
use crate::infrastructure::ports::RandomPort;

// regex-lite's `\b` only knows ASCII word characters, so word boundaries are
// checked in `mentions_carnivore` instead.
static CARNIVORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)carnivor(?:ous|e)").expect("valid regex"));

/// Prefix of the placeholder genus given to lab-grown dinosaurs.
const LAB_GENUS_PREFIX: &str = "InG-";
const LAB_CODE_MIN: u32 = 1;
const LAB_CODE_MAX: u32 = 99_999;

/// Grows dinosaurs, either from explicit attributes or from a free-text
/// specification.
///
/// The factory never sets an enclosure back-reference; placing the dinosaur
/// is the caller's job.
pub struct DinosaurFactory {
    length_determinator: DinosaurLengthDeterminator,
    random: Arc<dyn RandomPort>,
}

impl DinosaurFactory {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self {
            length_determinator: DinosaurLengthDeterminator::new(random.clone()),
            random,
        }
    }

    pub fn grow_velociraptor(&self, length: u32) -> Dinosaur {
        self.grow("Velociraptor", true, length)
    }

    /// Grows a lab dinosaur from a description such as `"large carnivorous dinosaur"`.
    ///
    /// - genus: `"InG-<1..=99999>"` code name
    /// - length: see [`DinosaurLengthDeterminator`]
    /// - diet: carnivorous iff the text contains the word "carnivorous" or
    ///   "carnivore" (any case), herbivorous otherwise
    pub fn grow_from_specification(&self, specification: &str) -> Dinosaur {
        let code_name = format!(
            "{}{}",
            LAB_GENUS_PREFIX,
            self.random.gen_range(LAB_CODE_MIN, LAB_CODE_MAX)
        );
        let length = self
            .length_determinator
            .length_from_specification(specification);
        let is_carnivorous = mentions_carnivore(specification);

        self.grow(code_name, is_carnivorous, length)
    }

    pub fn grow(&self, genus: impl Into<String>, is_carnivorous: bool, length: u32) -> Dinosaur {
        Dinosaur::new(genus, is_carnivorous).with_length(length)
    }
}

/// True when "carnivorous" or "carnivore" appears as a whole word.
fn mentions_carnivore(text: &str) -> bool {
    CARNIVORE_RE.find_iter(text).any(|m| {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
