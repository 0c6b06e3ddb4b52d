use crate::application::ports::util::{SlugGenerator, TransliterationError, Transliterator};
use slug::slugify;
use wana_kana::ConvertJapanese;

/// `slug`-crate slugifier. Characters outside ASCII are folded through
/// deunicode, so kanji come out as their Mandarin pinyin reading rather than a
/// Japanese one (`漢字` becomes `han-zi`, not `kanji`).
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Romanizes hiragana and katakana runs to Hepburn and leaves every other
/// character untouched.
#[derive(Default, Clone)]
pub struct KanaTransliterator;

impl KanaTransliterator {
    pub fn new() -> Self {
        Self
    }
}

fn is_kana(ch: char) -> bool {
    ('\u{3040}'..='\u{30FF}').contains(&ch)
}

/// Kana that `to_romaji` leaves as-is, spelled with kana it does convert.
fn spell_out(ch: char, run: &mut String) {
    match ch {
        'ヶ' | 'ヵ' | 'ゕ' | 'ゖ' => run.push('カ'),
        'ゟ' => run.push_str("より"),
        'ヿ' => run.push_str("コト"),
        other => run.push(other),
    }
}

impl Transliterator for KanaTransliterator {
    fn romanize(&self, input: &str) -> Result<String, TransliterationError> {
        let mut output = String::with_capacity(input.len());
        let mut run = String::new();

        for ch in input.chars() {
            if is_kana(ch) {
                spell_out(ch, &mut run);
                continue;
            }
            if !run.is_empty() {
                output.push_str(&run.to_romaji());
                run.clear();
            }
            output.push(ch);
        }
        if !run.is_empty() {
            output.push_str(&run.to_romaji());
        }

        match output.chars().find(|ch| is_kana(*ch)) {
            Some(ch) => Err(TransliterationError::Unconvertible(ch)),
            None => Ok(output),
        }
    }
}
