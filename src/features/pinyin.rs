//! Conversions between the three pinyin representations stored per entry:
//! numbered (`ni3 hao3`), diacritic-marked (`nǐ hǎo`) and tone-stripped (`nihao`).

const NEUTRAL_TONE: u32 = 5;
const VOWELS: [char; 7] = ['a', 'e', 'i', 'o', 'u', 'v', 'ü'];

/// Tone glyphs per base vowel: tones 1 to 4, then the unmarked form.
fn tone_glyphs(vowel: char) -> Option<[char; 5]> {
    match vowel {
        'a' => Some(['ā', 'á', 'ǎ', 'à', 'a']),
        'e' => Some(['ē', 'é', 'ě', 'è', 'e']),
        'i' => Some(['ī', 'í', 'ǐ', 'ì', 'i']),
        'o' => Some(['ō', 'ó', 'ǒ', 'ò', 'o']),
        'u' => Some(['ū', 'ú', 'ǔ', 'ù', 'u']),
        'v' | 'ü' => Some(['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü']),
        _ => None,
    }
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Converts numbered pinyin to diacritic-marked pinyin.
///
/// `decode("ni3 hao3") == "nǐ hǎo"`. Tone 5 or a missing digit is the
/// neutral tone and gets no mark. A syllable ending in any other digit
/// is returned unchanged, digit included.
pub fn decode(numbered: &str) -> String {
    numbered
        .split(' ')
        .filter(|syllable| !syllable.is_empty())
        .map(decode_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_syllable(syllable: &str) -> String {
    let (tone, base) = match syllable.chars().last().and_then(|c| c.to_digit(10)) {
        // ASCII digits are one byte wide
        Some(digit) => (digit, &syllable[..syllable.len() - 1]),
        None => (NEUTRAL_TONE, syllable),
    };

    if !(1..=NEUTRAL_TONE).contains(&tone) {
        return syllable.to_string();
    }

    let base = base.replace("u:", "ü").replace("U:", "Ü");
    if tone == NEUTRAL_TONE {
        return base;
    }

    let chars: Vec<char> = base.chars().collect();
    let target = chars
        .iter()
        .position(|&c| c == 'a')
        .or_else(|| chars.iter().position(|&c| c == 'e'))
        .or_else(|| chars.windows(2).position(|pair| pair == ['o', 'u']))
        .or_else(|| chars.iter().rposition(|&c| VOWELS.contains(&lowercase(c))));

    let Some(index) = target else {
        return base;
    };
    let original = chars[index];
    let Some(glyphs) = tone_glyphs(lowercase(original)) else {
        return base;
    };

    let marked = glyphs[(tone - 1) as usize];
    let mut out = String::with_capacity(base.len() + 2);
    for (i, &c) in chars.iter().enumerate() {
        if i != index {
            out.push(c);
        } else if original.is_uppercase() {
            out.extend(marked.to_uppercase());
        } else {
            out.push(marked);
        }
    }
    out
}

/// Lowercase romanization with tone digits and whitespace removed.
pub fn strip_tones(pinyin: &str) -> String {
    pinyin
        .chars()
        .filter(|c| !c.is_ascii_digit() && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase romanization with whitespace removed and tone digits kept.
pub fn compact_numbered(pinyin: &str) -> String {
    pinyin
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic_syllables() {
        assert_eq!(decode("ni3 hao3"), "nǐ hǎo");
        assert_eq!(decode("zhong1 guo2"), "zhōng guó");
        assert_eq!(decode("xie4 xie5"), "xiè xie");
    }

    #[test]
    fn test_decode_umlaut_digraph() {
        assert_eq!(decode("lu:4"), "lǜ");
        assert_eq!(decode("nu:3 er2"), "nǚ ér");
        assert_eq!(decode("lv4"), "lǜ");
        assert_eq!(decode("lu:e4"), "lüè");
    }

    #[test]
    fn test_decode_vowel_priority() {
        // a before anything else
        assert_eq!(decode("guai4"), "guài");
        // e when there is no a
        assert_eq!(decode("lüe4"), "lüè");
        // o of ou
        assert_eq!(decode("dou1"), "dōu");
        // otherwise the last vowel
        assert_eq!(decode("gui4"), "guì");
        assert_eq!(decode("liu2"), "liú");
    }

    #[test]
    fn test_decode_preserves_case() {
        assert_eq!(decode("Zhong1 guo2"), "Zhōng guó");
        assert_eq!(decode("An1"), "Ān");
        assert_eq!(decode("LU:4"), "LǛ");
    }

    #[test]
    fn test_decode_neutral_tone() {
        assert_eq!(decode("de5"), "de");
        assert_eq!(decode("ma"), "ma");
        assert_eq!(decode("lu:"), "lü");
    }

    #[test]
    fn test_decode_invalid_tone_passes_through() {
        assert_eq!(decode("hao6"), "hao6");
        assert_eq!(decode("ni3 hao0"), "nǐ hao0");
        assert_eq!(decode("lu:9"), "lu:9");
    }

    #[test]
    fn test_decode_non_syllables() {
        assert_eq!(decode("san1 C"), "sān C");
        assert_eq!(decode("m2"), "m");
        assert_eq!(decode(""), "");
        assert_eq!(decode("ni3  hao3"), "nǐ hǎo");
    }

    #[test]
    fn test_decode_marks_exactly_one_vowel() {
        for tone in 1..=4 {
            let marked = decode(&format!("zhuang{}", tone));
            let marks = marked.chars().filter(|c| !c.is_ascii()).count();
            assert_eq!(marks, 1, "{}", marked);
        }
    }

    #[test]
    fn test_strip_tones() {
        assert_eq!(strip_tones("Ni3 Hao3"), "nihao");
        assert_eq!(strip_tones("lu:4"), "lu:");
    }

    #[test]
    fn test_compact_numbered() {
        assert_eq!(compact_numbered("Zhong1 guo2"), "zhong1guo2");
    }
}
