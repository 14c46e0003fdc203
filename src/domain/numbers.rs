use super::language::Language;

/// Per-language vocabulary for compounding spoken numbers.
///
/// Hundreds and thousands attach their word before or after the digit word
/// depending on the language (`narị otu` vs `one hundred`), so the table
/// carries placement flags alongside the joiners.
struct Lexicon {
    zero: &'static str,
    ones: [&'static str; 10],
    /// 10..=19 for languages that have dedicated teen words.
    teens: Option<[&'static str; 10]>,
    tens: [&'static str; 10],
    hundred: &'static str,
    hundred_prefix: bool,
    hundred_joiner: &'static str,
    thousand: &'static str,
    thousand_prefix: bool,
    thousand_joiner: &'static str,
    tens_joiner: &'static str,
}

const EN: Lexicon = Lexicon {
    zero: "zero",
    ones: [
        "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
    teens: Some([
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ]),
    tens: [
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    hundred: "hundred",
    hundred_prefix: false,
    hundred_joiner: " and ",
    thousand: "thousand",
    thousand_prefix: false,
    thousand_joiner: " ",
    tens_joiner: " ",
};

const YO: Lexicon = Lexicon {
    zero: "òdo",
    ones: [
        "", "ọkan", "èjì", "ẹta", "ẹrin", "àrún", "ẹfà", "èje", "ẹjọ", "ẹsán",
    ],
    teens: None,
    tens: [
        "", "ẹwá", "ogún", "ọgbọn", "ogójì", "àádọta", "ọgọta", "àádọrin", "ọgọrin", "àádọrun",
    ],
    hundred: "ọgọrun",
    hundred_prefix: false,
    hundred_joiner: " ",
    thousand: "ẹgbẹrun",
    thousand_prefix: false,
    thousand_joiner: " ",
    tens_joiner: " ",
};

const IG: Lexicon = Lexicon {
    zero: "efu",
    ones: [
        "", "otu", "abụọ", "atọ", "anọ", "ise", "isii", "asaa", "asatọ", "itoolu",
    ],
    teens: None,
    tens: [
        "",
        "iri",
        "iri abụọ",
        "iri atọ",
        "iri anọ",
        "iri ise",
        "iri isii",
        "iri asaa",
        "iri asatọ",
        "iri itoolu",
    ],
    hundred: "narị",
    hundred_prefix: true,
    hundred_joiner: " na ",
    thousand: "puku",
    thousand_prefix: true,
    thousand_joiner: " na ",
    tens_joiner: " na ",
};

const HA: Lexicon = Lexicon {
    zero: "sifili",
    ones: [
        "", "ɗaya", "biyu", "uku", "huɗu", "biyar", "shida", "bakwai", "takwas", "tara",
    ],
    teens: None,
    tens: [
        "", "goma", "ashirin", "talatin", "arba'in", "hamsin", "sittin", "saba'in", "tamanin",
        "casa'in",
    ],
    hundred: "ɗari",
    hundred_prefix: false,
    hundred_joiner: " da ",
    thousand: "dubu",
    thousand_prefix: false,
    thousand_joiner: " da ",
    tens_joiner: " da ",
};

const SW: Lexicon = Lexicon {
    zero: "sifuri",
    ones: [
        "", "moja", "mbili", "tatu", "nne", "tano", "sita", "saba", "nane", "tisa",
    ],
    teens: None,
    tens: [
        "",
        "kumi",
        "ishirini",
        "thelathini",
        "arobaini",
        "hamsini",
        "sitini",
        "sabini",
        "themanini",
        "tisini",
    ],
    hundred: "mia",
    hundred_prefix: true,
    hundred_joiner: " na ",
    thousand: "elfu",
    thousand_prefix: true,
    thousand_joiner: " na ",
    tens_joiner: " na ",
};

const TW: Lexicon = Lexicon {
    zero: "hwee",
    ones: [
        "", "baako", "mmienu", "mmiɛnsa", "ɛnan", "enum", "nsia", "nson", "nwɔtwe", "nkron",
    ],
    teens: None,
    tens: [
        "",
        "du",
        "aduonu",
        "aduasa",
        "aduanan",
        "aduonum",
        "aduosia",
        "aduoson",
        "aduɔwɔtwe",
        "aduɔkron",
    ],
    hundred: "ɔha",
    hundred_prefix: true,
    hundred_joiner: " ne ",
    thousand: "apem",
    thousand_prefix: true,
    thousand_joiner: " ne ",
    tens_joiner: " ",
};

fn lexicon(language: Language) -> &'static Lexicon {
    match language {
        // Pidgin shares the English number vocabulary.
        Language::En | Language::Pcm => &EN,
        Language::Yo => &YO,
        Language::Ig => &IG,
        Language::Ha => &HA,
        Language::Sw => &SW,
        Language::Tw => &TW,
    }
}

/// Spells out `n` in the given language, for values below one million.
/// Larger values fall back to grouped digits.
pub fn number_to_words(n: u64, language: Language) -> String {
    let lex = lexicon(language);
    if n == 0 {
        return lex.zero.to_string();
    }
    if n >= 1_000_000 {
        return group_digits(n);
    }
    compound(n, lex)
}

/// The word for a standalone small integer (0..=10), used by narration
/// pre-processing. Anything larger is left to the caller's formatting.
pub fn small_number_word(n: u64, language: Language) -> Option<String> {
    if n > 10 {
        return None;
    }
    Some(number_to_words(n, language))
}

fn compound(n: u64, lex: &Lexicon) -> String {
    debug_assert!(n > 0 && n < 1_000_000);
    if n < 10 {
        return lex.ones[n as usize].to_string();
    }
    if n < 20
        && let Some(teens) = lex.teens
    {
        return teens[(n - 10) as usize].to_string();
    }
    if n < 100 {
        let ten = lex.tens[(n / 10) as usize];
        let one = n % 10;
        return if one == 0 {
            ten.to_string()
        } else {
            format!("{ten}{}{}", lex.tens_joiner, lex.ones[one as usize])
        };
    }
    if n < 1000 {
        let digit = lex.ones[(n / 100) as usize];
        let head = if lex.hundred_prefix {
            format!("{} {digit}", lex.hundred)
        } else {
            format!("{digit} {}", lex.hundred)
        };
        let rem = n % 100;
        return if rem == 0 {
            head
        } else {
            format!("{head}{}{}", lex.hundred_joiner, compound(rem, lex))
        };
    }
    let thousands = compound(n / 1000, lex);
    let head = if lex.thousand_prefix {
        format!("{} {thousands}", lex.thousand)
    } else {
        format!("{thousands} {}", lex.thousand)
    };
    let rem = n % 1000;
    if rem == 0 {
        head
    } else {
        format!("{head}{}{}", lex.thousand_joiner, compound(rem, lex))
    }
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_compounds() {
        assert_eq!(number_to_words(0, Language::En), "zero");
        assert_eq!(number_to_words(14, Language::En), "fourteen");
        assert_eq!(number_to_words(45, Language::En), "forty five");
        assert_eq!(number_to_words(150, Language::En), "one hundred and fifty");
        assert_eq!(
            number_to_words(5280, Language::En),
            "five thousand two hundred and eighty"
        );
    }

    #[test]
    fn test_yoruba_words() {
        assert_eq!(number_to_words(5, Language::Yo), "àrún");
        assert_eq!(number_to_words(10, Language::Yo), "ẹwá");
        assert_eq!(number_to_words(5000, Language::Yo), "àrún ẹgbẹrun");
    }

    #[test]
    fn test_swahili_joiners() {
        assert_eq!(number_to_words(21, Language::Sw), "ishirini na moja");
        assert_eq!(number_to_words(100, Language::Sw), "mia moja");
        assert_eq!(number_to_words(1000, Language::Sw), "elfu moja");
    }

    #[test]
    fn test_igbo_prefixed_hundreds() {
        assert_eq!(number_to_words(10, Language::Ig), "iri");
        assert_eq!(number_to_words(200, Language::Ig), "narị abụọ");
        assert_eq!(number_to_words(205, Language::Ig), "narị abụọ na ise");
    }

    #[test]
    fn test_hausa_words() {
        assert_eq!(number_to_words(0, Language::Ha), "sifili");
        assert_eq!(number_to_words(74, Language::Ha), "saba'in da huɗu");
    }

    #[test]
    fn test_pidgin_follows_english() {
        assert_eq!(number_to_words(1000, Language::Pcm), "one thousand");
    }

    #[test]
    fn test_large_values_stay_numeric() {
        assert_eq!(number_to_words(1_234_567, Language::En), "1,234,567");
    }

    #[test]
    fn test_small_number_cutoff() {
        assert_eq!(small_number_word(10, Language::Tw).as_deref(), Some("du"));
        assert_eq!(small_number_word(11, Language::En), None);
    }
}
