use unicode_segmentation::UnicodeSegmentation;

/// Upper-case the first letter of every word in `text`, leaving the rest of
/// each word as it is.
///
/// Word boundaries follow Unicode segmentation, so `well-formed` becomes
/// `Well-Formed` and `n=3` becomes `N=3`.
pub fn title(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for segment in text.split_word_bounds() {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() => {
                push_title(&mut result, first);
                result.push_str(chars.as_str());
            }
            _ => result.push_str(segment),
        }
    }

    result
}

/// Push the title-case form of `c`. This only differs from upper case for
/// digraphs, ligatures, `ß` and Greek letters with a subscript iota.
fn push_title(out: &mut String, c: char) {
    let title = match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1F88}'..='\u{1F8F}'
        | '\u{1F98}'..='\u{1F9F}'
        | '\u{1FA8}'..='\u{1FAF}'
        | '\u{1FBC}'
        | '\u{1FCC}'
        | '\u{1FFC}' => c,
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => {
            match title_expansion(c) {
                Some(expansion) => out.push_str(expansion),
                None => out.extend(c.to_uppercase()),
            }
            return;
        }
    };
    out.push(title);
}

fn title_expansion(c: char) -> Option<&'static str> {
    let expansion = match c {
        'ß' => "Ss",
        '\u{0587}' => "\u{0535}\u{0582}",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        '\u{FB13}' => "\u{0544}\u{0576}",
        '\u{FB14}' => "\u{0544}\u{0565}",
        '\u{FB15}' => "\u{0544}\u{056B}",
        '\u{FB16}' => "\u{054E}\u{0576}",
        '\u{FB17}' => "\u{0544}\u{056D}",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        _ => return None,
    };
    Some(expansion)
}

pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_keeps_rest_of_word() {
        assert_eq!(title("foo"), "Foo");
        assert_eq!(title("fooBAR"), "FooBAR");
        assert_eq!(title("Input"), "Input");
        assert_eq!(title(""), "");
    }

    #[test]
    fn test_title_every_word() {
        assert_eq!(title("well-formed"), "Well-Formed");
        assert_eq!(title("n=3"), "N=3");
    }

    #[test]
    fn test_title_non_letters_untouched() {
        assert_eq!(title("-1"), "-1");
        assert_eq!(title("42"), "42");
    }

    #[test]
    fn test_title_unicode() {
        assert_eq!(title("élan"), "Élan");
    }

    #[test]
    fn test_title_case_mapping() {
        assert_eq!(title("\u{01C6}emal"), "\u{01C5}emal");
        assert_eq!(title("\u{01C9}ubljana"), "\u{01C8}ubljana");
        assert_eq!(title("\u{FB01}le"), "File");
        assert_eq!(title("\u{FB03}x"), "Ffix");
        assert_eq!(title("\u{1FB3}"), "\u{1FBC}");
        assert_eq!(title("\u{1F80}"), "\u{1F88}");
        assert_eq!(title("\u{01C5}"), "\u{01C5}");
    }

    #[test]
    fn test_lower() {
        assert_eq!(lower("JSON"), "json");
        assert_eq!(lower("Is"), "is");
    }
}
