//! Cyrillic to Latin transliteration used for nicknames

/// Latin spelling of a lower-case Cyrillic letter, if it has one
fn latin(c: char) -> Option<&'static str> {
    let s = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' | 'ы' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sh'",
        'ъ' | 'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(s)
}

/// Transliterate `payload`, replacing spaces with `divider`.
///
/// Upper-case letters map to the capitalised spelling (`Ж` -> `Zh`).
/// Characters with no mapping are copied as-is.
pub fn transliterate(payload: &str, divider: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    for c in payload.chars() {
        if c == ' ' {
            out.push_str(divider);
            continue;
        }

        let lower = c.to_lowercase().next().unwrap_or(c);
        match latin(lower) {
            Some(spelling) if lower != c => {
                let mut chars = spelling.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
            }
            Some(spelling) => out.push_str(spelling),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_word() {
        assert_eq!(transliterate("женя", " "), "zhenya");
    }

    #[test]
    fn test_capitalised_words_with_divider() {
        assert_eq!(transliterate("Женя Стереотипов", "_"), "Zhenya_Stereotipov");
    }

    #[test]
    fn test_latin_passes_through() {
        assert_eq!(transliterate("Amazing Петр", "_"), "Amazing_Petr");
    }

    #[test]
    fn test_signs_are_dropped() {
        assert_eq!(transliterate("объявление", " "), "obyavlenie");
        assert_eq!(transliterate("щука", " "), "sh'uka");
    }

    #[test]
    fn test_empty() {
        assert_eq!(transliterate("", "_"), "");
    }
}
