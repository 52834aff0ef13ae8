//! Ordering for country names that reads naturally to a person: case and
//! Latin diacritics do not decide the position, so "Åland Islands" lands
//! among the A's instead of after "Zimbabwe".

use std::cmp::Ordering;

fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'Ā' | 'ā' => "a",
        'Æ' | 'æ' => "ae",
        'Ç' | 'ç' | 'Č' | 'č' => "c",
        'È' | 'É' | 'Ê' | 'Ë' | 'è' | 'é' | 'ê' | 'ë' | 'Ē' | 'ē' => "e",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'ì' | 'í' | 'î' | 'ï' | 'Ī' | 'ī' => "i",
        'Ñ' | 'ñ' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ō' | 'ō' => "o",
        'Œ' | 'œ' => "oe",
        'Š' | 'š' | 'Ş' | 'ş' => "s",
        'ß' => "ss",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'ù' | 'ú' | 'û' | 'ü' | 'Ū' | 'ū' => "u",
        'Ý' | 'ý' | 'ÿ' => "y",
        'Ž' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}

/// Primary sort key: lower-cased with diacritics folded to their base letter.
pub fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        match fold_char(c) {
            Some(folded) => key.push_str(folded),
            None => key.extend(c.to_lowercase()),
        }
    }
    key
}

pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

pub fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn sorts_plain_names_lexicographically() {
        let mut names = owned(&["Zambia", "Aruba", "Canada"]);
        sort_names(&mut names);
        assert_eq!(names, owned(&["Aruba", "Canada", "Zambia"]));
    }

    #[test]
    fn diacritics_sort_next_to_their_base_letter() {
        let mut names = owned(&["Zambia", "Curaçao", "Åland Islands", "Cuba", "Aruba", "Canada"]);
        sort_names(&mut names);
        assert_eq!(
            names,
            owned(&["Åland Islands", "Aruba", "Canada", "Cuba", "Curaçao", "Zambia"])
        );
    }

    #[test]
    fn case_does_not_decide_position() {
        assert_eq!(compare("eswatini", "Estonia"), Ordering::Greater);
        assert_eq!(compare("Réunion", "Romania"), Ordering::Less);
    }

    #[test]
    fn identical_keys_fall_back_to_raw_order() {
        assert_eq!(compare("Aland", "Åland"), Ordering::Less);
        assert_eq!(compare("Chad", "Chad"), Ordering::Equal);
    }
}
