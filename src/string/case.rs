//! Case conversion
//!
//! Words are split on any non-alphanumeric character and on case boundaries:
//! `"parseHTTPResponse_v2"` splits into `parse`, `HTTP`, `Response`, `v2`.

/// Split `input` into words for case conversion
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let previous = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // fooBar -> foo|Bar, HTTPServer -> HTTP|Server
            if previous.is_lowercase()
                || previous.is_numeric()
                || (previous.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Upper-case the first character and lower-case the rest
///
/// ```
/// use toolbelt::string::capitalize;
///
/// assert_eq!(capitalize("hELLO world"), "Hello world");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn to_title_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn to_camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

pub fn to_pascal_case(input: &str) -> String {
    split_words(input).iter().map(|word| capitalize(word)).collect()
}

pub fn to_snake_case(input: &str) -> String {
    join_lowercase(input, "_")
}

pub fn to_kebab_case(input: &str) -> String {
    join_lowercase(input, "-")
}

fn join_lowercase(input: &str, separator: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
