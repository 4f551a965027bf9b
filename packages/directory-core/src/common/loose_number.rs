use serde::{Deserialize, Serialize};

/// A numeric field as the feed delivers it: sometimes a JSON number,
/// sometimes free text such as `"₹ 500"` or `"13 Years of experience"`.
///
/// The raw value is kept for display; [`LooseNumber::value`] interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Numeric interpretation of the raw value, `None` when nothing numeric is present.
    ///
    /// Text is trimmed and parsed directly first; failing that, the first run of
    /// digits (allowing one decimal point and `,` thousands separators) is used.
    pub fn value(&self) -> Option<f64> {
        match self {
            LooseNumber::Number(n) => n.is_finite().then_some(*n),
            LooseNumber::Text(text) => parse_text(text),
        }
    }
}

impl std::fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LooseNumber::Number(n) => write!(f, "{}", n),
            LooseNumber::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<f64> for LooseNumber {
    fn from(n: f64) -> Self {
        LooseNumber::Number(n)
    }
}

impl From<&str> for LooseNumber {
    fn from(text: &str) -> Self {
        LooseNumber::Text(text.to_string())
    }
}

fn parse_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<f64>() {
        return n.is_finite().then_some(n);
    }

    let start = trimmed.find(|c: char| c.is_ascii_digit())?;
    let chars: Vec<char> = trimmed[start..].chars().collect();

    let mut digits = String::new();
    let mut seen_point = false;
    for (i, c) in chars.iter().enumerate() {
        let next_is_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        match c {
            c if c.is_ascii_digit() => digits.push(*c),
            '.' if !seen_point && next_is_digit => {
                seen_point = true;
                digits.push('.');
            }
            ',' if !seen_point && next_is_digit => {}
            _ => break,
        }
    }

    digits.parse::<f64>().ok()
}
