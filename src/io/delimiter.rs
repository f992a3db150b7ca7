use std::fmt;
use std::str::FromStr;

/// Field separator of a numeric table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Space,
    Comma,
    Tab,
    Other(char),
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match *self {
            Delimiter::Space => ' ',
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Other(c) => c,
        }
    }

    /// Splits one line into trimmed fields.
    ///
    /// For whitespace delimiters, runs of the delimiter count as one separator. For any
    /// other delimiter every separator is significant, so `1,,2` has an empty middle field.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pairforce::io::Delimiter;
    ///
    /// assert_eq!(Delimiter::Space.split("  1.0   2.0 3 "), vec!["1.0", "2.0", "3"]);
    /// assert_eq!(Delimiter::Comma.split("1.0, 2.0 ,3"), vec!["1.0", "2.0", "3"]);
    /// assert_eq!(Delimiter::Comma.split("1,,3"), vec!["1", "", "3"]);
    /// ```
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let separator = self.as_char();
        let fields = line.trim().split(separator).map(str::trim);
        if separator.is_whitespace() {
            fields.filter(|field| !field.is_empty()).collect()
        } else {
            fields.collect()
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Delimiter::Space => write!(f, "space"),
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Tab => write!(f, "tab"),
            Delimiter::Other(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    /// Accepts `space`, `comma`, `tab`, `\t`, or any single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "space" | " " => Ok(Delimiter::Space),
            "comma" | "," => Ok(Delimiter::Comma),
            "tab" | "\t" | "\\t" => Ok(Delimiter::Tab),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c == '.' || c == '-' || c == '+' || c.is_ascii_alphanumeric() => Err(format!(
                        "'{}' cannot separate numeric fields",
                        c
                    )),
                    (Some(c), None) => Ok(Delimiter::Other(c)),
                    _ => Err(format!(
                        "unknown delimiter \"{}\": expected space, comma, tab or a single character",
                        other
                    )),
                }
            }
        }
    }
}
