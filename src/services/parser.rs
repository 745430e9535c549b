// Menu line parser
//
// Pure text heuristics, deliberately free of I/O so they can be tested (and
// fuzzed) without any network mocking.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::ParsedCandidate;

/// Integer-or-decimal token; the decimal separator may be '.' or ','.
static NUMERIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("numeric token pattern"));

/// Separator punctuation that menus place between a name and its price:
/// hyphens, colons, em-dashes, dotted leaders, pipes.
fn is_separator(c: char) -> bool {
    matches!(c, '-' | ':' | '\u{2014}' | '.' | '|') || c.is_whitespace()
}

/// Parse one line of recognized text into a `(name, price)` candidate.
///
/// Menus place prices at line end, so when several numeric tokens appear the
/// rightmost one wins. Lines without a numeric token are kept whole as a
/// price-less name (market-price dishes, headings). Empty and whitespace-only
/// lines yield `None`.
///
/// Never panics; the returned price is either empty or a decimal-like string
/// with ',' normalized to '.'.
pub fn parse_line(line: &str) -> Option<ParsedCandidate> {
    // OCR output sometimes carries non-breaking spaces
    let cleaned = line.replace('\u{00A0}', " ");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    let Some(price_match) = NUMERIC_TOKEN.find_iter(cleaned).last() else {
        return Some(ParsedCandidate {
            name: cleaned.to_string(),
            price: String::new(),
        });
    };

    let price = price_match.as_str().replace(',', ".");

    let name = cleaned[..price_match.start()]
        .trim_end_matches(is_separator)
        .trim()
        .to_string();

    // A line that is essentially just a price ("... 12.50") leaves no prefix;
    // fall back to the line with the price token removed.
    let name = if name.is_empty() {
        cleaned
            .replacen(price_match.as_str(), "", 1)
            .trim()
            .to_string()
    } else {
        name
    };

    Some(ParsedCandidate { name, price })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> ParsedCandidate {
        parse_line(line).expect("line should parse")
    }

    #[test]
    fn test_dotted_leader_line() {
        let candidate = parsed("Margherita Pizza .......... 12.50");
        assert_eq!(candidate.name, "Margherita Pizza");
        assert_eq!(candidate.price, "12.50");
    }

    #[test]
    fn test_comma_decimal_normalized() {
        let candidate = parsed("Espresso 2,50");
        assert_eq!(candidate.name, "Espresso");
        assert_eq!(candidate.price, "2.50");
    }

    #[test]
    fn test_no_price_keeps_whole_line() {
        let candidate = parsed("Chef's Special");
        assert_eq!(candidate.name, "Chef's Special");
        assert_eq!(candidate.price, "");
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("\u{00A0}\u{00A0}"), None);
    }

    #[test]
    fn test_last_numeric_token_wins() {
        let candidate = parsed("2 Tacos al Pastor 8.00");
        assert_eq!(candidate.name, "2 Tacos al Pastor");
        assert_eq!(candidate.price, "8.00");
    }

    #[test]
    fn test_separator_punctuation_stripped() {
        assert_eq!(parsed("Ramen - 11").name, "Ramen");
        assert_eq!(parsed("Ramen: 11").name, "Ramen");
        assert_eq!(parsed("Ramen \u{2014} 11").name, "Ramen");
        assert_eq!(parsed("Ramen | 11").name, "Ramen");
    }

    #[test]
    fn test_non_breaking_spaces_normalized() {
        let candidate = parsed("Pad\u{00A0}Thai\u{00A0}9,90");
        assert_eq!(candidate.name, "Pad Thai");
        assert_eq!(candidate.price, "9.90");
    }

    #[test]
    fn test_price_only_line_falls_back_to_remainder() {
        // No name prefix before the price; the fallback removes the matched
        // token from the full line.
        let candidate = parsed("12.50");
        assert_eq!(candidate.name, "");
        assert_eq!(candidate.price, "12.50");

        let candidate = parsed("12.50 Lunch Special");
        assert_eq!(candidate.price, "12.50");
        assert_eq!(candidate.name, "Lunch Special");
    }

    #[test]
    fn test_integer_price() {
        let candidate = parsed("Burger 10");
        assert_eq!(candidate.name, "Burger");
        assert_eq!(candidate.price, "10");
    }
}
