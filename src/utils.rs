use regex::{Captures, Regex};
use unicode_width::UnicodeWidthChar;

lazy_static::lazy_static! {
    static ref ENTITY: Regex =
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap();
}

fn named_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "shy" => '\u{ad}',
        "copy" => '©',
        "reg" => '®',
        "deg" => '°',
        "pound" => '£',
        "euro" => '€',
        "yen" => '¥',
        "sect" => '§',
        "para" => '¶',
        "middot" => '·',
        "laquo" => '«',
        "raquo" => '»',
        "iquest" => '¿',
        "iexcl" => '¡',
        "times" => '×',
        "divide" => '÷',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "sbquo" => '\u{201a}',
        "bdquo" => '\u{201e}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "prime" => '\u{2032}',
        "Prime" => '\u{2033}',
        "trade" => '\u{2122}',
        "aacute" => 'á',
        "Aacute" => 'Á',
        "agrave" => 'à',
        "Agrave" => 'À',
        "acirc" => 'â',
        "Acirc" => 'Â',
        "atilde" => 'ã',
        "Atilde" => 'Ã',
        "auml" => 'ä',
        "Auml" => 'Ä',
        "aring" => 'å',
        "Aring" => 'Å',
        "aelig" => 'æ',
        "AElig" => 'Æ',
        "ccedil" => 'ç',
        "Ccedil" => 'Ç',
        "eacute" => 'é',
        "Eacute" => 'É',
        "egrave" => 'è',
        "Egrave" => 'È',
        "ecirc" => 'ê',
        "Ecirc" => 'Ê',
        "euml" => 'ë',
        "Euml" => 'Ë',
        "iacute" => 'í',
        "Iacute" => 'Í',
        "igrave" => 'ì',
        "Igrave" => 'Ì',
        "icirc" => 'î',
        "Icirc" => 'Î',
        "iuml" => 'ï',
        "Iuml" => 'Ï',
        "ntilde" => 'ñ',
        "Ntilde" => 'Ñ',
        "oacute" => 'ó',
        "Oacute" => 'Ó',
        "ograve" => 'ò',
        "Ograve" => 'Ò',
        "ocirc" => 'ô',
        "Ocirc" => 'Ô',
        "otilde" => 'õ',
        "Otilde" => 'Õ',
        "ouml" => 'ö',
        "Ouml" => 'Ö',
        "oslash" => 'ø',
        "Oslash" => 'Ø',
        "szlig" => 'ß',
        "uacute" => 'ú',
        "Uacute" => 'Ú',
        "ugrave" => 'ù',
        "Ugrave" => 'Ù',
        "ucirc" => 'û',
        "Ucirc" => 'Û',
        "uuml" => 'ü',
        "Uuml" => 'Ü',
        "yacute" => 'ý',
        "Yacute" => 'Ý',
        "yuml" => 'ÿ',
        "scaron" => 'š',
        "Scaron" => 'Š',
        "oelig" => 'œ',
        "OElig" => 'Œ',
        "alpha" => 'α',
        "Alpha" => 'Α',
        "beta" => 'β',
        "Beta" => 'Β',
        "gamma" => 'γ',
        "Gamma" => 'Γ',
        "delta" => 'δ',
        "Delta" => 'Δ',
        "epsilon" => 'ε',
        "Epsilon" => 'Ε',
        "zeta" => 'ζ',
        "Zeta" => 'Ζ',
        "eta" => 'η',
        "Eta" => 'Η',
        "theta" => 'θ',
        "Theta" => 'Θ',
        "iota" => 'ι',
        "Iota" => 'Ι',
        "kappa" => 'κ',
        "Kappa" => 'Κ',
        "lambda" => 'λ',
        "Lambda" => 'Λ',
        "mu" => 'μ',
        "Mu" => 'Μ',
        "nu" => 'ν',
        "Nu" => 'Ν',
        "xi" => 'ξ',
        "Xi" => 'Ξ',
        "omicron" => 'ο',
        "Omicron" => 'Ο',
        "pi" => 'π',
        "Pi" => 'Π',
        "rho" => 'ρ',
        "Rho" => 'Ρ',
        "sigma" => 'σ',
        "Sigma" => 'Σ',
        "tau" => 'τ',
        "Tau" => 'Τ',
        "upsilon" => 'υ',
        "Upsilon" => 'Υ',
        "phi" => 'φ',
        "Phi" => 'Φ',
        "chi" => 'χ',
        "Chi" => 'Χ',
        "psi" => 'ψ',
        "Psi" => 'Ψ',
        "omega" => 'ω',
        "Omega" => 'Ω',
        "sigmaf" => 'ς',
        "ecaron" => 'ě',
        "Ecaron" => 'Ě',
        "ccaron" => 'č',
        "Ccaron" => 'Č',
        "rcaron" => 'ř',
        "Rcaron" => 'Ř',
        "zcaron" => 'ž',
        "Zcaron" => 'Ž',
        "ncaron" => 'ň',
        "Ncaron" => 'Ň',
        "dcaron" => 'ď',
        "Dcaron" => 'Ď',
        "tcaron" => 'ť',
        "Tcaron" => 'Ť',
        "uring" => 'ů',
        "Uring" => 'Ů',
        "lstrok" => 'ł',
        "Lstrok" => 'Ł',
        "scedil" => 'ş',
        "Scedil" => 'Ş',
        "gbreve" => 'ğ',
        "Gbreve" => 'Ğ',
        "inodot" => 'ı',
        "Idot" => 'İ',
        "abreve" => 'ă',
        "Abreve" => 'Ă',
        "eth" => 'ð',
        "ETH" => 'Ð',
        "thorn" => 'þ',
        "THORN" => 'Þ',
        "cent" => '¢',
        "curren" => '¤',
        "brvbar" => '¦',
        "uml" => '¨',
        "ordf" => 'ª',
        "ordm" => 'º',
        "not" => '¬',
        "macr" => '¯',
        "plusmn" => '±',
        "sup1" => '¹',
        "sup2" => '²',
        "sup3" => '³',
        "acute" => '´',
        "micro" => 'µ',
        "cedil" => '¸',
        "frac14" => '¼',
        "frac12" => '½',
        "frac34" => '¾',
        "bull" => '•',
        "dagger" => '†',
        "Dagger" => '‡',
        "permil" => '‰',
        "lsaquo" => '‹',
        "rsaquo" => '›',
        "oline" => '‾',
        "minus" => '−',
        "larr" => '←',
        "rarr" => '→',
        "uarr" => '↑',
        "darr" => '↓',
        "infin" => '∞',
        "ne" => '≠',
        "le" => '≤',
        "ge" => '≥',
        "asymp" => '≈',
        "ensp" => '\u{2002}',
        "emsp" => '\u{2003}',
        "thinsp" => '\u{2009}',
        "zwnj" => '\u{200c}',
        "zwj" => '\u{200d}',
        "lrm" => '\u{200e}',
        "rlm" => '\u{200f}',
        _ => return None,
    };
    Some(ch)
}

fn numeric_entity(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code).filter(|c| *c != '\0')
}

/// Decode HTML character references in a single pass.
///
/// Unknown or invalid references are kept verbatim, so text without
/// references is returned unchanged.
pub fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = match body.strip_prefix('#') {
                Some(numeric) => numeric_entity(numeric),
                None => named_entity(body),
            };
            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if text_width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Cut a line to at most `max_width` display columns without an ellipsis.
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out
}

pub fn text_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_and_numeric() {
        assert_eq!(
            decode_html_entities("Napoleon &amp; Josephine"),
            "Napoleon & Josephine"
        );
        assert_eq!(
            decode_html_entities("Which king&#039;s reign?"),
            "Which king's reign?"
        );
        assert_eq!(decode_html_entities("&quot;Veni&quot;"), "\"Veni\"");
        assert_eq!(decode_html_entities("caf&eacute; &#x27;x&#X27;"), "café 'x'");
        assert_eq!(decode_html_entities("&ldquo;Hi&rdquo;"), "\u{201c}Hi\u{201d}");
    }

    #[test]
    fn test_decode_marks_carons_and_greek() {
        assert_eq!(decode_html_entities("M&ecaron;sto"), "Město");
        assert_eq!(decode_html_entities("Dvo&rcaron;&aacute;k"), "Dvořák");
        assert_eq!(decode_html_entities("&Sigma; &sigma;"), "Σ σ");
        assert_eq!(decode_html_entities("&lrm;Ankara&rlm;"), "\u{200e}Ankara\u{200f}");
        assert_eq!(decode_html_entities("&frac12; &plusmn; &micro;"), "½ ± µ");
    }

    #[test]
    fn test_decode_keeps_unknown_references() {
        assert_eq!(decode_html_entities("&bogus; & more"), "&bogus; & more");
        assert_eq!(decode_html_entities("&#0;"), "&#0;");
        assert_eq!(decode_html_entities("&#xFFFFFF;"), "&#xFFFFFF;");
    }

    #[test]
    fn test_decode_is_single_pass() {
        assert_eq!(decode_html_entities("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_decode_idempotent_on_plain_text() {
        for text in [
            "Napoleon & Josephine",
            "The Treaty of Versailles (1919)",
            "Ch\u{e2}teau, <b> \"quoted\"",
        ] {
            let once = decode_html_entities(text);
            assert_eq!(once, text);
            assert_eq!(decode_html_entities(&once), once);
        }
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer sentence", 10), "a longe...");
        assert_eq!(truncate_string("日本語の文章です", 9), "日本語...");
    }

    #[test]
    fn test_clip_to_width() {
        assert_eq!(clip_to_width("abcdef", 3), "abc");
        assert_eq!(clip_to_width("ab", 5), "ab");
        assert_eq!(clip_to_width("日本", 3), "日");
    }
}
