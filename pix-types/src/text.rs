//! Pure text normalization for EMV text fields.
//!
//! Merchant name, city and description travel inside the QR payload and are
//! re-typed by bank apps; accented or exotic characters are a common cause of
//! rejected codes. Normalization here is total: any string input produces a
//! deterministic output, never an error.

/// Replaces accented Latin letters with their unaccented ASCII base letter.
///
/// Covers the Latin-1 supplement and the handful of Latin Extended-A letters
/// that occur in Brazilian names. Characters outside these ranges pass
/// through unchanged (a later filter drops anything still non-ASCII).
pub fn fold_diacritics(input: &str) -> String {
    input.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        _ => c,
    }
}

/// True for characters allowed in EMV text fields after folding: ASCII
/// letters, digits, space and a conservative punctuation set.
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == ' '
        || matches!(c, '.' | ',' | '-' | '/' | '&' | ':' | '(' | ')')
}

/// Canonicalizes free text for the merchant-name / city / description fields.
///
/// Folds diacritics, uppercases, drops disallowed characters (no placeholder
/// substitution) and collapses whitespace runs to a single space. The result
/// is plain ASCII, so byte length equals character length.
pub fn normalize_text(input: &str) -> String {
    let folded = fold_diacritics(input).to_uppercase();
    let filtered: String = folded.chars().filter(|&c| is_allowed(c)).collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates a string so its UTF-8 encoding is at most `max_bytes` long,
/// without splitting a multi-byte character. Silent and deterministic.
pub fn truncate_bytes(input: &str, max_bytes: usize) -> &str {
    if input.len() <= max_bytes {
        return input;
    }
    let mut end = max_bytes;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}

/// Keeps only ASCII digits. Used for phone and tax-id key normalization.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_diacritics() {
        assert_eq!(fold_diacritics("José Ação"), "Jose Acao");
        assert_eq!(fold_diacritics("Müller"), "Muller");
    }

    #[test]
    fn test_normalize_uppercases_and_folds() {
        assert_eq!(normalize_text("José Ä"), "JOSE A");
        assert_eq!(normalize_text("São Paulo"), "SAO PAULO");
    }

    #[test]
    fn test_normalize_drops_disallowed_chars() {
        assert_eq!(normalize_text("Loja & Cia"), "LOJA & CIA");
        assert_eq!(normalize_text("Pagamento nº 123 - Referência"), "PAGAMENTO N 123 - REFERENCIA");
        assert_eq!(normalize_text("emoji 🎉 gone"), "EMOJI GONE");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  a \t b\n c  "), "A B C");
    }

    #[test]
    fn test_truncate_bytes_respects_char_boundary() {
        // 'í' is two bytes in UTF-8; cutting at 5 must not split it
        assert_eq!(truncate_bytes("açaí", 5), "aça");
        assert_eq!(truncate_bytes("açaí", 3), "aç");
        assert_eq!(truncate_bytes("abcdef", 4), "abcd");
        assert_eq!(truncate_bytes("abc", 10), "abc");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("+55 (11) 99999-9999"), "5511999999999");
        assert_eq!(digits_only("123.456.789-09"), "12345678909");
    }
}
