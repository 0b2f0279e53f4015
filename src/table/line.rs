use std::borrow::Cow;

/// Field separator of aggregator output.
pub const DELIMITER: char = ',';

/// Splits one line of aggregator output into fields.
///
/// Trailing tabs are dropped and HTML entities decoded before a plain split
/// on [`DELIMITER`]; surrounding double quotes are then stripped from every
/// field. Quoting does not protect delimiters: `"a,b"` yields two fields.
pub fn split_line(line: &str) -> Vec<String> {
    let line = line.trim_end_matches('\t');
    let decoded: Cow<'_, str> = html_escape::decode_html_entities(line);
    decoded
        .split(DELIMITER)
        .map(|field| field.trim_matches('"').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decodes_entities_before_split() {
        assert_eq!(split_line("&amp;,2,3"), vec!["&", "2", "3"]);
        assert_eq!(split_line("&lt;x&gt;,&#39;y&#39;"), vec!["<x>", "'y'"]);
    }

    #[test]
    fn test_decoded_delimiter_splits() {
        assert_eq!(split_line("a&#44;b"), vec!["a", "b"]);
    }

    #[test]
    fn test_strips_enclosing_quotes() {
        assert_eq!(split_line("\"a\",\"b\",c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_delimiter_is_not_respected() {
        assert_eq!(split_line("\"x,y\",z"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_trims_trailing_tabs_only() {
        assert_eq!(split_line("\ta,b\t\t"), vec!["\ta", "b"]);
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        assert_eq!(split_line(" a , b "), vec![" a ", " b "]);
    }

    #[test]
    fn test_blank_line_is_one_empty_field() {
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_empty_trailing_field() {
        assert_eq!(split_line("a,b,"), vec!["a", "b", ""]);
    }
}
