//! Minimal Python scanner for read-only previews.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Comment,
    Keyword,
    Builtin,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

pub const KEYWORDS: &[&str] = &[
    "def", "class", "import", "from", "return", "try", "except", "if", "else", "for", "while",
    "in", "and", "or", "not",
];

pub const BUILTINS: &[&str] = &["self", "True", "False", "None"];

/// Splits `code` into lines of tokens. Joining a line's token texts gives
/// back the line exactly.
pub fn highlight_python(code: &str) -> Vec<Vec<Token>> {
    let mut open_triple: Option<char> = None;
    code.lines()
        .map(|line| scan_line(line, &mut open_triple))
        .collect()
}

fn scan_line(line: &str, open_triple: &mut Option<char>) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if let Some(quote) = *open_triple {
            match find_triple(&chars, i, quote) {
                Some(end) => {
                    push(&mut tokens, TokenKind::String, &chars[i..end]);
                    *open_triple = None;
                    i = end;
                }
                None => {
                    push(&mut tokens, TokenKind::String, &chars[i..]);
                    break;
                }
            }
            continue;
        }

        let c = chars[i];
        if c == '#' {
            push(&mut tokens, TokenKind::Comment, &chars[i..]);
            break;
        }

        if c == '"' || c == '\'' {
            if is_triple(&chars, i, c) {
                match find_triple(&chars, i + 3, c) {
                    Some(end) => {
                        push(&mut tokens, TokenKind::String, &chars[i..end]);
                        i = end;
                    }
                    None => {
                        push(&mut tokens, TokenKind::String, &chars[i..]);
                        *open_triple = Some(c);
                        break;
                    }
                }
            } else {
                let end = find_quote(&chars, i + 1, c);
                push(&mut tokens, TokenKind::String, &chars[i..end]);
                i = end;
            }
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let kind = if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else if BUILTINS.contains(&word.as_str()) {
                TokenKind::Builtin
            } else {
                TokenKind::Plain
            };
            push(&mut tokens, kind, &chars[start..i]);
            continue;
        }

        push(&mut tokens, TokenKind::Plain, &chars[i..i + 1]);
        i += 1;
    }

    tokens
}

fn is_triple(chars: &[char], at: usize, quote: char) -> bool {
    chars.len() >= at + 3 && chars[at..at + 3].iter().all(|&c| c == quote)
}

/// Index just past the closing triple quote, if it is on this line.
fn find_triple(chars: &[char], from: usize, quote: char) -> Option<usize> {
    let mut i = from;
    while i + 3 <= chars.len() {
        if chars[i] == '\\' {
            i += 2;
            continue;
        }
        if is_triple(chars, i, quote) {
            return Some(i + 3);
        }
        i += 1;
    }
    None
}

/// Index just past the closing quote, or the line end for unterminated strings.
fn find_quote(chars: &[char], from: usize, quote: char) -> usize {
    let mut i = from;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

fn push(tokens: &mut Vec<Token>, kind: TokenKind, chars: &[char]) {
    if chars.is_empty() {
        return;
    }
    match tokens.last_mut() {
        Some(last) if last.kind == kind && kind == TokenKind::Plain => {
            last.text.extend(chars.iter());
        }
        _ => tokens.push(Token {
            kind,
            text: chars.iter().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &[Token]) -> Vec<(TokenKind, &str)> {
        line.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn keywords_match_whole_words_only() {
        let lines = highlight_python("information = format(self)");
        assert_eq!(
            kinds(&lines[0]),
            vec![
                (TokenKind::Plain, "information = format("),
                (TokenKind::Builtin, "self"),
                (TokenKind::Plain, ")"),
            ]
        );
    }

    #[test]
    fn hash_inside_string_is_not_a_comment() {
        let lines = highlight_python(r#"x = "a # b"  # real"#);
        assert_eq!(
            kinds(&lines[0]),
            vec![
                (TokenKind::Plain, "x = "),
                (TokenKind::String, "\"a # b\""),
                (TokenKind::Plain, "  "),
                (TokenKind::Comment, "# real"),
            ]
        );
    }

    #[test]
    fn escaped_quotes_stay_inside_string() {
        let lines = highlight_python(r#"print("say \"hi\"")"#);
        assert_eq!(lines[0][1].kind, TokenKind::String);
        assert_eq!(lines[0][1].text, r#""say \"hi\"""#);
    }

    #[test]
    fn triple_quoted_strings_span_lines() {
        let code = "\"\"\"\nSistema RPC # not a comment\n\"\"\"\ndef main():";
        let lines = highlight_python(code);
        assert_eq!(lines[1], vec![Token { kind: TokenKind::String, text: "Sistema RPC # not a comment".into() }]);
        assert_eq!(lines[2][0].kind, TokenKind::String);
        assert_eq!(lines[3][0].kind, TokenKind::Keyword);
    }

    #[test]
    fn tokens_rebuild_each_line() {
        let code = include_str!("../assets/servidor.py");
        for (line, tokens) in code.lines().zip(highlight_python(code)) {
            let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(rebuilt, line);
        }
    }
}
