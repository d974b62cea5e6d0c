//! JSON with comments（JSONC）を素の JSON に変換する
//!
//! `//` 行コメントと `/* */` ブロックコメントを除き、`}` / `]` 直前の末尾カンマを落とす。
//! 文字列リテラルの中身には触れない。

/// コメントと末尾カンマを取り除いた JSON テキストを返す
///
/// 改行は残すので、serde_json のエラー行番号は元ファイルと一致する。
pub fn strip_jsonc(input: &str) -> String {
    remove_trailing_commas(&strip_comments(input))
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                for n in chars.by_ref() {
                    if n == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for n in chars.by_ref() {
                    if prev == '*' && n == '/' {
                        break;
                    }
                    if n == '\n' {
                        out.push('\n');
                    }
                    prev = n;
                }
                // トークンが連結しないよう区切りを入れる
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

fn remove_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|n| !n.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                i += 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(s: &str) -> Value {
        serde_json::from_str(&strip_jsonc(s)).unwrap()
    }

    #[test]
    fn test_line_and_block_comments() {
        let src = r#"{
  // 行コメント
  "enabled": true, /* ブロック
     複数行 */
  "keepTurns": 2
}"#;
        assert_eq!(parse(src), json!({ "enabled": true, "keepTurns": 2 }));
    }

    #[test]
    fn test_trailing_commas() {
        let src = "{ \"a\": [1, 2, ], \"b\": { \"c\": 1, },\n}";
        assert_eq!(parse(src), json!({ "a": [1, 2], "b": { "c": 1 } }));
    }

    #[test]
    fn test_comment_markers_inside_strings_are_kept() {
        let src = r#"{ "url": "http://example.com/*x*/", "q": "say \"//hi\",}" }"#;
        assert_eq!(
            parse(src),
            json!({ "url": "http://example.com/*x*/", "q": "say \"//hi\",}" })
        );
    }

    #[test]
    fn test_line_numbers_preserved() {
        let src = "// a\n/* b\nc */\n{}";
        assert_eq!(strip_jsonc(src).lines().count(), src.lines().count());
    }
}
