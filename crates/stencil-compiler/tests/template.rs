//! End-to-end lexing of a realistic template document, plus the JSON
//! interchange shape of the resulting token stream.

use stencil_compiler::{tokenize, Token, TokenKind};

const TEMPLATE: &str = r#"{@
    import config
    config.set("editor", "subl")

    import run
    linux_script = "/virtualenv/bin/python"
    windows_script = "C:\\virtualenv/bin/python"
    if os.get_name() == "Windows":
        run.bind(windows_script, "bin/script.py")
    elif os.get_name() == "Linux":
        run.bind(linux_script, "bin/script")
    else:
        run.log("unknown platform")
    end
@}

interpreter: {{ linux_script }}
"#;

fn lex(source: &str) -> Vec<Token> {
    tokenize(source).expect("unexpected lex error")
}

#[test]
fn full_template_token_sequence() {
    let tokens = lex(TEMPLATE);

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenCode,
            // import config
            TokenKind::Import,
            TokenKind::Identifier,
            // config.set("editor", "subl")
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::StringLiteral,
            TokenKind::Comma,
            TokenKind::StringLiteral,
            TokenKind::RParen,
            // import run
            TokenKind::Import,
            TokenKind::Identifier,
            // linux_script = "..."
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::StringLiteral,
            // windows_script = "..."
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::StringLiteral,
            // if os.get_name() == "Windows":
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::ComparisonOperator,
            TokenKind::StringLiteral,
            TokenKind::Colon,
            // run.bind(windows_script, "bin/script.py")
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::StringLiteral,
            TokenKind::RParen,
            // elif os.get_name() == "Linux":
            TokenKind::Elif,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::ComparisonOperator,
            TokenKind::StringLiteral,
            TokenKind::Colon,
            // run.bind(linux_script, "bin/script")
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::StringLiteral,
            TokenKind::RParen,
            // else:
            TokenKind::Else,
            TokenKind::Colon,
            // run.log("unknown platform")
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::StringLiteral,
            TokenKind::RParen,
            // end
            TokenKind::End,
            TokenKind::CloseCode,
            // literal text between the blocks
            TokenKind::TextBlock,
            TokenKind::OpenReference,
            TokenKind::Identifier,
            TokenKind::CloseReference,
            TokenKind::TextBlock,
        ]
    );

    // Verbatim string content, backslashes included.
    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::StringLiteral)
        .map(|t| t.value.as_text().unwrap())
        .collect();
    assert_eq!(strings[2], "/virtualenv/bin/python");
    assert_eq!(strings[3], r"C:\\virtualenv/bin/python");

    let text_blocks: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::TextBlock)
        .map(|t| t.value.as_text().unwrap())
        .collect();
    assert_eq!(text_blocks, vec!["\n\ninterpreter: ", "\n"]);
}

#[test]
fn token_stream_serializes_to_json() {
    let tokens = lex("{@ n = 3 @}");
    let json = serde_json::to_value(&tokens).expect("serialization failed");

    let arr = json.as_array().expect("expected a JSON array");
    assert_eq!(arr.len(), 5);
    assert_eq!(arr[1]["kind"], "Identifier");
    assert_eq!(arr[1]["value"], "n");
    // Integer literals carry the numeric value, not source text.
    assert_eq!(arr[3]["kind"], "IntegerLiteral");
    assert_eq!(arr[3]["value"], 3);
    assert_eq!(arr[0]["span"]["start"]["offset"], 0);

    let back: Vec<Token> = serde_json::from_value(json).expect("deserialization failed");
    assert_eq!(back, tokens);
}

#[test]
fn error_position_points_into_later_lines() {
    let err = tokenize("text\n{@\n  a = ~1\n@}").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unsupported character '~'"), "{message}");
    assert!(message.contains("3:7"), "{message}");
}

#[test]
fn tokenizing_rejects_nothing_outside_code_blocks() {
    // Arbitrary punctuation is fine as literal text and inside references.
    let tokens = lex("~!#$% {{ ~!#$% }} ~!#$%");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::TextBlock,
            TokenKind::OpenReference,
            TokenKind::CloseReference,
            TokenKind::TextBlock,
        ]
    );
}
