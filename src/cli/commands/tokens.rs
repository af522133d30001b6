//! Shows how a template is split, which is the quickest way to spot a typo
//! in a tag name or a template that runs past the token capacity.

use crate::fmt::{FormatTemplate, MAX_TOKENS, Token};
use std::process::ExitCode;

/// One-line description of a token, e.g. `Text "[ "` or `Color RED_BG`.
#[must_use]
pub fn describe_token(template: &FormatTemplate, token: &Token) -> String {
    match *token {
        Token::Text { .. } => format!("Text {:?}", template.text(token)),
        Token::Style(style) => format!("Style {}", style.tag_name()),
        Token::Color(spec) => {
            let mut name = spec.color.tag_name().to_string();
            if spec.high_intensity {
                name.push_str("_HI");
            }
            if spec.background {
                name.push_str("_BG");
            }
            format!("Color {name}")
        }
        Token::Func => "Func".to_string(),
        Token::File => "File".to_string(),
        Token::Line => "Line".to_string(),
        Token::Task => "Task".to_string(),
        Token::Core => "Core".to_string(),
        Token::Level => "Level".to_string(),
        Token::Timestamp => "Timestamp".to_string(),
        Token::Message => "Message".to_string(),
        Token::End => "End".to_string(),
    }
}

#[must_use]
pub fn cmd_tokens(template: &str) -> ExitCode {
    let parsed = FormatTemplate::parse(template.to_string());
    let tokens = parsed.tokens();

    println!("Template: {template:?}");
    for (i, token) in tokens.iter().enumerate() {
        println!("{i:>3}  {}", describe_token(&parsed, token));
    }
    if tokens.len() == MAX_TOKENS {
        println!("(token capacity of {MAX_TOKENS} reached; anything further is ignored)");
    }
    ExitCode::SUCCESS
}
