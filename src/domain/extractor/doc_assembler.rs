//! Raw-comment-to-`DocComment` assembly (spec.md §4.6): a Doxygen-command
//! aware parser recognizing `@brief`/`\brief`, `@returns`, `@param [dir]
//! name`, `@tparam`, `@pre`, `@post`, `@see`, `@relates`/`@related`,
//! `@throws`, `@note`/`@warning`, and `@code`/`@endcode` fenced blocks.
//! Grounded on `original_source/`'s comment-command table (the set of
//! commands `ASTVisitor.cpp` forwards into its own doc-comment model),
//! reimplemented here as a line-oriented state machine rather than a full
//! Doxygen-grammar parser, since spec.md scopes doc parsing to this
//! command subset.

use crate::domain::doc::{Block, DocComment, Inline, ParamDirection};

/// One raw line's command, if it opens a new block; `None` for a
/// continuation line that extends whatever block came before.
enum Command<'a> {
    Brief(&'a str),
    Returns(&'a str),
    Param { direction: ParamDirection, name: &'a str, rest: &'a str },
    TParam { name: &'a str, rest: &'a str },
    Pre(&'a str),
    Post(&'a str),
    See(&'a str),
    Relates(&'a str),
    Related(&'a str),
    Throws { exception_type: &'a str, rest: &'a str },
    Admonition { kind: &'a str, rest: &'a str },
    CodeOpen(Option<&'a str>),
    CodeClose,
    Text(&'a str),
}

fn strip_comment_markers(line: &str) -> &str {
    line.trim()
        .trim_start_matches("/**")
        .trim_start_matches("/*!")
        .trim_start_matches("///")
        .trim_start_matches("//!")
        .trim_end_matches("*/")
        .trim_start_matches('*')
        .trim()
}

fn strip_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    line.strip_prefix(&format!("@{tag}"))
        .or_else(|| line.strip_prefix(&format!("\\{tag}")))
        .map(|rest| rest.trim())
}

fn classify(line: &str) -> Command<'_> {
    if let Some(rest) = strip_tag(line, "brief") {
        return Command::Brief(rest);
    }
    if let Some(rest) = strip_tag(line, "returns").or_else(|| strip_tag(line, "return")) {
        return Command::Returns(rest);
    }
    if let Some(rest) = strip_tag(line, "tparam") {
        let (name, rest) = split_first_word(rest);
        return Command::TParam { name, rest };
    }
    if let Some(rest) = strip_tag(line, "param") {
        return classify_param(rest);
    }
    if let Some(rest) = strip_tag(line, "pre") {
        return Command::Pre(rest);
    }
    if let Some(rest) = strip_tag(line, "post") {
        return Command::Post(rest);
    }
    if let Some(rest) = strip_tag(line, "see") {
        return Command::See(rest);
    }
    if let Some(rest) = strip_tag(line, "relates") {
        return Command::Relates(rest);
    }
    if let Some(rest) = strip_tag(line, "related") {
        return Command::Related(rest);
    }
    if let Some(rest) = strip_tag(line, "throws").or_else(|| strip_tag(line, "throw")) {
        let (exception_type, rest) = split_first_word(rest);
        return Command::Throws { exception_type, rest };
    }
    if let Some(rest) = strip_tag(line, "note") {
        return Command::Admonition { kind: "note", rest };
    }
    if let Some(rest) = strip_tag(line, "warning") {
        return Command::Admonition { kind: "warning", rest };
    }
    if let Some(rest) = strip_tag(line, "code") {
        let language = if rest.is_empty() { None } else { Some(rest) };
        return Command::CodeOpen(language);
    }
    if strip_tag(line, "endcode").is_some() {
        return Command::CodeClose;
    }
    Command::Text(line)
}

fn classify_param(rest: &str) -> Command<'_> {
    let (first, after_first) = split_first_word(rest);
    let (direction, name, tail) = match first {
        "[in]" => {
            let (n, t) = split_first_word(after_first);
            (ParamDirection::In, n, t)
        }
        "[out]" => {
            let (n, t) = split_first_word(after_first);
            (ParamDirection::Out, n, t)
        }
        "[in,out]" | "[out,in]" | "[inout]" => {
            let (n, t) = split_first_word(after_first);
            (ParamDirection::InOut, n, t)
        }
        _ => (ParamDirection::In, first, after_first),
    };
    Command::Param { direction, name, rest: tail }
}

fn split_first_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (s, ""),
    }
}

fn text_inlines(s: &str) -> Vec<Inline> {
    if s.is_empty() {
        vec![]
    } else {
        vec![Inline::Text(s.to_string())]
    }
}

/// Assembles one raw comment string (with comment-syntax markers still
/// attached) into a structured [`DocComment`].
pub fn assemble(raw: &str) -> DocComment {
    let mut blocks: Vec<Block> = Vec::new();
    let mut relates = Vec::new();
    let mut related = Vec::new();
    let mut in_code: Option<(Option<String>, String)> = None;

    for raw_line in raw.lines() {
        let line = strip_comment_markers(raw_line);
        if let Some((language, text)) = &mut in_code {
            if matches!(classify(line), Command::CodeClose) {
                blocks.push(Block::CodeBlock {
                    language: language.take(),
                    text: text.trim_end().to_string(),
                });
                in_code = None;
            } else {
                text.push_str(raw_line.trim_end());
                text.push('\n');
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        match classify(line) {
            Command::Brief(rest) => blocks.push(Block::Brief(text_inlines(rest))),
            Command::Returns(rest) => blocks.push(Block::Returns(text_inlines(rest))),
            Command::TParam { name, rest } => {
                blocks.push(Block::TParam { name: name.to_string(), content: text_inlines(rest) })
            }
            Command::Param { direction, name, rest } => blocks.push(Block::Param {
                name: name.to_string(),
                direction,
                content: text_inlines(rest),
            }),
            Command::Pre(rest) => blocks.push(Block::Precondition(text_inlines(rest))),
            Command::Post(rest) => blocks.push(Block::Postcondition(text_inlines(rest))),
            Command::See(rest) => blocks.push(Block::See(text_inlines(rest))),
            Command::Relates(rest) => relates.push((rest.to_string(), None)),
            Command::Related(rest) => related.push((rest.to_string(), None)),
            Command::Throws { exception_type, rest } => blocks.push(Block::Throws {
                exception_type: exception_type.to_string(),
                content: text_inlines(rest),
            }),
            Command::Admonition { kind, rest } => {
                blocks.push(Block::Admonition { kind: kind.to_string(), content: text_inlines(rest) })
            }
            Command::CodeOpen(language) => {
                in_code = Some((language.map(str::to_string), String::new()));
            }
            Command::CodeClose => {}
            Command::Text(text) => blocks.push(Block::Paragraph(text_inlines(text))),
        }
    }

    DocComment { blocks, relates, related }
}
