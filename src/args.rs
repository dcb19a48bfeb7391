/// Raw argument triple before visibility validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub visibility: String,
    pub file_extension: String,
    pub description: String,
}

/// Splits the trailing command arguments into visibility, file extension and
/// description.
///
/// Three or more words: the third word and everything after it form the
/// description, joined by single spaces. Exactly two words: visibility and
/// extension. Anything else that is non-empty is taken verbatim as the
/// visibility. Missing parts keep their defaults.
pub fn parse_args(args: &str, defaults: ParsedArgs) -> ParsedArgs {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    match tokens.as_slice() {
        [visibility, file_extension, rest @ ..] if !rest.is_empty() => ParsedArgs {
            visibility: visibility.to_string(),
            file_extension: file_extension.to_string(),
            description: rest.join(" "),
        },
        [visibility, file_extension] => ParsedArgs {
            visibility: visibility.to_string(),
            file_extension: file_extension.to_string(),
            ..defaults
        },
        _ if !args.is_empty() => ParsedArgs {
            visibility: args.to_string(),
            ..defaults
        },
        _ => defaults,
    }
}
