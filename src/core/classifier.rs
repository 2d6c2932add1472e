// Works out which command a log line is about
//
// Signatures are checked top to bottom and the first hit wins. Order matters:
// "cargo build --target ./cd-utils" has to land in cargo, not navigate.

use regex::Regex;
use std::fmt;

/// The fixed command vocabulary, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandCategory {
    Cargo,
    Git,
    Editor,
    List,
    Navigate,
    SearchText,
    SearchFiles,
    ReadFile,
}

impl CommandCategory {
    pub const ALL: [CommandCategory; 8] = [
        CommandCategory::Cargo,
        CommandCategory::Git,
        CommandCategory::Editor,
        CommandCategory::List,
        CommandCategory::Navigate,
        CommandCategory::SearchText,
        CommandCategory::SearchFiles,
        CommandCategory::ReadFile,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommandCategory::Cargo => "cargo",
            CommandCategory::Git => "git",
            CommandCategory::Editor => "editor",
            CommandCategory::List => "list",
            CommandCategory::Navigate => "navigate",
            CommandCategory::SearchText => "search-text",
            CommandCategory::SearchFiles => "search-files",
            CommandCategory::ReadFile => "read-file",
        }
    }

    /// Counts toward the exploration total
    pub fn is_exploration(&self) -> bool {
        matches!(
            self,
            CommandCategory::List | CommandCategory::SearchFiles | CommandCategory::SearchText
        )
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// (category, pattern). A capture group, when present, is the operation
// (cargo subcommand, git subcommand, which editor).
const SIGNATURES: &[(CommandCategory, &str)] = &[
    (CommandCategory::Cargo, r"cargo\s+(build|run|test|check|clippy)"),
    (CommandCategory::Git, r"git\s+(add|commit|push|pull|status|diff|log)"),
    (CommandCategory::Editor, r"\b(vim|nvim|code)\b"),
    (CommandCategory::List, r"\bls\b"),
    (CommandCategory::Navigate, r"\bcd\s+\S"),
    (CommandCategory::SearchText, r"\bgrep\b"),
    (CommandCategory::SearchFiles, r"\bfind\b"),
    (CommandCategory::ReadFile, r"\bcat\b"),
];

/// One entry of the rule table
#[derive(Debug, Clone)]
pub struct CommandSignature {
    pub category: CommandCategory,
    pub pattern: Regex,
}

impl CommandSignature {
    /// Returns the captured operation if the signature has one, `Some(None)`
    /// on a plain match, `None` on no match.
    fn evaluate(&self, line: &str) -> Option<Option<String>> {
        let caps = self.pattern.captures(line)?;
        Some(caps.get(1).map(|m| m.as_str().to_string()))
    }
}

/// Result of classifying a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: CommandCategory,
    pub operation: Option<String>,
}

pub struct CommandClassifier {
    signatures: Vec<CommandSignature>,
}

impl CommandClassifier {
    pub fn new() -> Self {
        // Build all the regexes once so we don't recompile them per line
        let signatures = SIGNATURES
            .iter()
            .filter_map(|(category, pattern)| {
                Regex::new(pattern).ok().map(|pattern| CommandSignature {
                    category: *category,
                    pattern,
                })
            })
            .collect();

        Self { signatures }
    }

    pub fn signatures(&self) -> &[CommandSignature] {
        &self.signatures
    }

    /// First matching signature wins. `None` means the line is unclassified.
    pub fn classify(&self, line: &str) -> Option<Classification> {
        self.signatures.iter().find_map(|signature| {
            signature
                .evaluate(line)
                .map(|operation| Classification {
                    category: signature.category,
                    operation,
                })
        })
    }
}

impl Default for CommandClassifier {
    fn default() -> Self {
        Self::new()
    }
}
