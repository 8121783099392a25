//! Command vocabulary for the file manager
//!
//! A fixed table maps every verb to its arity and help row. Routing and the
//! `help` listing both read this table.

/// The fixed set of verbs a session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    List,
    Cd,
    View,
    Mkdir,
    Copy,
    Move,
    Help,
    Exit,
}

/// One row of the verb table
#[derive(Debug, Clone, Copy)]
pub struct VerbInfo {
    pub name: &'static str,
    pub verb: Verb,
    /// Number of positional arguments the verb consumes
    pub arity: usize,
    pub usage: &'static str,
    pub description: &'static str,
}

// Verb table, in help order
pub const VERBS: &[VerbInfo] = &[
    VerbInfo {
        name: "list",
        verb: Verb::List,
        arity: 0,
        usage: "list",
        description: "List the contents of the current directory",
    },
    VerbInfo {
        name: "cd",
        verb: Verb::Cd,
        arity: 1,
        usage: "cd <path>",
        description: "Change the current directory",
    },
    VerbInfo {
        name: "view",
        verb: Verb::View,
        arity: 1,
        usage: "view <file>",
        description: "View the contents of a file",
    },
    VerbInfo {
        name: "mkdir",
        verb: Verb::Mkdir,
        arity: 1,
        usage: "mkdir <dir>",
        description: "Create a new directory",
    },
    VerbInfo {
        name: "copy",
        verb: Verb::Copy,
        arity: 2,
        usage: "copy <src> <dst>",
        description: "Copy a file",
    },
    VerbInfo {
        name: "move",
        verb: Verb::Move,
        arity: 2,
        usage: "move <src> <dst>",
        description: "Move a file",
    },
    VerbInfo {
        name: "help",
        verb: Verb::Help,
        arity: 0,
        usage: "help",
        description: "Show this list of commands",
    },
    VerbInfo {
        name: "exit",
        verb: Verb::Exit,
        arity: 0,
        usage: "exit",
        description: "Exit the file manager",
    },
];

impl Verb {
    /// Look up a verb by its exact, case-sensitive name
    pub fn from_name(name: &str) -> Option<Verb> {
        VERBS.iter().find(|info| info.name == name).map(|info| info.verb)
    }

    /// The table row for this verb
    pub fn info(self) -> &'static VerbInfo {
        let row = match self {
            Verb::List => 0,
            Verb::Cd => 1,
            Verb::View => 2,
            Verb::Mkdir => 3,
            Verb::Copy => 4,
            Verb::Move => 5,
            Verb::Help => 6,
            Verb::Exit => 7,
        };
        &VERBS[row]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn arity(self) -> usize {
        self.info().arity
    }
}

/// A parsed command: a verb plus exactly `verb.arity()` arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub verb: Verb,
    pub args: Vec<String>,
}

impl Command {
    /// Create a command, checking the argument count against the verb
    pub fn new(verb: Verb, args: Vec<String>) -> Option<Self> {
        if args.len() == verb.arity() {
            Some(Self { verb, args })
        } else {
            None
        }
    }

    /// Argument `index`; callers only index below `verb.arity()`
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Render the help table, one line per verb
pub fn help_lines() -> Vec<String> {
    let width = VERBS.iter().map(|info| info.usage.len()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(VERBS.len() + 1);
    lines.push("Commands:".to_string());
    for info in VERBS {
        lines.push(format!(
            "  {:<width$} - {}",
            info.usage,
            info.description,
            width = width
        ));
    }
    lines
}
