use std::sync::Arc;

pub const HELP_TEXT: &str = "host: provide a hostname or an IP and I'll look it up for you. \
You can also provide multiple hostnames or IP's as long as they are separated by spaces.";

const HELP_SUBCOMMAND: &str = "help";

/// A parsed `host` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Help,
    Lookup(Vec<Arc<str>>),
}

impl HostCommand {
    /// Splits the argument string on any run of whitespace.
    ///
    /// No tokens, or `help` as the first token, yields `Help`.
    pub fn parse(args: &str) -> Self {
        let tokens: Vec<Arc<str>> = args.split_whitespace().map(Arc::from).collect();

        let is_help = tokens
            .first()
            .map_or(true, |first| &**first == HELP_SUBCOMMAND);

        if is_help {
            HostCommand::Help
        } else {
            HostCommand::Lookup(tokens)
        }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::parse(&joined)
    }

    pub fn tokens(&self) -> &[Arc<str>] {
        match self {
            HostCommand::Help => &[],
            HostCommand::Lookup(tokens) => tokens,
        }
    }

    /// Number of replies this command produces.
    pub fn reply_count(&self) -> usize {
        match self {
            HostCommand::Help => 1,
            HostCommand::Lookup(tokens) => tokens.len(),
        }
    }
}
