//! `trie` command-line tool: load a word list and query it.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use libtrie::{load_wordlist, Trie};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(version, about = "Query a word list through a prefix tree")]
struct Cli {
    /// Word list to load, one word per line. Lines starting with '#' are ignored.
    #[arg(short, long, env = "TRIE_WORDLIST")]
    wordlist: PathBuf,

    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Print whether WORD is in the list.
    Search { word: String },
    /// Print every word starting with PREFIX.
    Prefix { prefix: String },
    /// Print every word ending with SUFFIX.
    Suffix { suffix: String },
    /// Print the completions of PREFIX.
    Complete { prefix: String },
    /// Print word and node counts.
    Stats,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn execute(command: &Command, trie: &Trie, out: &mut impl Write) -> io::Result<()> {
    let words = match command {
        Command::Search { word } => return writeln!(out, "{}", trie.search(word)),
        Command::Stats => {
            writeln!(out, "words: {}", trie.len())?;
            return writeln!(out, "nodes: {}", trie.node_count());
        }
        Command::Prefix { prefix } => trie.starts_with(prefix),
        Command::Suffix { suffix } => trie.ends_with(suffix),
        Command::Complete { prefix } => trie.autocomplete(prefix),
    };
    for word in words {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<Trie> {
    let started = Instant::now();
    let trie =
        load_wordlist(path).with_context(|| format!("could not load {}", path.display()))?;
    debug!(elapsed = ?started.elapsed(), "word list ready");
    Ok(trie)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let trie = load(&cli.wordlist)?;
    let mut out = io::stdout().lock();
    execute(&cli.command, &trie, &mut out)?;
    out.flush()?;
    Ok(())
}
