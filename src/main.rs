//! docquill - selection formatting and template-aware word suggestions.
//!
//! # Usage
//!
//! ```bash
//! docquill bold letter.md --start 5 --end 12
//! docquill --dict fields.json suggest letter.md --caret 40
//! docquill complete letter.md --caret 40 --word applicant_name
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use serde::Serialize;

use docquill::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use docquill::editor::{NoOverlay, Selection, TextArea, TextSurface};
use docquill::format::{Marker, apply_marker};
use docquill::help::FORMATTING_HELP_HTML;
use docquill::session::{DEFAULT_SUGGESTION_LIMIT, EditorSession};
use docquill::suggest::{Dictionary, Metadata, Suggestion};
use docquill::template::{TagDetection, TemplateScope};

/// Selection formatting and template-aware word suggestions
#[derive(Parser, Debug)]
#[command(name = "docquill", version, about, long_about = None)]
struct Cli {
    /// JSON or JSON5 dictionary mapping words to details
    #[arg(long, global = true, value_name = "PATH")]
    dict: Option<PathBuf>,

    /// Where word suggestions are allowed relative to template tags
    #[arg(long, global = true, value_enum)]
    scope: Option<TemplateScope>,

    /// How open template tags are detected
    #[arg(long, global = true, value_enum)]
    detect: Option<TagDetection>,

    /// Maximum number of suggestions to print
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Save current command-line flags as defaults
    #[arg(long, global = true)]
    save: bool,

    /// Clear saved defaults
    #[arg(long, global = true)]
    clear: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Wrap a selection in `**` markers
    Bold(FormatArgs),
    /// Wrap a selection in `_` markers
    Italic(FormatArgs),
    /// Print the word at the caret, empty if suggestions are suppressed there
    Word(CaretArgs),
    /// Print dictionary completions for the word at the caret
    Suggest(CaretArgs),
    /// Replace the word at the caret
    Complete(CompleteArgs),
    /// Print the formatting help fragment
    Formatting,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Selection start (char offset)
    #[arg(long)]
    start: usize,

    /// Selection end (char offset)
    #[arg(long)]
    end: usize,

    /// Print text and selection as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CaretArgs {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Caret position (char offset); defaults to the end of the text
    #[arg(long)]
    caret: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompleteArgs {
    #[command(flatten)]
    at: CaretArgs,

    /// Word that replaces the one at the caret
    #[arg(long)]
    word: String,
}

#[derive(Serialize)]
struct EditOutput {
    text: String,
    selection: Selection,
    changed: bool,
}

#[derive(Serialize)]
struct WordOutput<'a> {
    word: &'a str,
    suggestions: &'a [Suggestion],
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_dictionary(flags: &ConfigFlags) -> Result<Dictionary<Metadata>> {
    let Some(path) = &flags.dict else {
        anyhow::bail!("No dictionary configured; pass --dict PATH or save one with --save");
    };
    Dictionary::load(path).with_context(|| format!("Loading {}", path.display()))
}

fn session_at(
    args: &CaretArgs,
    flags: &ConfigFlags,
    dictionary: Dictionary<Metadata>,
) -> Result<EditorSession<TextArea, Metadata>> {
    let text = read_input(&args.input)?;
    let area = match args.caret {
        Some(caret) => TextArea::with_caret(&text, caret),
        None => TextArea::with_caret_at_end(&text),
    };
    Ok(EditorSession::new(area, dictionary)
        .with_guard(flags.guard())
        .with_limit(flags.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT)))
}

fn print_edit(area: &TextArea, changed: bool, json: bool) -> Result<()> {
    if json {
        let output = EditOutput {
            text: area.text(),
            selection: area.selection(),
            changed,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", area.text());
    }
    Ok(())
}

/// Wrap `[start, end)` of `text`; a reversed pair is normalized.
fn wrap_text(text: &str, start: usize, end: usize, marker: Marker) -> (TextArea, bool) {
    let mut area = TextArea::with_selection(text, start, end);
    let changed = apply_marker(&mut area, &mut NoOverlay, marker);
    (area, changed)
}

fn format_file(args: &FormatArgs, marker: Marker) -> Result<()> {
    let text = read_input(&args.input)?;
    let (area, changed) = wrap_text(&text, args.start, args.end, marker);
    print_edit(&area, changed, args.json)
}

fn run(command: Command, flags: &ConfigFlags) -> Result<()> {
    match command {
        Command::Bold(args) => format_file(&args, Marker::Bold),
        Command::Italic(args) => format_file(&args, Marker::Italic),
        Command::Word(args) => {
            let session = session_at(&args, flags, Dictionary::new())?;
            let word = session.current_word();
            if args.json {
                let output = WordOutput {
                    word: &word,
                    suggestions: &[],
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{word}");
            }
            Ok(())
        }
        Command::Suggest(args) => {
            let mut session = session_at(&args, flags, load_dictionary(flags)?)?;
            session.refresh_suggestions();
            let items = session.rendered_suggestions().items();
            if args.json {
                let word = session.current_word();
                let output = WordOutput {
                    word: &word,
                    suggestions: items,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                for item in items {
                    println!("{}\t{}", item.word, item.detail);
                }
            }
            Ok(())
        }
        Command::Complete(args) => {
            let mut session = session_at(&args.at, flags, Dictionary::new())?;
            session.replace_current_word(&args.word);
            print_edit(session.surface(), session.surface().is_dirty(), args.at.json)
        }
        Command::Formatting => {
            print!("{FORMATTING_HELP_HTML}");
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "resolved configuration");

    match cli.command {
        Some(command) => run(command, &effective),
        None if cli.save || cli.clear => Ok(()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
