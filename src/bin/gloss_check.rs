//! Find the candidates for the glossary in Word documents.
//!
//! Usage:
//!   gloss_check [OPTIONS] DOCS...
//!
//! Run with --help for the full option list.

use gloss_check::capabilities::{Capabilities, HunspellSpellCheck, SpellCheck};
use gloss_check::config::{self, ExtractOptions, LANG_NONE};
use gloss_check::output::format_entries;
use gloss_check::pipeline::{load_glossaries, process_documents};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Find the candidates for the glossary in Word documents.

Usage: gloss_check [OPTIONS] DOCS...

Options:
  -M, --min-acc <N>        Minimum length for a possible glossary entry (1-8)
  -u, --upper-only         Only consider all-uppercase strings (may end with s)
  -c, --chars-only         Exclude words with embedded numbers or symbols
  -k, --inc-camel          Include any word with upper case after the first letter
  -1, --one-per-line       Display results in a single column
  -t, --table-gloss        Search each document for possible glossary tables
  -gu, --glossary-unused   Show unused entries from the glossary
                           (document glossary with -t)
  -l, --lang <CODE>        Language code to spell check against, or NONE
  -e, --etok               Use the language-aware tokenizer when available
  -g, --glossary <FILE>    An existing glossary to ignore (repeatable)
      --max-candidates <N> Fail the run when a document exceeds N candidates
      --max-unused <N>     Fail the run when a document leaves > N entries unused
      --save-config        Save the selected options as defaults
      --reset-config       Clear any saved configuration
  -ll, --list-langs        List the available language codes and exit
  -v, --version            Show version information and exit
  -h, --help               Show this help and exit
";

struct Cli {
    options: ExtractOptions,
    glossary_files: Vec<PathBuf>,
    docs: Vec<PathBuf>,
    save_config: bool,
    reset_config: bool,
    list_langs: bool,
    version: bool,
}

impl Cli {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut cli = Cli {
            options: config::load_config(),
            glossary_files: Vec::new(),
            docs: Vec::new(),
            save_config: false,
            reset_config: false,
            list_langs: false,
            version: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-M" | "-m" | "--min-acc" => {
                    i += 1;
                    let value = args.get(i).ok_or("--min-acc needs a value")?;
                    cli.options.min_len = value
                        .parse()
                        .map_err(|_| format!("invalid --min-acc value '{}'", value))?;
                },
                "-u" | "-U" | "--upper-only" => cli.options.upper_only = true,
                "-c" | "-C" | "--chars-only" => cli.options.chars_only = true,
                "-k" | "-K" | "--inc-camel" => cli.options.inc_camel = true,
                "-1" | "-o" | "--one-per-line" => cli.options.one_per_line = true,
                "-t" | "-T" | "--table-gloss" => cli.options.table_gloss = true,
                "-gu" | "-GU" | "--glossary-unused" => cli.options.glossary_unused = true,
                "-l" | "-L" | "--lang" => {
                    i += 1;
                    cli.options.lang = args.get(i).ok_or("--lang needs a value")?.clone();
                },
                "-e" | "-E" | "--etok" => cli.options.use_lang_tokenizer = true,
                "-g" | "-G" | "--glossary" => {
                    i += 1;
                    let value = args.get(i).ok_or("--glossary needs a file")?;
                    cli.glossary_files.push(PathBuf::from(value));
                },
                "--max-candidates" => {
                    i += 1;
                    let value = args.get(i).ok_or("--max-candidates needs a value")?;
                    cli.options.max_candidates = Some(
                        value
                            .parse()
                            .map_err(|_| format!("invalid --max-candidates value '{}'", value))?,
                    );
                },
                "--max-unused" => {
                    i += 1;
                    let value = args.get(i).ok_or("--max-unused needs a value")?;
                    cli.options.max_unused = Some(
                        value
                            .parse()
                            .map_err(|_| format!("invalid --max-unused value '{}'", value))?,
                    );
                },
                "--save-config" => cli.save_config = true,
                "--reset-config" => cli.reset_config = true,
                "-ll" | "-LL" | "--list-langs" => cli.list_langs = true,
                "-v" | "--version" => cli.version = true,
                "-h" | "--help" => {
                    print!("{}", HELP);
                    std::process::exit(0);
                },
                other if other.starts_with('-') => {
                    return Err(format!("unknown option '{}'", other));
                },
                doc => cli.docs.push(PathBuf::from(doc)),
            }
            i += 1;
        }
        Ok(cli)
    }
}

fn show_version(spell: &HunspellSpellCheck) {
    println!("Glossary Checker {}", env!("CARGO_PKG_VERSION"));
    let langs = spell.list_languages();
    if langs.is_empty() {
        println!("No spell-check dictionaries found; install .aff/.dic pairs in ./dictionaries");
    } else {
        println!("Spell-check dictionaries: {}", langs.join(", "));
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::from_args() {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("ERROR: {}", message);
            eprintln!("Try --help for usage.");
            return ExitCode::FAILURE;
        },
    };

    if cli.reset_config {
        if let Err(e) = config::reset_config() {
            eprintln!("ERROR: failed to reset configuration: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let spell = HunspellSpellCheck::new();

    if cli.version {
        show_version(&spell);
        return ExitCode::SUCCESS;
    }
    if cli.list_langs {
        let mut langs = vec![LANG_NONE.to_string()];
        langs.extend(spell.list_languages());
        println!("{}", langs.join("\n"));
        return ExitCode::SUCCESS;
    }

    if let Err(e) = cli.options.validate() {
        eprintln!("ERROR: {}", e);
        return ExitCode::FAILURE;
    }

    if cli.save_config {
        match config::save_config(&cli.options) {
            Ok(path) => println!("Configuration saved to {}", path.display()),
            Err(e) => {
                eprintln!("ERROR: failed to save configuration: {}", e);
                return ExitCode::FAILURE;
            },
        }
    }

    if cli.docs.is_empty() {
        if cli.save_config || cli.reset_config {
            return ExitCode::SUCCESS;
        }
        eprintln!("ERROR: no documents given");
        eprintln!("Try --help for usage.");
        return ExitCode::FAILURE;
    }

    let capabilities = Capabilities::none().with_spell(Box::new(spell));

    let external_glossary = if cli.glossary_files.is_empty() {
        println!("No external glossary specified");
        Vec::new()
    } else {
        match load_glossaries(&cli.glossary_files, &cli.options, &capabilities) {
            Ok(glossary) => {
                println!("{} glossary entries read", glossary.len());
                glossary
            },
            Err(e) => {
                eprintln!("ERROR: failed to read glossary: {}", e);
                return ExitCode::FAILURE;
            },
        }
    };

    let outcome = process_documents(&cli.docs, &external_glossary, &cli.options, &capabilities);

    for report in &outcome.reports {
        println!("\nProcessing {}", report.path.display());
        println!("{} candidates:", report.candidates.len());
        println!("{}", format_entries(&report.candidates, cli.options.one_per_line));
        if cli.options.glossary_unused {
            println!("Possible unused glossary entries:");
            println!("{}", format_entries(&report.unused, cli.options.one_per_line));
        }
    }

    if !outcome.failures.is_empty() {
        eprintln!("\n{} file(s) failed:", outcome.failures.len());
        for (path, error) in &outcome.failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    if outcome.is_failure(&cli.options) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
