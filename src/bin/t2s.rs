//! Texspeak CLI - convert LaTeX files to speakable plain text

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use texspeak::{
    latex_to_speech_with_table, ConversionWarning, SpeakOptions, SpeechConverter, SpeechTable,
    UnknownCommandPolicy,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "t2s")]
#[command(version)]
#[command(about = "Texspeak - LaTeX to plain speakable text converter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Extra dictionary file merged over the built-in table
    #[arg(short, long)]
    dictionary: Option<String>,

    /// What to do with commands the dictionary does not know
    #[arg(short, long, value_enum, default_value_t = UnknownMode::Drop)]
    unknown: UnknownMode,

    /// Collapse the output onto a single line
    #[arg(long)]
    single_line: bool,

    /// Strict mode: exit with error if any unknown commands were seen
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert a file (default action)
    Convert {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Extra dictionary file merged over the built-in table
        #[arg(short, long)]
        dictionary: Option<String>,

        /// What to do with commands the dictionary does not know
        #[arg(short, long, value_enum, default_value_t = UnknownMode::Drop)]
        unknown: UnknownMode,

        /// Collapse the output onto a single line
        #[arg(long)]
        single_line: bool,
    },

    /// Batch convert a directory of .tex files
    Batch {
        /// Input directory
        input: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Extra dictionary file merged over the built-in table
        #[arg(short, long)]
        dictionary: Option<String>,

        /// File extension for output files
        #[arg(short, long, default_value = "txt")]
        extension: String,
    },

    /// Inspect the substitution dictionary
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum DictAction {
    /// Look up the spoken form of a single command
    Lookup {
        /// Command to look up (leading backslash optional)
        command: String,

        /// Extra dictionary file merged over the built-in table
        #[arg(short, long)]
        dictionary: Option<String>,
    },

    /// Search commands and spoken forms
    Search {
        /// Case-insensitive query
        query: String,

        /// Extra dictionary file merged over the built-in table
        #[arg(short, long)]
        dictionary: Option<String>,
    },

    /// Export the dictionary as "command -> spoken" lines
    Export {
        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,

        /// Extra dictionary file merged over the built-in table
        #[arg(short, long)]
        dictionary: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum UnknownMode {
    /// Drop unknown commands silently
    Drop,
    /// Speak the command name without its backslash
    Name,
}

#[cfg(feature = "cli")]
impl From<UnknownMode> for UnknownCommandPolicy {
    fn from(mode: UnknownMode) -> Self {
        match mode {
            UnknownMode::Drop => UnknownCommandPolicy::Drop,
            UnknownMode::Name => UnknownCommandPolicy::BareName,
        }
    }
}

/// Load the built-in table, merged with an optional dictionary file.
/// A bad dictionary is fatal before any conversion is attempted.
#[cfg(feature = "cli")]
fn load_table(dictionary: Option<&str>) -> SpeechTable {
    match dictionary {
        Some(path) => match SpeechTable::from_file(path) {
            Ok(table) => table,
            Err(err) => {
                eprintln!("Error: could not load dictionary '{}': {}", path, err);
                std::process::exit(2);
            }
        },
        None => SpeechTable::builtin().clone(),
    }
}

#[cfg(feature = "cli")]
fn read_input(input: Option<&str>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(output: Option<&str>, text: &str) -> io::Result<()> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", text)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", text);
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn print_warnings(warnings: &[ConversionWarning]) {
    eprintln!();
    eprintln!("Conversion warnings ({}):", warnings.len());
    for warning in warnings {
        eprintln!("  {}", warning);
    }
    eprintln!();
}

#[cfg(feature = "cli")]
fn run_convert(
    input: Option<&str>,
    output: Option<&str>,
    dictionary: Option<&str>,
    unknown: UnknownMode,
    single_line: bool,
    strict: bool,
    quiet: bool,
) -> io::Result<()> {
    let table = load_table(dictionary);
    let options = SpeakOptions {
        unknown_commands: unknown.into(),
        single_line,
    };

    let content = read_input(input)?;
    let mut converter = SpeechConverter::with_options(&table, options);
    let result = converter.convert_with_diagnostics(&content);

    if !quiet && result.has_warnings() {
        print_warnings(&result.warnings);
    }

    if strict && result.has_warnings() {
        eprintln!(
            "Error: {} unknown command(s) in strict mode",
            result.warnings.len()
        );
        std::process::exit(1);
    }

    write_output(output, &result.text)
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    run_convert(
        cli.input_file.as_deref(),
        cli.output.as_deref(),
        cli.dictionary.as_deref(),
        cli.unknown,
        cli.single_line,
        cli.strict,
        cli.quiet,
    )
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Convert {
            input,
            output,
            dictionary,
            unknown,
            single_line,
        } => {
            run_convert(
                input.as_deref(),
                output.as_deref(),
                dictionary.as_deref(),
                unknown,
                single_line,
                false,
                false,
            )?;
        }

        Commands::Batch {
            input,
            output_dir,
            dictionary,
            extension,
        } => {
            let table = load_table(dictionary.as_deref());
            fs::create_dir_all(&output_dir)?;

            let input_path = Path::new(&input);
            let files: Vec<_> = fs::read_dir(input_path)?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|path| {
                    path.extension().and_then(|s| s.to_str()) == Some("tex")
                })
                .collect();

            let mut success_count = 0;
            let mut error_count = 0;

            for file_path in files {
                let filename = file_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                let output_path =
                    Path::new(&output_dir).join(format!("{}.{}", filename, extension));

                match fs::read_to_string(&file_path) {
                    Ok(content) => {
                        let text =
                            latex_to_speech_with_table(&content, &table, &SpeakOptions::default());
                        match fs::write(&output_path, &text) {
                            Ok(_) => {
                                eprintln!("✓ {}", output_path.display());
                                success_count += 1;
                            }
                            Err(e) => {
                                eprintln!("✗ {} - write error: {}", output_path.display(), e);
                                error_count += 1;
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("✗ {} - read error: {}", file_path.display(), e);
                        error_count += 1;
                    }
                }
            }

            eprintln!(
                "\nBatch conversion complete: {} succeeded, {} failed",
                success_count, error_count
            );

            if error_count > 0 {
                std::process::exit(1);
            }
        }

        Commands::Dict { action } => match action {
            DictAction::Lookup {
                command,
                dictionary,
            } => {
                let table = load_table(dictionary.as_deref());
                let key = if command.starts_with('\\') {
                    command
                } else {
                    format!("\\{}", command)
                };
                match table.lookup(&key) {
                    Some(spoken) => println!("{} -> {}", key, spoken),
                    None => {
                        eprintln!("'{}' is not in the dictionary", key);
                        std::process::exit(1);
                    }
                }
            }

            DictAction::Search { query, dictionary } => {
                let table = load_table(dictionary.as_deref());
                let hits = table.search(&query);
                if hits.is_empty() {
                    eprintln!("No commands matching '{}'", query);
                    std::process::exit(1);
                }
                for (command, spoken) in hits {
                    println!("{} -> {}", command, spoken);
                }
            }

            DictAction::Export { output, dictionary } => {
                let table = load_table(dictionary.as_deref());
                let text = table.export_text();
                match output {
                    Some(path) => {
                        fs::write(&path, &text)?;
                        eprintln!("✓ {} entries written to: {}", table.len(), path);
                    }
                    None => print!("{}", text),
                }
            }
        },

        Commands::Info => {
            println!("Texspeak - LaTeX to plain speakable text converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Greek letters and math symbols spoken by name");
            println!("  ✓ Section and sub-section labeling");
            println!("  ✓ Norms, fractions, roots, scripts verbalized");
            println!("  ✓ External JSON dictionary merge");
            println!("  ✓ Batch file processing");
            println!();
            println!(
                "Built-in dictionary: {} commands",
                SpeechTable::builtin().len()
            );
            println!();
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texspeak --features cli");
    eprintln!("  t2s [OPTIONS] [INPUT_FILE]");
}
