//! suratfmt CLI - formal letter formatting tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use suratfmt::{
    check_format, normalize, tree_from_text, FormatWarning, Language, LetterType, Suratfmt,
};

#[derive(Parser)]
#[command(name = "suratfmt")]
#[command(version)]
#[command(about = "Format letter drafts into formal Malaysian letters", long_about = None)]
struct Cli {
    /// Input draft file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a draft to a paginated text preview
    Render {
        /// Input draft file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Letter type shown in the footer
        #[arg(long, value_enum)]
        letter_type: Option<TypeArg>,

        /// Letter language shown in the footer
        #[arg(long, value_enum)]
        language: Option<LangArg>,

        /// Skip layout normalization
        #[arg(long)]
        raw: bool,
    },

    /// Classify a draft into its letter structure as JSON
    Classify {
        /// Input draft file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a draft for missing formal letter elements
    Check {
        /// Input draft file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    /// Complaint letter
    Complaint,
    /// Proposal
    Proposal,
    /// Medical certificate cover letter
    Mc,
    /// General letter
    General,
    /// Official letter
    Official,
}

impl From<TypeArg> for LetterType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Complaint => LetterType::Complaint,
            TypeArg::Proposal => LetterType::Proposal,
            TypeArg::Mc => LetterType::Mc,
            TypeArg::General => LetterType::General,
            TypeArg::Official => LetterType::Official,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LangArg {
    /// English
    En,
    /// Bahasa Malaysia
    Ms,
    /// Mixed English and Malay
    Mixed,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Language::En,
            LangArg::Ms => Language::Ms,
            LangArg::Mixed => Language::Mixed,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            letter_type,
            language,
            raw,
        }) => cmd_render(&input, output.as_deref(), letter_type, language, raw),
        Some(Commands::Classify {
            input,
            output,
            compact,
        }) => cmd_classify(&input, output.as_deref(), compact),
        Some(Commands::Check { input }) => cmd_check(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render if input is provided
            if let Some(input) = cli.input {
                cmd_render(&input, cli.output.as_deref(), None, None, false)
            } else {
                println!("{}", "Usage: suratfmt <FILE> [OUTPUT]".yellow());
                println!("       suratfmt --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_draft(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    letter_type: Option<TypeArg>,
    language: Option<LangArg>,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let draft = read_draft(input)?;

    let mut builder = Suratfmt::new();
    if let Some(t) = letter_type {
        builder = builder.with_letter_type(t.into());
    }
    if let Some(l) = language {
        builder = builder.with_language(l.into());
    }
    if raw {
        builder = builder.raw();
    }

    let result = builder.format_text(&draft)?;
    let preview = result.to_text()?;

    if let Some(path) = output {
        fs::write(path, &preview)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", preview);
    }

    Ok(())
}

fn cmd_classify(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let draft = read_draft(input)?;
    let result = Suratfmt::new().format_text(&draft)?;

    let json = if compact {
        result.structure().to_json()?
    } else {
        result.structure().to_json_pretty()?
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let draft = read_draft(input)?;
    let tree = tree_from_text(&draft);
    let warnings = check_format(&tree);

    println!("{}", "Draft Check".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if warnings.is_empty() {
        println!("{}", "All formal letter elements present".green());
        return Ok(());
    }

    for warning in &warnings {
        let message = match warning {
            FormatWarning::MissingSeparator => "no separator rule after the sender block",
            FormatWarning::MissingSubject => "no subject line (Re:, Subject:, Perkara:)",
            FormatWarning::MissingSalutation => "no salutation (Dear Sir/Madam, Tuan, Puan)",
        };
        println!("{} {}", "warning:".yellow().bold(), message);
    }

    let fixed = check_format(&normalize(&tree));
    if fixed.len() < warnings.len() {
        println!();
        println!(
            "{} {} of {} would be repaired by rendering",
            "note:".cyan(),
            warnings.len() - fixed.len(),
            warnings.len()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "suratfmt".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Formal letter formatting tool");
    println!("License: MIT");
}
