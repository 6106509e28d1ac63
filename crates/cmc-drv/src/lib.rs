//! cmc-drv - Driver for the C-Minus lexer.
//!
//! Thin wrapper around `cmc-lex`: parses the command line, reads the
//! input file, and prints one line per token in `"<KIND>: <LEXEME>"`
//! form. Reader usage-fault diagnostics collected during lexing are
//! flushed to stderr afterwards.

use std::env;
use std::path::PathBuf;

use cmc_lex::Tokenizer;
use cmc_util::Handler;
use thiserror::Error;

/// Driver configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The input file to tokenize.
    pub input: Option<PathBuf>,
    /// Whether to log phase lines to stderr.
    pub verbose: bool,
    /// Print the help message and exit.
    pub help: bool,
    /// Print version information and exit.
    pub version: bool,
}

/// Errors the driver can report.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("please supply a filename as argument")]
    NoInputFile,

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("file {path} does not exist or cannot be read: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parse command line arguments.
///
/// The first positional argument is the input file. Extra positional
/// arguments are ignored with a warning on stderr; unknown flags are
/// errors.
pub fn parse_args(args: &[String]) -> Result<Config, DriverError> {
    let mut config = Config::default();
    let mut extra = 0usize;

    for arg in args {
        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg.starts_with('-') {
            return Err(DriverError::UnknownOption(arg.clone()));
        } else if config.input.is_none() {
            config.input = Some(PathBuf::from(arg));
        } else {
            extra += 1;
        }
    }

    if extra > 0 {
        eprintln!("warning: too many arguments, ignoring non-first argument(s)");
    }

    Ok(config)
}

/// Print help message.
pub fn print_help() {
    println!("C-Minus Lexer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: cmc [OPTIONS] <input file>");
    println!();
    println!("Prints one line per token in \"<KIND>: <LEXEME>\" form.");
    println!();
    println!("Options:");
    println!("  -h, --help     Print this help message");
    println!("  -V, --version  Print version information");
    println!("  -v, --verbose  Enable verbose output");
}

/// Print version.
pub fn print_version() {
    println!("cmc {}", env!("CARGO_PKG_VERSION"));
}

/// One lexing session over one input file.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub path: PathBuf,
    pub source: String,
    pub diagnostics: Handler,
}

impl Session {
    /// Reads the input file once. A missing or unreadable file is
    /// reported here and processing does not proceed.
    pub fn new(config: Config) -> Result<Self, DriverError> {
        let path = config.input.clone().ok_or(DriverError::NoInputFile)?;
        let source = std::fs::read_to_string(&path).map_err(|e| DriverError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self {
            config,
            path,
            source,
            diagnostics: Handler::new(),
        })
    }

    /// Tokenizes the input and prints the token stream to stdout.
    pub fn run(&self) -> Result<(), DriverError> {
        if self.config.verbose {
            eprintln!("[verbose] Lexing: {}", self.path.display());
        }

        let tokenizer = Tokenizer::new(&self.source, &self.diagnostics);
        for token in tokenizer {
            println!("{}", token);
        }

        self.diagnostics.print_all();

        if self.config.verbose {
            eprintln!("[verbose] Done: {}", self.path.display());
        }
        Ok(())
    }
}

/// Driver entry point, factored out of `main` for error handling.
pub fn main_impl() -> Result<(), DriverError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = parse_args(&args)?;

    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    let session = Session::new(config)?;
    session.run()
}
