use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use pwforge::clipboard::{Clipboard, Osc52Clipboard};
use pwforge::config::ThemeConfig;
use pwforge::engine::{self, GenerationConfig, MAX_LENGTH, MIN_LENGTH};

const EXIT_SUCCESS: i32 = 0;
const EXIT_GENERATION: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_CLIPBOARD: i32 = 5;
const EXIT_IO: i32 = 6;

/// Overrides for the configured generation settings
#[derive(Args, Debug, Default, Clone)]
struct GenerationArgs {
    /// Password length
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(MIN_LENGTH as u64..=MAX_LENGTH as u64))]
    length: Option<usize>,

    /// Include digits 0-9
    #[arg(long, overrides_with = "no_numbers")]
    numbers: bool,

    /// Letters and specials only
    #[arg(long, overrides_with = "numbers")]
    no_numbers: bool,

    /// Include special characters
    #[arg(long, overrides_with = "no_specials")]
    specials: bool,

    /// Letters and digits only
    #[arg(long, overrides_with = "specials")]
    no_specials: bool,

    /// Special characters to draw from (turns specials on)
    #[arg(short = 's', long)]
    symbols: Option<String>,
}

impl GenerationArgs {
    fn apply(&self, settings: &mut GenerationConfig) {
        if let Some(length) = self.length {
            settings.length = length;
        }
        if self.numbers {
            settings.include_numbers = true;
        }
        if self.no_numbers {
            settings.include_numbers = false;
        }
        if let Some(ref symbols) = self.symbols {
            settings.special_characters = symbols.clone();
            settings.include_specials = true;
        }
        if self.specials {
            settings.include_specials = true;
        }
        if self.no_specials {
            settings.include_specials = false;
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive generator (default when stdout is a terminal)
    Tui {
        #[command(flatten)]
        generation: GenerationArgs,
    },
    /// Print one password and its strength (default when piped)
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Also copy the password to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rate a password (reads one line from stdin when omitted)
    Score {
        password: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "pwforge")]
#[command(about = "Random password generator with a strength rating", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pwforge/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Color theme for the interactive view
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeConfig>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG still wins over the flag. Output goes through the stderr
    // buffer so the TUI can hold it back while it owns the terminal.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .target(env_logger::Target::Pipe(Box::new(
            pwforge::stderr_buffer::BufferedStderr,
        )))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let command = cli.command.unwrap_or_else(|| {
        if std::io::stdout().is_terminal() {
            Commands::Tui {
                generation: GenerationArgs::default(),
            }
        } else {
            Commands::Generate {
                generation: GenerationArgs::default(),
                copy: false,
                json: false,
            }
        }
    });

    // Init doesn't need an existing config
    if let Commands::Init = command {
        if let Err(e) = pwforge::config::init::run_init_wizard(config_path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_IO);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Scoring doesn't read settings either
    if let Commands::Score { password, json } = command {
        std::process::exit(run_score(password, json));
    }

    // Load config
    let mut config = match pwforge::config::load_config(config_path.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let mut settings = config.generation_config();
    match &command {
        Commands::Tui { generation } | Commands::Generate { generation, .. } => {
            generation.apply(&mut settings)
        }
        Commands::Score { .. } | Commands::Init => {}
    }

    // Validate settings at startup
    if let Err(errors) = engine::validate_config(&settings) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    log::debug!("Effective settings: {:?}", settings);

    let code = match command {
        Commands::Tui { .. } => {
            let theme = pwforge::tui::resolve_theme(config.theme);
            let app = pwforge::tui::App::new(
                config,
                settings,
                theme,
                config_path,
                Box::new(Osc52Clipboard),
            );
            match pwforge::tui::run_tui(app).await {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("Terminal error: {:#}", e);
                    EXIT_IO
                }
            }
        }
        Commands::Generate { copy, json, .. } => run_generate(&settings, copy, json),
        Commands::Score { .. } | Commands::Init => EXIT_SUCCESS,
    };

    std::process::exit(code);
}

fn run_generate(settings: &GenerationConfig, copy: bool, json: bool) -> i32 {
    let password = match engine::generate(settings) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            return EXIT_GENERATION;
        }
    };
    let report = engine::analyze(&password);

    if json {
        let alphabet_size = engine::effective_alphabet(settings).len();
        match pwforge::output::format_generated_json(&password, &report, alphabet_size) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize output: {}", e);
                return EXIT_IO;
            }
        }
    } else {
        let use_colors = pwforge::output::should_use_colors();
        println!(
            "{}",
            pwforge::output::format_generated(&password, &report, use_colors)
        );
    }

    if copy {
        if let Err(e) = Osc52Clipboard.write(&password) {
            eprintln!("Copy failed: {}", e);
            return EXIT_CLIPBOARD;
        }
        eprintln!("Password copied to clipboard!");
    }

    EXIT_SUCCESS
}

fn run_score(password: Option<String>, json: bool) -> i32 {
    let password = match password {
        Some(p) => p,
        None => {
            let mut line = String::new();
            if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
                eprintln!("Failed to read password from stdin: {}", e);
                return EXIT_IO;
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let report = engine::analyze(&password);

    if json {
        match pwforge::output::format_report_json(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize output: {}", e);
                return EXIT_IO;
            }
        }
    } else {
        let use_colors = pwforge::output::should_use_colors();
        println!("{}", pwforge::output::format_report(&report, use_colors));
    }

    EXIT_SUCCESS
}
