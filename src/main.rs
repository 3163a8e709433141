mod cli;
mod config;
mod handlers;
mod http;
mod init;

use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use clap::Parser;

use cli::Commands;
use handlers::{Consts, Ctx};
use t9suggest::{
    keypad,
    models::{Config, SuggestResults},
};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init::init_logger(cli.verbose);

    match cli.command {
        // Generate a new config file.
        Commands::NewConfig { path } => match config::generate_sample(&path) {
            Ok(_) => {
                log::info!("config file generated: {}", path.display());
            }
            Err(e) => {
                log::error!("error generating config: {}", e);
                std::process::exit(1);
            }
        },

        // Print keypad codes.
        Commands::Encode { words } => {
            for w in words {
                match keypad::encode(&w) {
                    Ok(code) => println!("{} {}", w, code),
                    Err(e) => println!("{} [{}]", w, e),
                }
            }
        }

        // One-shot query against a corpus file.
        Commands::Suggest {
            corpus,
            digits,
            json,
        } => {
            let config = load_config(&cli.config);

            if !keypad::is_valid_digit_sequence(&digits) {
                log::error!("invalid input sequence: {}", digits);
                std::process::exit(1);
            }
            if !corpus.is_file() {
                log::error!("'{}' is not a valid file", corpus.display());
                std::process::exit(2);
            }

            let engine = init::init_engine(&corpus);
            let results = SuggestResults::new(&digits, &engine.suggest(&digits), &config.api);
            if json {
                match serde_json::to_string_pretty(&results) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        log::error!("error encoding results: {}", e);
                        std::process::exit(1);
                    }
                }
            } else if let Err(e) = write_results(&mut io::stdout().lock(), &results) {
                log::error!("error printing results: {}", e);
                std::process::exit(1);
            }
        }

        // Build the dictionary and start the HTTP server.
        Commands::Serve { corpus } => {
            let config = load_config(&cli.config);

            let corpus = match corpus {
                Some(p) => p,
                None if !config.corpus.path.is_empty() => PathBuf::from(&config.corpus.path),
                None => {
                    log::error!(
                        "no corpus specified. Pass --corpus or set corpus.path in the config"
                    );
                    std::process::exit(1);
                }
            };

            let ctx = Arc::new(Ctx {
                engine: Arc::new(init::init_engine(&corpus)),
                consts: Consts {
                    version: env!("VERSION").to_string(),
                    limits: config.api,
                },
            });

            let routes = http::init_handlers(ctx);
            let addr = config.app.address().to_string();

            log::info!("starting server on {}", addr);

            let listener = match tokio::net::TcpListener::bind(&addr).await {
                Ok(l) => l,
                Err(e) => {
                    log::error!("error listening on {}: {}", addr, e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = axum::serve(listener, routes).await {
                log::error!("server error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Load config or exit with an error message.
fn load_config(paths: &[PathBuf]) -> Config {
    config::load_all(paths).unwrap_or_else(|e| {
        log::error!("error loading config: {}", e);
        std::process::exit(1);
    })
}

/// Print results in the plain text layout. An empty query does no lookup,
/// so it has no exact match marker.
fn write_results(w: &mut impl Write, r: &SuggestResults) -> io::Result<()> {
    writeln!(w, "Exact matches for {}:", r.query)?;
    if r.exact.is_empty() && !r.query.is_empty() {
        writeln!(w, "[None was found]")?;
    }
    for m in &r.exact {
        writeln!(w, "{}", m.word)?;
    }

    writeln!(w, "Prefix matches for {}:", r.query)?;
    if r.completions.is_empty() {
        writeln!(w, "[None was found]")?;
    }
    for c in &r.completions {
        writeln!(w, "{}", c)?;
    }
    Ok(())
}
