//! # Ashkana CLI Library
//!
//! Core library for the Ashkana POS terminal application.
//! This is the main entry point that configures and runs the REPL.
//!
//! ## Module Organization
//! ```text
//! ashkana_cli/
//! ├── lib.rs          ◄─── You are here (startup & main-menu REPL)
//! ├── state.rs        ◄─── Catalog, order book, order sequence + seeding
//! ├── config.rs       ◄─── Configuration (store name, admin passphrase)
//! ├── terminal.rs     ◄─── Terminal trait + stdin/stdout implementation
//! ├── render.rs       ◄─── Listings, order bodies, receipts
//! ├── flows/
//! │   ├── mod.rs      ◄─── Sentinels + shared input helper
//! │   ├── checkout.rs ◄─── Customer transaction flow
//! │   └── admin.rs    ◄─── Passphrase-gated admin panel
//! └── error.rs        ◄─── App error type (domain ∪ I/O)
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • defaults → ASHKANA_CONFIG file → ASHKANA_* env vars               │
//! │                                                                         │
//! │  3. Seed In-Memory State ─────────────────────────────────────────────► │
//! │     • opening catalog (menu, drinks, combos), empty order book          │
//! │                                                                         │
//! │  4. Run the REPL ─────────────────────────────────────────────────────► │
//! │     • 1. Order food  2. Admin panel  0. Exit                            │
//! │     • loops until the exit choice or the input stream closes            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod flows;
pub mod render;
pub mod state;
pub mod terminal;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::AppResult;
use state::AppState;
use terminal::{StdTerminal, Terminal};

const MAIN_MENU: &str = "Restaurant Management System\n\
    1. Order food\n\
    2. Admin panel\n\
    0. Exit\n";

/// Runs the application: logging, config, seeded state, REPL.
///
/// Always exits cleanly: a closed input stream ends the session the same
/// way the exit choice does.
pub fn run() {
    init_tracing();

    let config = AppConfig::load();
    info!(store = %config.store_name, "starting Ashkana POS");

    let mut state = AppState::seeded();
    let mut term = StdTerminal::new();

    match repl(&mut state, &config, &mut term) {
        Ok(()) => info!("session ended"),
        Err(err) => warn!(%err, "session ended on terminal failure"),
    }
}

/// The main-menu loop. One flow runs at a time; input is synchronous.
fn repl<T: Terminal>(state: &mut AppState, config: &AppConfig, term: &mut T) -> AppResult<()> {
    term.write(&render::welcome_banner(config));

    loop {
        let Some(choice) = flows::prompt_choice(term, MAIN_MENU)? else {
            continue;
        };

        match choice {
            1 => flows::checkout::run(state, config, term)?,
            2 => flows::admin::run(state, config, term)?,
            0 => {
                term.write("Exiting...\n");
                return Ok(());
            }
            _ => term.write("Invalid choice.\n"),
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ashkana=trace` - Show trace for ashkana crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::terminal::ScriptedTerminal;
    use ashkana_core::ItemKind;

    #[test]
    fn test_full_session_order_then_admin_then_exit() {
        let mut state = AppState::seeded();
        let config = AppConfig::default();
        let mut term = ScriptedTerminal::new(&[
            // order: Kotlety × 3, skip sets/drinks, pay cash
            "1", "1", "3", "0", "0", "0", "1",
            // admin: check revenue, exit panel
            "2", "123321", "1", "0",
            // quit
            "0",
        ]);

        repl(&mut state, &config, &mut term).unwrap();

        assert!(term.output.contains("WELCOME TO ASHKANA"));
        assert!(term.output.contains("Paid $17.97 in cash."));
        assert!(term.output.contains("Total revenue: $17.97"));
        assert!(term.output.contains("Exiting..."));
        assert_eq!(
            state.catalog.find_item(ItemKind::Menu, 1).unwrap().stock,
            47
        );
    }

    #[test]
    fn test_unknown_main_menu_choice_is_reported() {
        let mut state = AppState::seeded();
        let config = AppConfig::default();
        let mut term = ScriptedTerminal::new(&["7", "0"]);

        repl(&mut state, &config, &mut term).unwrap();
        assert!(term.output.contains("Invalid choice."));
    }

    #[test]
    fn test_closed_input_surfaces_as_io_error() {
        let mut state = AppState::seeded();
        let config = AppConfig::default();
        let mut term = ScriptedTerminal::new(&[]);

        assert!(matches!(
            repl(&mut state, &config, &mut term),
            Err(AppError::Io(_))
        ));
    }
}
