//! Checkers rule engine: legal action generation, move application with
//! capture and promotion, board encoding and material scoring.
//!
//! The engine is synchronous and keeps no global state. A driver owns a
//! [`checkers::roster::Roster`], asks for legal actions piece by piece,
//! applies the one it picked and summarizes the result via [`evaluation`].
//!
//! ```
//! use draughts::checkers::core::Direction;
//! use draughts::checkers::roster::Roster;
//! use draughts::evaluation::encoding::encode;
//! use draughts::evaluation::material::material_advantage;
//!
//! let mut roster = Roster::standard();
//! let actions = roster.actions(9).unwrap();
//! assert!(actions.contains(Direction::StepRightForward));
//! let applied = roster.apply_action(9, Direction::StepRightForward).unwrap();
//! assert_eq!(applied.to.to_string(), "d4");
//! assert_eq!(encode(&roster)[3][3], [1, 0]);
//! assert_eq!(material_advantage(&roster).value(), 0);
//! ```

// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]

pub mod checkers;
pub mod environment;
pub mod evaluation;

mod engine;
pub use engine::{Config, Engine};
use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the engine version on startup.
pub fn print_engine_info() {
    println!("Draughts rule engine {}", engine_version());
}

/// Prints the build type and whether the build is clean on startup.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
