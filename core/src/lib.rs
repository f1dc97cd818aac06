//! Combat log analysis engine.
//!
//! Raw game log text goes in, a [`LogAnalysis`] comes out:
//!
//! ```
//! let analysis = fleetlog_core::analyze(
//!     "[ 2024.03.14 19:22:01 ] (combat) <b>120</b> to <b>Rat</b> - Light Missile - Hits",
//! );
//! assert_eq!(analysis.damage_done, 120);
//! ```

pub mod analysis;
pub mod combat_log;
pub mod context;
pub mod events;

// Re-exports for convenience
pub use analysis::{
    AnalysisCategory, Analyzer, DamageAnalysis, LogAnalysis, RepairAnalysis, analyze,
};
pub use combat_log::{LogEvent, LogParser, ParseError, Reader, ReaderError, parse, parse_line};
pub use context::{AppConfig, AppConfigExt, DirectoryIndex};
pub use events::{DamageEvent, Direction, RepairEvent, RepairType, damage_events, repair_events};
