//! Batch simulation: many independent games, aggregated into win rates and
//! a game-length histogram.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use party_monopoly::board::GameData;
//! use party_monopoly::simulation::{SimulationConfig, Simulator};
//!
//! let data = Arc::new(GameData::standard().unwrap());
//! let config = SimulationConfig::new(2).unwrap().with_iterations(100).with_seed(12345);
//!
//! let report = Simulator::new(data, config).unwrap().run().unwrap();
//! assert_eq!(report.games, 100);
//! println!("{report}");
//! ```

pub mod config;
pub mod report;
pub mod runner;

pub use config::{SimulationConfig, DEFAULT_PLAYER_NAMES, DEFAULT_PROGRESS_INTERVAL};
pub use report::SimulationReport;
pub use runner::Simulator;
