//! Repository Scoring & Certification Engine — deterministic, rule-based.
//!
//! Turns one repository snapshot into a quality dashboard (overall score,
//! grade, risk tier, hotspots, recommendations), a certificate with potential
//! uses, an activity trend and hard risk alerts.
//!
//! No DB, no network, no cache; pure computation. The only clock input is the
//! `now` passed to [`Engine::analyze`].

pub mod activity;
pub mod alerts;
pub mod bus_factor;
pub mod certificate;
pub mod classify;
pub mod composite;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod error;
pub mod hotspots;
pub mod languages;
pub mod normalize;
pub mod ratio;
pub mod recommend;
pub mod types;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use types::{AnalysisReport, InboundSnapshot, RepositorySnapshot};
