//! Layer-übergreifende Typen: Laufzeit-Optionen der Engine.

pub mod options;

pub use options::EngineOptions;
