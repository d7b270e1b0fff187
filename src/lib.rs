//! Rundkurs: Pfad-Engine für geschlossene Kurse.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod shared;

pub use core::{
    build_segments, cardinal_tangent, follower_params, ArcLengthEntry, ArcLengthTable,
    CurveSegment, ParamMode, PathSample, Track,
};
pub use core::{bernstein_derivative, bernstein_point, binomial};
pub use core::{sample_arc_length, sample_naive, wrap_param, MIN_CONTROL_POINTS};
pub use glam::Vec2;
pub use shared::EngineOptions;
