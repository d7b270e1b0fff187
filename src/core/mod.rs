//! Kern der Engine: Bernstein-Basis, Bézier-Segmente, Spline-Aufbau,
//! Arc-Length-Tabelle, Kursabtastung und Konvoi-Planung.

pub mod arc_length;
pub mod bernstein;
pub mod convoy;
pub mod sampler;
pub mod segment;
pub mod spline;
pub mod track;

pub use arc_length::{ArcLengthEntry, ArcLengthTable};
pub use bernstein::{bernstein_derivative, bernstein_point, binomial};
pub use convoy::follower_params;
pub use sampler::{sample_arc_length, sample_naive, wrap_param, ParamMode, PathSample};
pub use segment::CurveSegment;
pub use spline::{build_segments, cardinal_tangent, MIN_CONTROL_POINTS};
pub use track::Track;
