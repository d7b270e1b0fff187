//! Konvoi-Planung: ein Anführer und Verfolger mit festem physischen Abstand.
//!
//! Der Abstand wird in Weglängen-Einheiten vorgegeben und über den Kursumfang
//! in einen Versatz des logischen Parameters umgerechnet. Der Abstand zwischen
//! den Konvoi-Mitgliedern bleibt dadurch konstant, unabhängig von der lokalen
//! Krümmung des Kurses.

use super::sampler::wrap_param;

/// Logische Parameter der Verfolger hinter `leader_u`.
///
/// Verfolger `k` (1-basiert) fährt `k · spacing` Weglängen-Einheiten hinter
/// dem Anführer; am Kursanfang wird zyklisch ans Kursende gewickelt.
/// Bei entartetem Kurs (`total_length ≈ 0`) stehen alle Verfolger auf dem
/// Parameter des Anführers.
pub fn follower_params(
    leader_u: f32,
    follower_count: usize,
    spacing: f32,
    total_length: f32,
    point_count: usize,
) -> Vec<f32> {
    let n = point_count as f32;

    if total_length <= f32::EPSILON {
        return vec![wrap_param(leader_u, point_count); follower_count];
    }

    let delta = spacing / total_length * n;

    (1..=follower_count)
        .map(|k| {
            let offset = k as f32 * delta;
            let raw = if leader_u > offset {
                (leader_u - offset) % n
            } else {
                n - offset + leader_u
            };
            // tiefe Umwicklungen (offset > n + leader_u) landen sonst unter 0
            wrap_param(raw, point_count)
        })
        .collect()
}
