//! Bernstein-Basis: Auswertung von Bézier-Position und -Ableitung.
//!
//! Die Funktionen arbeiten für beliebigen Grad (Grad = Anzahl Kontrollpunkte − 1);
//! die Engine nutzt sie ausschließlich mit Grad 3.

use glam::Vec2;

/// Binomialkoeffizient "n über k".
pub fn binomial(n: usize, k: usize) -> f32 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0f32;
    for i in 0..k {
        result = result * (n - i) as f32 / (i + 1) as f32;
    }
    result
}

/// Position auf einer Bézier-Kurve bei Parameter `t ∈ [0, 1]` (Bernstein-Basis).
///
/// `control`: die Kontrollpunkte der Kurve.
pub fn bernstein_point(control: &[Vec2], t: f32) -> Vec2 {
    let degree = control.len() - 1;
    let mut position = Vec2::ZERO;
    for (k, &point) in control.iter().enumerate() {
        let weight = binomial(degree, k) * (1.0 - t).powi((degree - k) as i32) * t.powi(k as i32);
        position += weight * point;
    }
    position
}

/// Erste Ableitung einer Bézier-Kurve bei Parameter `t ∈ [0, 1]`.
///
/// An den Rändern `t = 0` und `t = 1` gilt die geschlossene Form
/// `grad · (c1 − c0)` bzw. `grad · (cn − cn−1)`; die allgemeine Formel
/// enthält dort `t^(k−1)` bzw. `(1−t)^(grad−k−1)` und ist nicht auswertbar
/// (hebbare Singularität).
pub fn bernstein_derivative(control: &[Vec2], t: f32) -> Vec2 {
    let degree = control.len() - 1;
    let d = degree as f32;

    if t == 0.0 {
        return d * (control[1] - control[0]);
    }
    if t == 1.0 {
        return d * (control[degree] - control[degree - 1]);
    }

    let mut derivative = Vec2::ZERO;
    for (k, &point) in control.iter().enumerate() {
        let k_f = k as f32;
        let weight = binomial(degree, k)
            * t.powi(k as i32 - 1)
            * (1.0 - t).powi(degree as i32 - k as i32 - 1)
            * (-(d - k_f) * t + k_f * (1.0 - t));
        derivative += weight * point;
    }
    derivative
}
