//! B-spline evaluation
//!
//! Clamped de Boor evaluation over homogeneous coordinates, so rational
//! (weighted) splines fall out of the same recurrence. Sampling density
//! follows the knot structure: 25 steps per distinct interior knot span.

use crate::types::Vector2;

/// Steps sampled across each distinct knot span.
const STEPS_PER_SPAN: usize = 25;

/// Sample a B-spline curve into a polyline.
///
/// `weights` is empty for a non-rational curve. An unusable knot vector
/// (wrong length for the control count and degree) is replaced by a
/// clamped uniform one, which is what permissive CAD readers do with
/// malformed splines.
pub fn sample_curve(
    control_points: &[Vector2],
    weights: &[f64],
    degree: usize,
    knots: &[f64],
) -> Vec<Vector2> {
    let n = control_points.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![control_points[0]];
    }
    let degree = degree.min(n - 1).max(1);

    let owned_knots;
    let knots = if knots.len() == n + degree + 1 {
        knots
    } else {
        owned_knots = clamped_uniform_knots(n, degree);
        &owned_knots
    };

    // homogeneous control points
    let ctrl: Vec<[f64; 3]> = control_points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let w = weights.get(i).copied().unwrap_or(1.0);
            [p.x * w, p.y * w, w]
        })
        .collect();

    let t_start = knots[degree];
    let t_end = knots[n];
    let spans = distinct_span_count(&knots[degree..=n]);
    let steps = spans * STEPS_PER_SPAN;

    let mut out = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = t_start + (t_end - t_start) * (i as f64 / steps as f64);
        let t = t.clamp(t_start, t_end);
        out.push(de_boor(&ctrl, degree, knots, t, n));
    }
    out
}

fn clamped_uniform_knots(n: usize, degree: usize) -> Vec<f64> {
    let mut knots = Vec::with_capacity(n + degree + 1);
    let interior = n - degree;
    for _ in 0..=degree {
        knots.push(0.0);
    }
    for i in 1..interior {
        knots.push(i as f64 / interior as f64);
    }
    for _ in 0..=degree {
        knots.push(1.0);
    }
    knots
}

/// Number of non-degenerate spans between distinct knot values.
fn distinct_span_count(domain: &[f64]) -> usize {
    let mut spans = 0;
    for w in domain.windows(2) {
        if w[1] > w[0] {
            spans += 1;
        }
    }
    spans.max(1)
}

/// Find the knot span index `k` with `knots[k] <= t < knots[k+1]`,
/// clamped into `[degree, n-1]`.
fn find_span(knots: &[f64], degree: usize, n: usize, t: f64) -> usize {
    if t >= knots[n] {
        return n - 1;
    }
    let mut k = degree;
    while k < n - 1 && t >= knots[k + 1] {
        k += 1;
    }
    k
}

fn de_boor(ctrl: &[[f64; 3]], degree: usize, knots: &[f64], t: f64, n: usize) -> Vector2 {
    let k = find_span(knots, degree, n, t);
    let mut d: Vec<[f64; 3]> = (0..=degree).map(|j| ctrl[j + k - degree]).collect();
    for r in 1..=degree {
        for j in (r..=degree).rev() {
            let i = j + k - degree;
            let denom = knots[i + degree - r + 1] - knots[i];
            let alpha = if denom.abs() < f64::EPSILON {
                0.0
            } else {
                (t - knots[i]) / denom
            };
            d[j] = [
                (1.0 - alpha) * d[j - 1][0] + alpha * d[j][0],
                (1.0 - alpha) * d[j - 1][1] + alpha * d[j][1],
                (1.0 - alpha) * d[j - 1][2] + alpha * d[j][2],
            ];
        }
    }
    let [x, y, w] = d[degree];
    if w.abs() < f64::EPSILON {
        Vector2::new(x, y)
    } else {
        Vector2::new(x / w, y / w)
    }
}
