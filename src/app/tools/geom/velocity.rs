//! Geschwindigkeits-Kurve: Zeitverzerrung und Hüllen-Geometrie.
//!
//! Die Geschwindigkeit entlang der Geste ist eine quadratische Funktion der
//! normierten Zeit mit Startwert `v0`, Endwert `v1` und Mittelwert 1:
//!
//! ```text
//! vc   = 3 − v1 − v0
//! v(t) = t²·(v0 − 2·vc + v1) + t·2·(vc − v0) + v0
//! ```
//!
//! Die verzerrte Zeit ist das Integral davon (kubische Bézier-Gewichtung),
//! `time(0) = 0`, `time(1) = 1`. Für `v0, v1 ∈ [0, 3]` bleibt `v(t) ≥ 0`,
//! die Zeitverzerrung also monoton.

use crate::core::GeomPath;
use glam::Vec2;

/// Anzahl Abtastpunkte entlang der Shape für die Geschwindigkeits-Hülle.
pub const VELO_POINTS: usize = 72;
/// Skalierung der Hüllen-Breite (virtuelle Einheiten pro Geschwindigkeit 1.0).
pub const VELO_NORM: f32 = 0.05;
/// Zeitversatz für die Tangenten-Differenz.
pub const TANGENT_DT: f32 = 1e-3;
/// Obergrenze für Start-/Stop-Geschwindigkeit.
pub const VELOCITY_MAX: f32 = 3.0;

/// Start- und Stop-Geschwindigkeit einer Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityProfile {
    /// Geschwindigkeit bei t = 0
    pub start: f32,
    /// Geschwindigkeit bei t = 1
    pub stop: f32,
}

impl Default for VelocityProfile {
    fn default() -> Self {
        Self::UNIFORM
    }
}

impl VelocityProfile {
    /// Konstante Geschwindigkeit (keine Verzerrung).
    pub const UNIFORM: VelocityProfile = VelocityProfile {
        start: 1.0,
        stop: 1.0,
    };

    /// Erstellt ein Profil, beide Werte auf [0, VELOCITY_MAX] begrenzt.
    pub fn new(start: f32, stop: f32) -> Self {
        Self {
            start: start.clamp(0.0, VELOCITY_MAX),
            stop: stop.clamp(0.0, VELOCITY_MAX),
        }
    }

    /// Mittlerer Stützwert `vc = 3 − v1 − v0`.
    pub fn center(&self) -> f32 {
        3.0 - self.stop - self.start
    }

    /// Geschwindigkeit `v(t)`.
    pub fn velocity_at(&self, t: f32) -> f32 {
        let v0 = self.start;
        let v1 = self.stop;
        let vc = self.center();
        t * t * (v0 - 2.0 * vc + v1) + t * (2.0 * (vc - v0)) + v0
    }

    /// Verzerrte Zeit `time(t) = t³·c1 + t²·c2 + t·c3`.
    pub fn warped_time(&self, t: f32) -> f32 {
        let v0 = self.start;
        let v1 = self.stop;
        let vc = self.center();
        let c1 = (v0 - 2.0 * vc + v1) / 3.0;
        let c2 = vc - v0;
        let c3 = v0;
        t * t * t * c1 + t * t * c2 + t * c3
    }

    /// `count` verzerrte Zeitpunkte für gleichmäßig verteilte `t ∈ [0, 1]`.
    pub fn warped_times(&self, count: usize) -> Vec<f32> {
        match count {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let last = (count - 1) as f32;
                (0..count)
                    .map(|i| self.warped_time(i as f32 / last))
                    .collect()
            }
        }
    }
}

/// Abtastung einer Shape-Funktion: Positionen und Tangentenwinkel.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocitySamples {
    /// Positionen im virtuellen Raum
    pub points: Vec<Vec2>,
    /// Tangentenwinkel (Radiant) je Position
    pub angles: Vec<f32>,
}

impl VelocitySamples {
    /// Tastet `eval` an `VELO_POINTS` gleichverteilten Zeitpunkten ab.
    ///
    /// Die Tangente entsteht aus der zentralen Differenz mit ±`TANGENT_DT`;
    /// am Rand wird der Versatz auf [0, 1] begrenzt.
    pub fn sample(eval: impl Fn(f32) -> Vec2) -> Self {
        let last = (VELO_POINTS - 1) as f32;
        let mut points = Vec::with_capacity(VELO_POINTS);
        let mut angles = Vec::with_capacity(VELO_POINTS);
        for i in 0..VELO_POINTS {
            let t = i as f32 / last;
            let forward = eval((t + TANGENT_DT).min(1.0));
            let backward = eval((t - TANGENT_DT).max(0.0));
            let delta = forward - backward;
            points.push(eval(t));
            angles.push(delta.y.atan2(delta.x));
        }
        Self { points, angles }
    }

    /// Normierte Zeit des Abtastpunkts `i`.
    fn time_of(i: usize) -> f32 {
        i as f32 / (VELO_POINTS - 1) as f32
    }

    fn first(&self) -> (Vec2, f32) {
        (self.points[0], self.angles[0])
    }

    fn last(&self) -> (Vec2, f32) {
        let i = self.points.len() - 1;
        (self.points[i], self.angles[i])
    }

    /// Anker (Shape-Position) eines Geschwindigkeits-Kontrollpunkts.
    pub fn anchor_for(&self, velo_index: usize) -> Vec2 {
        if velo_index < 2 {
            self.first().0
        } else {
            self.last().0
        }
    }
}

/// Einheitsnormale (links) zu einem Tangentenwinkel.
fn normal(angle: f32) -> Vec2 {
    Vec2::new(-angle.sin(), angle.cos())
}

/// Geschlossene Hülle: linker Flügel vorwärts, rechter Flügel rückwärts.
pub fn velocity_shape(samples: &VelocitySamples, profile: &VelocityProfile) -> GeomPath {
    let n = samples.points.len();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    for (i, (p, angle)) in samples.points.iter().zip(&samples.angles).enumerate() {
        let offset = normal(*angle) * profile.velocity_at(VelocitySamples::time_of(i)) * VELO_NORM;
        left.push(*p + offset);
        right.push(*p - offset);
    }

    let mut path = GeomPath::new();
    if let Some((first, rest)) = left.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        for p in right.iter().rev() {
            path.line_to(*p);
        }
        path.close();
    }
    path
}

/// Die vier Geschwindigkeits-Kontrollpunkte: Start links/rechts, Ende links/rechts.
pub fn velocity_ctrl_points(samples: &VelocitySamples, profile: &VelocityProfile) -> [Vec2; 4] {
    let (p0, a0) = samples.first();
    let (p1, a1) = samples.last();
    let off0 = normal(a0) * profile.start * VELO_NORM;
    let off1 = normal(a1) * profile.stop * VELO_NORM;
    [p0 + off0, p0 - off0, p1 + off1, p1 - off1]
}

/// Verschiebt einen Geschwindigkeits-Punkt und spiegelt seinen Partner am Anker.
pub fn drag_velocity_point(
    samples: &VelocitySamples,
    points: &mut [Vec2; 4],
    index: usize,
    pos: Vec2,
) {
    let anchor = samples.anchor_for(index);
    let partner = index ^ 1;
    points[index] = pos;
    points[partner] = anchor - (pos - anchor);
}

/// Leitet Start-/Stop-Geschwindigkeit aus den Punkt-Abständen zum Anker ab.
pub fn profile_from_ctrl_points(samples: &VelocitySamples, points: &[Vec2; 4]) -> VelocityProfile {
    let start = points[0].distance(samples.anchor_for(0)) / VELO_NORM;
    let stop = points[2].distance(samples.anchor_for(2)) / VELO_NORM;
    VelocityProfile::new(start, stop)
}
