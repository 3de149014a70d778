//! Fixed-step Euler integration of the Lorenz system, plus the color palette
//! applied to each trajectory point.

/// Number of points in a full trajectory.
pub const MAX_POINTS: usize = 50_000;

/// Integration step size.
pub const DT: f64 = 0.001;

/// Starting point of every trajectory.
pub const INITIAL_POINT: [f64; 3] = [1.0, 1.0, 1.0];

/// Raw Lorenz coordinates are divided by this so the trajectory fits the
/// [-1, 1] viewing box.
const POSITION_SCALE: f64 = 50.0;

/// The three Lorenz parameters.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LorenzParams {
    pub s: f64,
    pub b: f64,
    pub r: f64,
}

/// One integrated point: scaled position and palette color (RGB in [0, 1]).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TrajectoryPoint {
    pub position: [f64; 3],
    pub color: [f64; 3],
}

/// Palette color for trajectory index `i`. Depends only on the index and the
/// cycle frequency, never on position, so a point keeps its color as the
/// animation advances.
pub fn palette_color(i: usize, frequency: f64) -> [f64; 3] {
    let t = i as f64 * frequency;
    [
        ((t + 2.0).sin() * 127.0 + 128.0) / 255.0,
        ((t + 4.0).sin() * 127.0 + 128.0) / 255.0,
        (t.sin() * 127.0 + 128.0) / 255.0,
    ]
}

/// Integrates `steps` forward-Euler steps of the Lorenz equations from
/// `initial`, returning each successive position (scaled down by 50) with its
/// palette color.
///
/// Total over all inputs: extreme parameters may overflow to infinity or NaN,
/// which simply flows through to the caller.
pub fn integrate(
    params: &LorenzParams,
    initial: [f64; 3],
    dt: f64,
    steps: usize,
    color_frequency: f64,
) -> Vec<TrajectoryPoint> {
    let [mut x, mut y, mut z] = initial;
    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let dx = params.s * (y - x);
        let dy = x * (params.r - z) - y;
        let dz = x * y - params.b * z;
        x += dt * dx;
        y += dt * dy;
        z += dt * dz;
        points.push(TrajectoryPoint {
            position: [x / POSITION_SCALE, y / POSITION_SCALE, z / POSITION_SCALE],
            color: palette_color(i, color_frequency),
        });
    }
    points
}
