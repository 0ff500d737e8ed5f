// Configuration constants for the solver module
pub const TARGET: f64 = 24.0;
pub const EPSILON: f64 = 1e-3;
pub const MAX_SOLUTIONS: usize = 5;
