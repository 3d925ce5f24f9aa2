//! Gradient-descent optimizers.
//!
//! Both steppers work over flat parameter slices; the solvers flatten their
//! weight tensors before stepping. The solvers use Adam(0.02) for the
//! classifier and NesterovMomentum(0.08) for VQE.

/// Adam optimizer (Kingma & Ba 2014).
#[derive(Debug, Clone)]
pub struct Adam {
    /// Learning rate.
    pub step_size: f64,
    /// First-moment decay.
    pub beta1: f64,
    /// Second-moment decay.
    pub beta2: f64,
    /// Denominator fuzz term.
    pub eps: f64,
    m: Vec<f64>,
    v: Vec<f64>,
    t: u32,
}

impl Adam {
    /// Create an Adam stepper with the standard moment decays.
    pub fn new(step_size: f64) -> Self {
        Self {
            step_size,
            beta1: 0.9,
            beta2: 0.999,
            eps: 1e-8,
            m: vec![],
            v: vec![],
            t: 0,
        }
    }

    /// Apply one update step in place.
    ///
    /// # Panics
    /// Panics if `params` and `grad` lengths differ.
    pub fn step(&mut self, params: &mut [f64], grad: &[f64]) {
        assert_eq!(params.len(), grad.len(), "parameter/gradient length mismatch");
        if self.m.len() != params.len() {
            self.m = vec![0.0; params.len()];
            self.v = vec![0.0; params.len()];
            self.t = 0;
        }
        self.t += 1;
        let bc1 = 1.0 - self.beta1.powi(self.t as i32);
        let bc2 = 1.0 - self.beta2.powi(self.t as i32);
        for i in 0..params.len() {
            self.m[i] = self.beta1 * self.m[i] + (1.0 - self.beta1) * grad[i];
            self.v[i] = self.beta2 * self.v[i] + (1.0 - self.beta2) * grad[i] * grad[i];
            let m_hat = self.m[i] / bc1;
            let v_hat = self.v[i] / bc2;
            params[i] -= self.step_size * m_hat / (v_hat.sqrt() + self.eps);
        }
    }
}

/// Nesterov accelerated gradient descent.
///
/// The gradient must be evaluated at the [`lookahead`](Self::lookahead)
/// point, not at the current parameters.
#[derive(Debug, Clone)]
pub struct NesterovMomentum {
    /// Learning rate.
    pub step_size: f64,
    /// Momentum coefficient.
    pub momentum: f64,
    velocity: Vec<f64>,
}

impl NesterovMomentum {
    /// Create a stepper with the conventional momentum of 0.9.
    pub fn new(step_size: f64) -> Self {
        Self {
            step_size,
            momentum: 0.9,
            velocity: vec![],
        }
    }

    /// The point at which the gradient should be evaluated:
    /// `params - momentum · velocity`.
    pub fn lookahead(&self, params: &[f64]) -> Vec<f64> {
        if self.velocity.len() != params.len() {
            return params.to_vec();
        }
        params
            .iter()
            .zip(&self.velocity)
            .map(|(p, v)| p - self.momentum * v)
            .collect()
    }

    /// Apply one update step in place, given the gradient at the lookahead
    /// point.
    ///
    /// # Panics
    /// Panics if `params` and `grad` lengths differ.
    pub fn step(&mut self, params: &mut [f64], grad: &[f64]) {
        assert_eq!(params.len(), grad.len(), "parameter/gradient length mismatch");
        if self.velocity.len() != params.len() {
            self.velocity = vec![0.0; params.len()];
        }
        for i in 0..params.len() {
            self.velocity[i] = self.momentum * self.velocity[i] + self.step_size * grad[i];
            params[i] -= self.velocity[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Quadratic bowl: f(x) = Σ xᵢ², gradient 2x.
    fn quad_grad(x: &[f64]) -> Vec<f64> {
        x.iter().map(|v| 2.0 * v).collect()
    }

    #[test]
    fn adam_descends_quadratic() {
        let mut opt = Adam::new(0.1);
        let mut x = vec![1.0, -2.0];
        for _ in 0..200 {
            let g = quad_grad(&x);
            opt.step(&mut x, &g);
        }
        assert!(x.iter().all(|v| v.abs() < 1e-2));
    }

    #[test]
    fn nesterov_descends_quadratic() {
        let mut opt = NesterovMomentum::new(0.05);
        let mut x = vec![1.5, -0.5];
        for _ in 0..200 {
            let look = opt.lookahead(&x);
            let g = quad_grad(&look);
            opt.step(&mut x, &g);
        }
        assert!(x.iter().all(|v| v.abs() < 1e-2));
    }

    #[test]
    fn lookahead_is_identity_before_first_step() {
        let opt = NesterovMomentum::new(0.1);
        let x = vec![0.3, 0.4];
        assert_eq!(opt.lookahead(&x), x);
    }
}
