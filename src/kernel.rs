//! Cardinal spline basis weights.
//!
//! For a fractional offset `t` between control points `p1` and `p2`,
//! the interpolated value is `w0 p0 + w1 p1 + w2 p2 + w3 p3` where
//!
//! ```text
//!   tau = (1 - tension) / 2
//!
//!   w0 = -tau (t^3 - 2 t^2 + t)
//!   w3 =  tau (t^3 - t^2)
//!   w1 =  2 t^3 - 3 t^2 + 1 - w3
//!   w2 = -2 t^3 + 3 t^2     - w0
//! ```
//!
//! Tension 0 gives the Catmull-Rom spline.

/// Weights of the four control points around a fractional offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelWeights(pub [f64; 4]);

impl KernelWeights {
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Compute the basis weights for `t` in `[0, 1]`.
pub fn weights(t: f64, tension: f64) -> KernelWeights {
    let tau = 0.5 * (1.0 - tension);
    let t2 = t * t;
    let t3 = t2 * t;

    let w0 = -tau * (t3 - 2.0 * t2 + t);
    let w3 = tau * (t3 - t2);
    let w1 = 2.0 * t3 - 3.0 * t2 + 1.0 - w3;
    let w2 = -2.0 * t3 + 3.0 * t2 - w0;

    KernelWeights([w0, w1, w2, w3])
}

#[cfg(test)]
mod tests {
    use super::weights;

    const TENSIONS: [f64; 6] = [-10.0, -1.0, -0.25, 0.0, 0.5, 3.0];

    #[test]
    fn test_weights_sum_to_one() {
        for &tension in TENSIONS.iter() {
            for i in 0..=64 {
                let t = i as f64 / 64.0;
                let sum = weights(t, tension).sum();
                assert!((sum - 1.0).abs() < 1e-9, "t={} tension={} sum={}", t, tension, sum);
            }
        }
    }

    #[test]
    fn test_weights_endpoints() {
        for &tension in TENSIONS.iter() {
            assert_eq!(weights(0.0, tension).0, [0.0, 1.0, 0.0, 0.0]);
            assert_eq!(weights(1.0, tension).0, [0.0, 0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_catmull_rom_midpoint() {
        let expected = [-0.0625, 0.5625, 0.5625, -0.0625];
        assert_eq!(weights(0.5, 0.0).0, expected);
    }

    #[test]
    fn test_negative_tension_overshoots_more() {
        let soft = weights(0.5, 0.0).0;
        let sharp = weights(0.5, -0.25).0;
        assert!(sharp[0] < soft[0]);
        assert!(sharp[3] < soft[3]);
    }
}
