use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("invalid weights JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name} has {actual} values, expected {expected}")]
    Shape {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("network expects {expected} perception channels, grid provides {actual}")]
    Incompatible { expected: usize, actual: usize },
    #[error("weights contain non-finite values")]
    NonFinite,
}

/// Per-cell update rule: two 1x1 convolutions with a ReLU between them.
///
/// `w1` is `hidden x perception` and `w2` is `output x hidden`, both row-major.
/// The second layer has no bias, so a network with zeroed `w2` leaves the
/// grid untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetwork {
    pub perception_channels: usize,
    pub hidden_channels: usize,
    pub output_channels: usize,
    pub w1: Vec<f32>,
    pub b1: Vec<f32>,
    pub w2: Vec<f32>,
}

impl UpdateNetwork {
    pub fn zeros(perception: usize, hidden: usize, output: usize) -> Self {
        Self {
            perception_channels: perception,
            hidden_channels: hidden,
            output_channels: output,
            w1: vec![0.0; hidden * perception],
            b1: vec![0.0; hidden],
            w2: vec![0.0; output * hidden],
        }
    }

    /// Every parameter drawn from N(0, std^2). A negative or NaN `std` leaves
    /// the network zeroed.
    pub fn random<R: Rng>(perception: usize, hidden: usize, output: usize, std: f32, rng: &mut R) -> Self {
        let mut net = Self::zeros(perception, hidden, output);
        let Ok(dist) = Normal::new(0.0, std) else {
            return net;
        };
        for w in net.w1.iter_mut().chain(net.b1.iter_mut()).chain(net.w2.iter_mut()) {
            *w = dist.sample(rng);
        }
        net
    }

    pub fn from_json(json: &str) -> Result<Self, WeightsError> {
        let net: Self = serde_json::from_str(json)?;
        net.check_shape()?;
        Ok(net)
    }

    pub fn to_json(&self) -> Result<String, WeightsError> {
        Ok(serde_json::to_string(self)?)
    }

    fn check_shape(&self) -> Result<(), WeightsError> {
        let check_len = |name, expected: usize, actual: usize| {
            if expected == actual {
                Ok(())
            } else {
                Err(WeightsError::Shape {
                    name,
                    expected,
                    actual,
                })
            }
        };
        check_len("w1", self.hidden_channels * self.perception_channels, self.w1.len())?;
        check_len("b1", self.hidden_channels, self.b1.len())?;
        check_len("w2", self.output_channels * self.hidden_channels, self.w2.len())?;
        if self.w1.iter().chain(&self.b1).chain(&self.w2).any(|w| !w.is_finite()) {
            return Err(WeightsError::NonFinite);
        }
        Ok(())
    }

    /// Whether this network fits a grid with `channels` channels, of which
    /// `input_channels` are fixed.
    pub fn check_compatible(&self, channels: usize, input_channels: usize) -> Result<(), WeightsError> {
        if self.perception_channels != 3 * channels {
            return Err(WeightsError::Incompatible {
                expected: self.perception_channels,
                actual: 3 * channels,
            });
        }
        if self.output_channels != channels - input_channels {
            return Err(WeightsError::Shape {
                name: "output_channels",
                expected: channels - input_channels,
                actual: self.output_channels,
            });
        }
        Ok(())
    }

    /// Compute the update for one perception vector. `hidden` is scratch space.
    pub fn forward(&self, perception: &[f32], hidden: &mut [f32], out: &mut [f32]) {
        let p = self.perception_channels;
        for (h, slot) in hidden.iter_mut().enumerate() {
            let row = &self.w1[h * p..(h + 1) * p];
            let z = row.iter().zip(perception).map(|(w, x)| w * x).sum::<f32>() + self.b1[h];
            *slot = z.max(0.0);
        }
        let hn = self.hidden_channels;
        for (o, slot) in out.iter_mut().enumerate() {
            let row = &self.w2[o * hn..(o + 1) * hn];
            *slot = row.iter().zip(hidden.iter()).map(|(w, x)| w * x).sum();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_forward_applies_relu_and_no_output_bias() {
        let mut net = UpdateNetwork::zeros(2, 2, 1);
        // hidden0 = relu(x0 - x1 + 0.5), hidden1 = relu(-x0 - 1)
        net.w1 = vec![1.0, -1.0, -1.0, 0.0];
        net.b1 = vec![0.5, -1.0];
        net.w2 = vec![2.0, 3.0];
        let mut hidden = vec![0.0; 2];
        let mut out = vec![0.0; 1];
        net.forward(&[1.0, 0.0], &mut hidden, &mut out);
        assert_eq!(hidden, vec![1.5, 0.0]);
        assert!((out[0] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_network_outputs_zero() {
        let net = UpdateNetwork::zeros(6, 4, 1);
        let mut hidden = vec![0.0; 4];
        let mut out = vec![1.0; 1];
        net.forward(&[1.0; 6], &mut hidden, &mut out);
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn test_random_init_spread() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let net = UpdateNetwork::random(48, 128, 13, 0.1, &mut rng);
        let n = net.w1.len() as f32;
        let mean = net.w1.iter().sum::<f32>() / n;
        let var = net.w1.iter().map(|w| (w - mean).powi(2)).sum::<f32>() / n;
        assert!(mean.abs() < 0.01, "mean {}", mean);
        assert!((var.sqrt() - 0.1).abs() < 0.01, "std {}", var.sqrt());
    }

    #[test]
    fn test_random_init_is_seeded() {
        let a = UpdateNetwork::random(6, 4, 2, 1.0, &mut ChaCha8Rng::seed_from_u64(9));
        let b = UpdateNetwork::random(6, 4, 2, 1.0, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_init_invalid_std_is_zeroed() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let net = UpdateNetwork::random(6, 4, 2, f32::NAN, &mut rng);
        assert_eq!(net, UpdateNetwork::zeros(6, 4, 2), "NaN std should leave weights at zero");
        let net = UpdateNetwork::random(6, 4, 2, -1.0, &mut rng);
        assert_eq!(net, UpdateNetwork::zeros(6, 4, 2), "negative std should leave weights at zero");
    }

    #[test]
    fn test_random_init_zero_std_is_zeroed() {
        let net = UpdateNetwork::random(6, 4, 2, 0.0, &mut ChaCha8Rng::seed_from_u64(5));
        assert!(net.w1.iter().chain(&net.b1).chain(&net.w2).all(|w| *w == 0.0));
    }

    #[test]
    fn test_json_round_trip() {
        let net = UpdateNetwork::random(6, 4, 1, 0.5, &mut ChaCha8Rng::seed_from_u64(3));
        let json = net.to_json().unwrap();
        assert_eq!(UpdateNetwork::from_json(&json).unwrap(), net);
    }

    #[test]
    fn test_json_shape_mismatch() {
        let json = r#"{"perception_channels":2,"hidden_channels":2,"output_channels":1,
            "w1":[1,2,3],"b1":[0,0],"w2":[1,1]}"#;
        match UpdateNetwork::from_json(json) {
            Err(WeightsError::Shape { name, expected, actual }) => {
                assert_eq!(name, "w1");
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_syntax_error() {
        assert!(matches!(UpdateNetwork::from_json("{not json"), Err(WeightsError::Json(_))));
    }

    #[test]
    fn test_compatibility_with_grid() {
        let net = UpdateNetwork::zeros(48, 8, 13);
        assert!(net.check_compatible(16, 3).is_ok());
        assert!(matches!(
            net.check_compatible(12, 3),
            Err(WeightsError::Incompatible { .. })
        ));
        assert!(matches!(
            net.check_compatible(16, 1),
            Err(WeightsError::Shape { name: "output_channels", .. })
        ));
    }
}
