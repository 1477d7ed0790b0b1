//! Epoch-driven training loop.
//!
//! [`Network`] itself has no notion of epochs or datasets; `fit` is the external loop that
//! calls [`Network::train`] once per example per epoch and reports progress.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Dataset, Error, Network, Result, loss, metrics};

/// Example order within an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shuffle {
    /// Storage order every epoch.
    #[default]
    None,
    /// Reshuffle every epoch with an RNG seeded once per `fit` call.
    Seeded(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    pub epochs: usize,
    pub shuffle: Shuffle,
    /// Emit an `info` event every `n` epochs. `None` disables progress logging.
    pub log_every: Option<usize>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            shuffle: Shuffle::None,
            log_every: Some(10),
        }
    }
}

impl FitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::InvalidConfig("epochs must be > 0".to_owned()));
        }
        if self.log_every == Some(0) {
            return Err(Error::InvalidConfig("log_every must be > 0".to_owned()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub epochs: usize,
    /// Mean per-example squared error of the last epoch.
    pub final_loss: f64,
    /// Mean per-example squared error for every epoch, measured before each update.
    pub losses: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalReport {
    /// Mean squared error averaged over examples and outputs.
    pub mse: f64,
    pub accuracy: f64,
}

impl Network {
    /// Train on every example of `train` once per epoch (online updates).
    pub fn fit(&mut self, train: &Dataset, cfg: FitConfig) -> Result<FitReport> {
        cfg.validate()?;
        self.check_dataset(train, "train")?;

        let mut order: Vec<usize> = (0..train.len()).collect();
        let mut rng = match cfg.shuffle {
            Shuffle::None => None,
            Shuffle::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };

        let mut losses = Vec::with_capacity(cfg.epochs);
        let mut epoch_loss = 0.0_f64;

        for epoch in 1..=cfg.epochs {
            if let Some(rng) = rng.as_mut() {
                order.shuffle(rng);
            }

            let mut total = 0.0_f64;
            for &idx in &order {
                total += self.train_step(train.input(idx), train.target(idx))?;
            }
            epoch_loss = total / train.len() as f64;

            if !epoch_loss.is_finite() {
                tracing::warn!(epoch, loss = epoch_loss, "training loss is not finite");
            }
            tracing::debug!(epoch, loss = epoch_loss, "epoch finished");
            if cfg.log_every.is_some_and(|every| epoch % every == 0) {
                tracing::info!(
                    epoch,
                    epochs = cfg.epochs,
                    loss = epoch_loss,
                    "training progress"
                );
            }

            losses.push(epoch_loss);
        }

        Ok(FitReport {
            epochs: cfg.epochs,
            final_loss: epoch_loss,
            losses,
        })
    }

    /// Mean squared error and accuracy of the current weights over `data`.
    pub fn evaluate(&self, data: &Dataset) -> Result<EvalReport> {
        self.check_dataset(data, "evaluate")?;

        let preds = data
            .iter()
            .map(|(input, _)| self.predict(input))
            .collect::<Result<Vec<_>>>()?;

        let total: f64 = preds
            .iter()
            .zip(data.iter())
            .map(|(pred, (_, target))| loss::mse(pred, target))
            .sum();
        let accuracy = metrics::accuracy(
            preds
                .iter()
                .zip(data.iter())
                .map(|(pred, (_, target))| (pred.as_slice(), target)),
        );

        Ok(EvalReport {
            mse: total / data.len() as f64,
            accuracy,
        })
    }

    fn check_dataset(&self, data: &Dataset, what: &str) -> Result<()> {
        if data.is_empty() {
            return Err(Error::InvalidData(format!("{what} dataset must not be empty")));
        }
        if data.input_dim() != self.input_nodes() {
            return Err(Error::InvalidData(format!(
                "{what} input_dim {} does not match network input_nodes {}",
                data.input_dim(),
                self.input_nodes()
            )));
        }
        if data.target_dim() != self.output_nodes() {
            return Err(Error::InvalidData(format!(
                "{what} target_dim {} does not match network output_nodes {}",
                data.target_dim(),
                self.output_nodes()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor() -> Dataset {
        let xs = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let ys = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
        Dataset::from_rows(&xs, &ys).unwrap()
    }

    #[test]
    fn fit_validates_config_and_dataset() {
        let mut net = Network::new_with_seed(2, 3, 1, 0).unwrap();
        let data = xor();

        let zero_epochs = FitConfig {
            epochs: 0,
            ..FitConfig::default()
        };
        assert!(matches!(
            net.fit(&data, zero_epochs),
            Err(Error::InvalidConfig(_))
        ));

        let zero_log = FitConfig {
            log_every: Some(0),
            ..FitConfig::default()
        };
        assert!(net.fit(&data, zero_log).is_err());

        let wrong = Dataset::from_rows(&[vec![0.0, 0.0, 0.0]], &[vec![1.0]]).unwrap();
        assert!(matches!(
            net.fit(&wrong, FitConfig::default()),
            Err(Error::InvalidData(_))
        ));
        let wrong_target = Dataset::from_rows(&[vec![0.0, 0.0]], &[vec![1.0, 0.0]]).unwrap();
        assert!(net.evaluate(&wrong_target).is_err());
    }

    #[test]
    fn fit_in_storage_order_matches_manual_loop() {
        let data = xor();
        let mut fitted = Network::new_with_seed(2, 4, 1, 3).unwrap();
        let mut manual = fitted.clone();

        let report = fitted
            .fit(
                &data,
                FitConfig {
                    epochs: 5,
                    shuffle: Shuffle::None,
                    log_every: None,
                },
            )
            .unwrap();

        for _ in 0..5 {
            for (x, y) in data.iter() {
                manual.train(x, y).unwrap();
            }
        }

        assert_eq!(fitted, manual);
        assert_eq!(report.epochs, 5);
        assert_eq!(report.losses.len(), 5);
        assert_eq!(report.final_loss, report.losses[4]);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let data = xor();
        let cfg = FitConfig {
            epochs: 20,
            shuffle: Shuffle::Seeded(9),
            log_every: None,
        };

        let mut a = Network::new_with_seed(2, 4, 1, 1).unwrap();
        let mut b = a.clone();
        let ra = a.fit(&data, cfg).unwrap();
        let rb = b.fit(&data, cfg).unwrap();
        assert_eq!(a, b);
        assert_eq!(ra, rb);
    }

    #[test]
    fn fit_reduces_loss_and_evaluate_reports_it() {
        let data = xor();
        let mut net = Network::new_with_seed(2, 4, 1, 5).unwrap();
        let before = net.evaluate(&data).unwrap();

        let report = net
            .fit(
                &data,
                FitConfig {
                    epochs: 500,
                    shuffle: Shuffle::None,
                    log_every: Some(100),
                },
            )
            .unwrap();
        let after = net.evaluate(&data).unwrap();

        assert!(report.final_loss < report.losses[0]);
        assert!(after.mse < before.mse, "before={before:?} after={after:?}");
        assert!((0.0..=1.0).contains(&after.accuracy));
    }
}
