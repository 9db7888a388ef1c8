use tracing::{debug, info, warn};

use crate::{cost_functions::mean_square_error, error::Result, statistics::sample::Sample};

use super::{learning_rate::LearningRate, network::Network};

pub struct TrainingHyperParameters {
    pub total_epochs: usize,
    pub learning_rate: LearningRate,
    /// Log progress every this many epochs; 0 logs only the final epoch.
    pub inform_every: usize
}

/// One input vector and the output it should produce.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self { Self { input, target } }
}

/// Mean over all examples of the squared error between forward output and target.
pub fn evaluate(network: &mut Network, examples: &[TrainingExample]) -> Result<f64> {
    if examples.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for example in examples {
        let prediction = network.forward(&example.input)?;
        total += mean_square_error(&prediction, &example.target)?;
    }

    Ok(total / examples.len() as f64)
}

/// Trains one example at a time, visiting every example once per epoch in random order.
/// Returns the loss measured after each epoch.
pub fn train_network(
    network: &mut Network,
    sample: &mut Sample<TrainingExample>,
    tp: &TrainingHyperParameters
) -> Result<Vec<f64>> {
    let rate = tp.learning_rate.rate();
    let mut losses = Vec::with_capacity(tp.total_epochs);
    let mut lowest_loss = f64::INFINITY;

    debug!(epochs = tp.total_epochs, examples = sample.len(), rate, "beginning training");
    for epoch in 1..=tp.total_epochs {
        sample.reset();
        for example in sample.random_batch(sample.len()) {
            network.train(&example.input, &example.target, rate)?;
        }

        let loss = evaluate(network, sample.all())?;
        losses.push(loss);

        let checkpoint = tp.inform_every > 0 && epoch % tp.inform_every == 0;
        let inform = epoch == tp.total_epochs || checkpoint;
        if inform {
            info!(epoch, loss, "epoch complete");
        }

        if loss < lowest_loss {
            lowest_loss = loss;
        } else if inform {
            warn!(epoch, loss, lowest_loss, "loss has not improved");
        }
    }

    Ok(losses)
}
