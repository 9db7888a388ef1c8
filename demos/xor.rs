use tracing_subscriber::EnvFilter;
use unitnet::{
    nn::{
        initializers::uniform,
        learning_rate::LearningRate,
        trainer::{train_network, TrainingExample, TrainingHyperParameters},
    },
    statistics::sample::Sample,
    Activation, NetworkBuilder,
};

/// Units have no bias, so the third input is held at 1 to play that part.
fn xor_examples() -> Vec<TrainingExample> {
    [(0.0, 0.0, 0.0), (0.0, 1.0, 1.0), (1.0, 0.0, 1.0), (1.0, 1.0, 0.0)]
        .into_iter()
        .map(|(a, b, expected)| TrainingExample::new(vec![a, b, 1.0], vec![expected]))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut network = NetworkBuilder::new(3)
        .layer(4, Activation::Sigmoid)
        .layer(1, Activation::Sigmoid)
        .build()?;
    network.initialize(uniform(-1.0, 1.0, 42)?)?;

    let mut sample = Sample::create_sample(xor_examples());
    let tp = TrainingHyperParameters {
        total_epochs: 5000,
        learning_rate: LearningRate::new(0.5)?,
        inform_every: 500
    };

    let losses = train_network(&mut network, &mut sample, &tp)?;
    println!("Final loss: {:.5}", losses.last().copied().unwrap_or_default());

    for example in xor_examples() {
        let prediction = network.forward(&example.input)?;
        let pair = &example.input[..2];
        println!("{pair:?} -> {:.3} (expected {})", prediction[0], example.target[0]);
    }

    Ok(())
}
