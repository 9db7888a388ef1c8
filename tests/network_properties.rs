use approx::assert_relative_eq;
use proptest::prelude::*;
use unitnet::{
    nn::initializers::{constant, uniform},
    Activation, Network, NetworkBuilder, NetworkConfig, NetworkError,
};

fn link(activation: Activation, weight: f64) -> Network {
    let mut network = Network::with_config(NetworkConfig::serial());
    let input_layer = network.append_layer();
    let output_layer = network.append_layer();

    let a = network.add_unit(input_layer, Activation::Identity).unwrap();
    let b = network.add_unit(output_layer, activation).unwrap();
    let connection = network.connect(a, b).unwrap();
    network.connection_mut(connection).unwrap().set_weight(weight);

    network
}

#[test]
fn test_input_validation() {
    let mut network = NetworkBuilder::new(2).layer(1, Activation::Sigmoid).build().unwrap();

    assert_eq!(
        network.forward(&[2.0, 0.0]),
        Err(NetworkError::RangeViolation { index: 0, value: 2.0 })
    );
    assert_eq!(
        network.forward(&[0.0]),
        Err(NetworkError::DimensionMismatch { expected: 2, actual: 1 })
    );
    assert!(network.forward(&[-1.0, 1.0]).is_ok());
}

#[test]
fn test_threshold_forward() {
    let mut network = link(Activation::Threshold(0.0), 1.0);

    assert_eq!(network.forward(&[0.5]).unwrap(), vec![1.0]);
    assert_eq!(network.forward(&[-0.5]).unwrap(), vec![0.0]);
}

#[test]
fn test_sigmoid_forward() {
    let mut network = link(Activation::Sigmoid, 0.0);
    assert_eq!(network.forward(&[1.0]).unwrap(), vec![0.5]);
}

#[test]
fn test_weight_is_shared_by_both_endpoints() {
    let mut network = Network::new();
    let input_layer = network.append_layer();
    let output_layer = network.append_layer();
    let a = network.add_unit(input_layer, Activation::Identity).unwrap();
    let b = network.add_unit(output_layer, Activation::Sigmoid).unwrap();
    network.connect_inputs(b, &[a]).unwrap();

    let via_a = network.unit(a).unwrap().outgoing()[0];
    network.connection_mut(via_a).unwrap().set_weight(0.875);

    let via_b = network.unit(b).unwrap().incoming()[0];
    assert_eq!(network.connection(via_b).unwrap().weight(), 0.875);
}

#[test]
fn test_gradient_descent_sanity() {
    let mut network = link(Activation::Sigmoid, 0.0);

    let mut previous_output = network.forward(&[1.0]).unwrap()[0];
    let mut previous_error = (1.0 - previous_output).abs();
    for _ in 0..25 {
        network.train(&[1.0], &[1.0], 0.5).unwrap();

        let output = network.forward(&[1.0]).unwrap()[0];
        let error = (1.0 - output).abs();
        assert!(output >= previous_output);
        assert!(error < previous_error);

        previous_output = output;
        previous_error = error;
    }
}

#[test]
fn test_initialize_with_constant() {
    let mut network = NetworkBuilder::new(3)
        .layer(4, Activation::Sigmoid)
        .layer(2, Activation::Sigmoid)
        .build()
        .unwrap();

    network.initialize(constant(0.3)).unwrap();
    let first = network.weights();
    assert!(first.iter().all(|&weight| weight == 0.3));

    network.initialize(constant(0.3)).unwrap();
    assert_eq!(network.weights(), first);
}

#[test]
fn test_initialize_calls_generator_once_per_connection() {
    let mut network = NetworkBuilder::new(2)
        .layer(3, Activation::Sigmoid)
        .layer(1, Activation::Sigmoid)
        .build()
        .unwrap();

    let mut calls = 0;
    network.initialize(|| { calls += 1; 0.1 }).unwrap();
    assert_eq!(calls, 2 * 3 + 3);
}

#[test]
fn test_layer_link_integrity() {
    let mut network = Network::new();
    let l0 = network.append_layer();
    let l1 = network.append_layer();
    let l2 = network.append_layer();

    let (first, second, third) = (
        network.layer(l0).unwrap(),
        network.layer(l1).unwrap(),
        network.layer(l2).unwrap(),
    );
    assert_eq!(first.previous(), None);
    assert_eq!(first.next(), Some(l1));
    assert_eq!(second.previous(), Some(l0));
    assert_eq!(second.next(), Some(l2));
    assert_eq!(third.previous(), Some(l1));
    assert_eq!(third.next(), None);
}

#[test]
fn test_parallel_matches_serial() {
    let build = |config| {
        let mut network = NetworkBuilder::new(5)
            .layer(40, Activation::Sigmoid)
            .layer(3, Activation::Sigmoid)
            .config(config)
            .build()
            .unwrap();
        network.initialize(uniform(-0.5, 0.5, 9).unwrap()).unwrap();
        network
    };

    let mut serial = build(NetworkConfig::serial());
    let mut parallel = build(NetworkConfig { parallelism: 4, parallel_threshold: 2 });
    let input = [0.1, -0.4, 0.9, -1.0, 0.0];

    assert_eq!(serial.forward(&input).unwrap(), parallel.forward(&input).unwrap());

    serial.train(&input, &[1.0, 0.0, 0.5], 0.3).unwrap();
    parallel.train(&input, &[1.0, 0.0, 0.5], 0.3).unwrap();
    assert_eq!(serial.weights(), parallel.weights());
}

#[test]
fn test_training_learns_and_function() {
    // Third input stands in for a bias.
    let examples = [
        ([0.0, 0.0, 1.0], 0.0),
        ([0.0, 1.0, 1.0], 0.0),
        ([1.0, 0.0, 1.0], 0.0),
        ([1.0, 1.0, 1.0], 1.0),
    ];

    let mut network = NetworkBuilder::new(3).layer(1, Activation::Sigmoid).build().unwrap();
    network.initialize(constant(0.0)).unwrap();

    for _ in 0..2000 {
        for (input, target) in &examples {
            network.train(input, &[*target], 1.0).unwrap();
        }
    }

    for (input, target) in &examples {
        let output = network.forward(input).unwrap()[0];
        assert_relative_eq!(output, *target, epsilon = 0.2);
    }
}

proptest! {
    #[test]
    fn forward_is_deterministic(
        weights in prop::collection::vec(-2.0f64..2.0, 3 * 4 + 4 * 2),
        input in prop::collection::vec(-1.0f64..=1.0, 3)
    ) {
        let mut network = NetworkBuilder::new(3)
            .layer(4, Activation::Sigmoid)
            .layer(2, Activation::Threshold(0.5))
            .build()
            .unwrap();

        let mut values = weights.into_iter();
        network.initialize(|| values.next().unwrap_or(0.0)).unwrap();

        let first = network.forward(&input).unwrap();
        let second = network.forward(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_inputs_are_rejected(
        value in prop_oneof![-1.0e6f64..-1.000_001, 1.000_001f64..1.0e6],
        index in 0usize..2
    ) {
        let mut network = NetworkBuilder::new(2).layer(1, Activation::Sigmoid).build().unwrap();
        network.initialize(constant(0.3)).unwrap();
        let before = network.weights();

        let mut input = vec![0.0, 0.0];
        input[index] = value;

        let rejected = Err(NetworkError::RangeViolation { index, value });
        prop_assert_eq!(network.forward(&input), rejected.clone());
        prop_assert_eq!(network.train(&input, &[1.0], 0.5), rejected.map(|_: Vec<f64>| ()));
        prop_assert_eq!(network.weights(), before);
    }
}
