use review_mlp::{Dataset, FitConfig, Network, Shuffle};
use tracing_subscriber::EnvFilter;

fn main() -> review_mlp::Result<()> {
    // RUST_LOG=review_mlp=debug shows every epoch.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let xs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let ys = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    let train = Dataset::from_rows(&xs, &ys)?;

    // 2 -> 4 -> 1, sigmoid everywhere, learning rate 0.1.
    let mut net = Network::new_with_seed(2, 4, 1, 0)?;
    let report = net.fit(
        &train,
        FitConfig {
            epochs: 10_000,
            shuffle: Shuffle::Seeded(0),
            log_every: Some(1_000),
        },
    )?;

    let eval = net.evaluate(&train)?;
    println!(
        "epochs={} final_loss={:.6} mse={:.6} accuracy={:.2}",
        report.epochs, report.final_loss, eval.mse, eval.accuracy
    );

    for x in &xs {
        let y = net.predict(x)?;
        println!("{x:?} -> {:.4}", y[0]);
    }

    Ok(())
}
