#[cfg(not(feature = "serde"))]
fn main() {
    println!("enable the `serde` feature: cargo run --example save_load_json --features serde");
}

#[cfg(feature = "serde")]
fn main() -> review_mlp::Result<()> {
    use review_mlp::{Dataset, FitConfig, Network, Shuffle};

    let xs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let ys = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    let train = Dataset::from_rows(&xs, &ys)?;

    let mut net = Network::new_with_seed(2, 4, 1, 0)?;
    net.fit(
        &train,
        FitConfig {
            epochs: 2_000,
            shuffle: Shuffle::Seeded(0),
            log_every: None,
        },
    )?;

    let path = std::env::temp_dir().join("review_mlp_xor.json");
    net.save_json(&path)?;

    let loaded = Network::load_json(&path)?;
    for x in &xs {
        assert_eq!(net.predict(x)?, loaded.predict(x)?);
    }
    println!("saved and reloaded model: {}", path.display());
    Ok(())
}
