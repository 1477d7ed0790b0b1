//! Routes customer reviews from two upstream signals: a satisfaction label and a security
//! label. The network learns which verdict each combination deserves.

use review_mlp::encoding::{concat_features, decode, one_hot_of};
use review_mlp::{Dataset, FitConfig, NetworkBuilder, Shuffle};
use tracing_subscriber::EnvFilter;

const SATISFACTION: [&str; 3] = ["happy", "unhappy", "neutral"];
const SECURITY: [&str; 2] = ["safe", "threat"];
const VERDICTS: [&str; 3] = ["priority_complaint", "positive_feedback", "spam_to_delete"];

fn encode(satisfaction: &str, security: &str) -> Vec<f64> {
    let s = one_hot_of(&satisfaction, &SATISFACTION);
    let t = one_hot_of(&security, &SECURITY);
    concat_features(&[&s[..], &t[..]])
}

fn main() -> review_mlp::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // (satisfaction, security, verdict)
    let rules = [
        ("unhappy", "safe", "priority_complaint"),
        ("happy", "safe", "positive_feedback"),
        ("neutral", "safe", "positive_feedback"),
        ("happy", "threat", "spam_to_delete"),
        ("unhappy", "threat", "spam_to_delete"),
        ("neutral", "threat", "spam_to_delete"),
    ];

    let mut train = Dataset::new(SATISFACTION.len() + SECURITY.len(), VERDICTS.len())?;
    for &(satisfaction, security, verdict) in &rules {
        let target = one_hot_of(&verdict, &VERDICTS);
        train.push(&encode(satisfaction, security), &target)?;
    }

    let mut net = NetworkBuilder::new(train.input_dim(), 8, train.target_dim())?
        .learning_rate(0.3)?
        .build_with_seed(42)?;

    net.fit(
        &train,
        FitConfig {
            epochs: 3_000,
            shuffle: Shuffle::Seeded(7),
            log_every: Some(500),
        },
    )?;

    let eval = net.evaluate(&train)?;
    println!("mse={:.4} accuracy={:.2}", eval.mse, eval.accuracy);

    for &(satisfaction, security, expected) in &rules {
        let scores = net.predict(&encode(satisfaction, security))?;
        let verdict = decode(&scores, &VERDICTS)?;
        println!("{satisfaction:>8} + {security:<6} -> {verdict:<18} (expected {expected})");
    }

    Ok(())
}
