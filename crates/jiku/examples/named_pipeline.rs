//! End-to-end tour of the named-dimension API.
//!
//! Builds a small embedding table, looks up a batch of rows by coordinate,
//! projects the result through a weight matrix by name, and filters the
//! scores with a broadcast mask. No axis numbers appear anywhere.
//!
//! Run with: `cargo run --example named_pipeline`

use anyhow::Result;
use jiku::prelude::*;

fn main() -> Result<()> {
    // A 5-word vocabulary embedded in 4 feature dimensions
    let embeddings = NamedTensor::from_vec(
        (0..20).map(|i| (i % 7) as f64 * 0.5).collect(),
        &[5, 4],
        &["vocab", "feat"],
    )?;

    // Three token ids, as a coordinate table over the vocab dimension
    let tokens = NamedTensor::from_vec(vec![4usize, 0, 2], &[3, 1], &["pos", "coord"])?;
    let looked_up = multi_index_select(&embeddings, &["vocab"], &tokens)?;
    println!(
        "looked up {} positions of {} features each",
        looked_up.size("pos")?,
        looked_up.size("feat")?
    );

    // Project the features down to two scores per position
    let weights = NamedTensor::from_vec(
        vec![0.5, -0.5, 0.25, 1.0, -1.0, 0.75, 0.5, 2.0],
        &[4, 2],
        &["feat", "score"],
    )?;
    let scores = dot(&["feat"], &[&looked_up, &weights])?;
    println!("scores carry schema {}", scores.schema());

    // Keep the first score column, for every position
    let keep = NamedTensor::from_vec(vec![true, false], &[2], &["score"])?;
    let kept = masked_select(&scores, &keep, "kept")?;
    println!("kept {} of {} scores", kept.len(), scores.len());

    // Coordinates of the strictly positive survivors
    let positive = kept.map(|v| if v > 0.0 { v } else { 0.0 });
    let hits = nonzero(&positive)?;
    println!("{} positive scores", hits.size("elementsdim")?);

    Ok(())
}
