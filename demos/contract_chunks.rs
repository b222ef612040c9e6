//! Chunk a contract for embedding.
//!
//! ```bash
//! RUST_LOG=lexslab=debug cargo run --example contract_chunks
//! ```

use lexslab::{Chunker, ChunkerConfig, EstimatorKind, GreedyChunker};
use tracing_subscriber::EnvFilter;

const CONTRACT: &str = "\
LEASE AGREEMENT

1. Parties. This Lease is made between Acme Holdings LLC (\"Lessor\") and \
Jane Roe (\"Lessee\"). The parties agree as follows.

2. Term. The term of this Lease is twelve (12) months. It begins on the \
Commencement Date and ends at midnight on the last day of the term.

3. Rent. Lessee shall pay rent of $2,450.00 per month! Late payments accrue \
interest at 1.5 percent per month. See 42 U.S.C. § 3601 et seq.

4. Repairs. Does Lessor bear the cost of structural repairs? Yes, except \
where damage is caused by Lessee, Lessee's guests or invitees, or any \
animal kept on the premises in breach of Section 9 and the rules and \
regulations attached as Schedule B and incorporated by reference here";

fn main() -> lexslab::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Reference behaviour: character budget
    let chunks = lexslab::split_into_chunks(CONTRACT, 200);
    println!("split_into_chunks(.., 200): {} chunks\n", chunks.len());

    // Token budget with positions, as the embedding step would store them
    let chunker = GreedyChunker::for_tokens(48);
    for slab in chunker.chunk(CONTRACT) {
        println!(
            "[{}] bytes {}..{} ~{} tokens\n    {:?}",
            slab.index, slab.start, slab.end, slab.size, slab.text
        );
    }

    // Headings as their own sentences, word budget
    let chunker = ChunkerConfig {
        target_size: 40,
        estimator: EstimatorKind::Words,
        blank_line_breaks: true,
        ..ChunkerConfig::default()
    }
    .build()?;
    let slabs = chunker.chunk(CONTRACT);
    println!("\nword budget with blank-line breaks: {} chunks", slabs.len());
    println!("first chunk: {:?}", slabs.first().map(|s| s.text.as_str()));

    Ok(())
}
