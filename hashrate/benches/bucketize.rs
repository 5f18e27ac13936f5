use hashrate::{bucketize_words, gen_bench_corpus};
use open_ambient::open_ambient_dir;
use wordset::WordSet;

const MULTIPLIER: i32 = 31;

fn bucketize_31(words: &WordSet) {
    bucketize_words(words, MULTIPLIER).unwrap();
}

gen_bench_corpus!(bucketize_31);

fn main() -> anyhow::Result<()> {
    let dir = open_ambient_dir!("../corpora")?;
    bench_corpus(dir)?;

    Ok(())
}
