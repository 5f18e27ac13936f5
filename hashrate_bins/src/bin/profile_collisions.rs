use hashrate::{bucketize_words, collision_rate_list, gen_corpus_main, DEFAULT_MULTIPLIERS};
use open_ambient::open_ambient_dir;
use wordset::WordSet;

const ITERS: usize = 100;

gen_corpus_main!(collisions);

fn main() -> anyhow::Result<()> {
    let dir = open_ambient_dir!("../corpora")?;
    corpus_main(dir)?;
    Ok(())
}

pub fn collisions(words: &WordSet) {
    for _ in 0..ITERS {
        let _ = collision_rate_list(words, &DEFAULT_MULTIPLIERS);
        let _ = bucketize_words(words, 31);
    }
}
