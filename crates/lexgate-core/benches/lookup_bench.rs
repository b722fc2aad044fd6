use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexgate_core::{PhraseIndex, SuffixIndex, TokenId};

/// Deterministic phrase corpus: many phrases with heavily shared heads,
/// which is the shape real lexicons take after tokenization.
fn phrase_corpus(phrases: usize, len: usize) -> Vec<Vec<TokenId>> {
    (0..phrases)
        .map(|i| {
            (0..len)
                .map(|j| ((i * 31 + j * 17) % 512) as TokenId)
                .collect()
        })
        .collect()
}

fn suffix_corpus(count: usize) -> Vec<Vec<TokenId>> {
    (0..count)
        .map(|i| vec![(i % 64) as TokenId, 600, 601])
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let phrases = phrase_corpus(1_000, 8);
    c.bench_function("phrase_index_build_1k", |b| {
        b.iter(|| PhraseIndex::build(black_box(&phrases)))
    });
}

fn bench_allowed_tokens(c: &mut Criterion) {
    let phrases = phrase_corpus(1_000, 8);
    let index = PhraseIndex::build(&phrases);

    // Mid-phrase lookup: the history tail retraces a registered prefix.
    let matching: Vec<TokenId> = phrases[37][..5].to_vec();
    c.bench_function("allowed_tokens_match", |b| {
        b.iter(|| index.allowed_tokens(black_box(&matching)))
    });

    // Long history whose tail leaves the trie after one edge.
    let diverging: Vec<TokenId> = (0..128).map(|i| (i + 700) as TokenId).collect();
    c.bench_function("allowed_tokens_divergent", |b| {
        b.iter(|| index.allowed_tokens(black_box(&diverging)))
    });
}

fn bench_suffix_match(c: &mut Criterion) {
    let suffixes = suffix_corpus(64);
    let index = SuffixIndex::build(&suffixes);

    let mut hit: Vec<TokenId> = (0..128).collect();
    hit.extend_from_slice(&[9, 600, 601]);
    c.bench_function("suffix_match_hit", |b| {
        b.iter(|| index.is_match(black_box(&hit)))
    });

    let miss: Vec<TokenId> = (0..128).collect();
    c.bench_function("suffix_match_miss", |b| {
        b.iter(|| index.is_match(black_box(&miss)))
    });
}

criterion_group!(benches, bench_build, bench_allowed_tokens, bench_suffix_match);
criterion_main!(benches);
