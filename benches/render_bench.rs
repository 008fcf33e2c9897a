use criterion::{criterion_group, criterion_main, Criterion};

use recipe_card::{snapshot, RecipeCard, RecipeData};

fn sample_data() -> RecipeData {
    RecipeData {
        img_src: "https://example.com/pasta.jpg".to_string(),
        img_alt: "A bowl of pasta".to_string(),
        title_lnk: "https://example.com/pasta".to_string(),
        title_txt: "Weeknight Pasta".to_string(),
        organization: "Example Kitchen".to_string(),
        rating: 4.5,
        num_ratings: 128,
        length_time: "35 min".to_string(),
        ingredients: "Pasta, garlic, olive oil, parmesan".to_string(),
    }
}

fn bench_set_data(c: &mut Criterion) {
    let data = sample_data();
    c.bench_function("set_data_full_rerender", |b| {
        let mut card = RecipeCard::new();
        b.iter(|| {
            card.set_data(Some(data.clone()));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut card = RecipeCard::new();
    card.set_data(Some(sample_data()));

    c.bench_function("snapshot_rendered_card", |b| {
        b.iter(|| {
            let _ = snapshot::snapshot(card.shadow_root());
        })
    });
}

criterion_group!(benches, bench_set_data, bench_snapshot);
criterion_main!(benches);
