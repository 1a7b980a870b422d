//! Selector lookups with and without the version-keyed cache.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use commander_engine::core::{Game, GameConfig, ZoneType};
use commander_engine::selectors::{card_location, cards_by_owner, zones_by_type, SelectorCache};
use commander_engine::zones::ZonePosition;

/// Eight players, 60 bare cards each in their libraries.
fn table() -> Game {
    let mut config = GameConfig::new();
    for p in 0..8 {
        config = config.with_player(format!("p{}", p), format!("Player {}", p));
    }
    let mut game = config.build("bench").unwrap();
    for p in 0..8 {
        let zone = format!("library-p{}", p);
        for n in 0..60 {
            game.introduce_bare_card(format!("p{}-c{}", p, n), &zone, ZonePosition::Top)
                .unwrap();
        }
    }
    game
}

fn bench_selectors(c: &mut Criterion) {
    let game = table();
    let snapshot = Some(&game);

    let mut group = c.benchmark_group("card_location");
    group.bench_function("scan", |b| {
        b.iter(|| card_location(black_box(snapshot), black_box("p7-c59")))
    });
    group.bench_function("cached", |b| {
        let mut cache = SelectorCache::new();
        b.iter(|| cache.card_location(black_box(snapshot), black_box("p7-c59")))
    });
    group.finish();

    let mut group = c.benchmark_group("zones_by_type");
    group.bench_function("scan", |b| {
        b.iter(|| zones_by_type(black_box(snapshot), ZoneType::Library).len())
    });
    group.bench_function("cached", |b| {
        let mut cache = SelectorCache::new();
        b.iter(|| cache.zones_by_type(black_box(snapshot), ZoneType::Library).len())
    });
    group.finish();

    let mut group = c.benchmark_group("cards_by_owner");
    group.bench_function("scan", |b| b.iter(|| cards_by_owner(black_box(snapshot), "p3").len()));
    group.bench_function("cached", |b| {
        let mut cache = SelectorCache::new();
        b.iter(|| cache.cards_by_owner(black_box(snapshot), "p3").len())
    });
    group.finish();
}

criterion_group!(benches, bench_selectors);
criterion_main!(benches);
