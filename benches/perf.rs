use std::collections::HashMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use ffc_terminal::columns::{tab_columns, TablePage, TableSection};
use ffc_terminal::rankings::{page_slice, rank_by, DEFAULT_PAGE_SIZE};
use ffc_terminal::standings::group_standings;
use ffc_terminal::tables::PlayerStatRow;
use ffc_terminal::{filters, sample};

fn synthetic_skaters(count: u32) -> Vec<PlayerStatRow> {
    (0..count)
        .map(|idx| {
            let goals = f64::from(idx % 53);
            let assists = f64::from((idx * 7) % 71);
            let stats = HashMap::from([
                ("points".to_string(), goals + assists),
                ("goals".to_string(), goals),
                ("assists".to_string(), assists),
                ("plus_minus".to_string(), f64::from(idx % 41) - 20.0),
                ("shots".to_string(), goals * 6.5),
                ("pim".to_string(), f64::from(idx % 30)),
            ]);
            PlayerStatRow {
                season: "2024/25".to_string(),
                season_type: "Regular Season".to_string(),
                team_full_name: format!("Team {}", idx % 32),
                team_abbrev_name: format!("T{:02}", idx % 32),
                full_name: format!("Player {idx}"),
                headshot_url: String::new(),
                position_code: if idx % 3 == 0 { "D" } else { "C" }.to_string(),
                sweater_number: Some(idx % 98 + 1),
                games_played: idx % 82 + 1,
                toi_minutes: f64::from(idx % 82 + 1) * 17.3,
                stats,
            }
        })
        .collect()
}

fn bench_rank_by(c: &mut Criterion) {
    let rows = synthetic_skaters(10_000);
    let spec = tab_columns(TablePage::StatLeaders, TableSection::Skaters)
        .expect("skater tabs configured")[0];

    c.bench_function("rank_10k_skaters", |b| {
        b.iter(|| {
            let ranked = rank_by(black_box(rows.clone()), black_box(spec));
            black_box(ranked.len());
        })
    });
}

fn bench_page_slice(c: &mut Criterion) {
    let rows = synthetic_skaters(10_000);
    let spec = tab_columns(TablePage::StatLeaders, TableSection::Skaters)
        .expect("skater tabs configured")[0];
    let ranked = rank_by(rows, spec);

    c.bench_function("page_slice_mid", |b| {
        b.iter(|| {
            let page = page_slice(black_box(&ranked), DEFAULT_PAGE_SIZE, 100).unwrap();
            black_box(page.len());
        })
    });
}

fn bench_filter_stats(c: &mut Criterion) {
    let rows = synthetic_skaters(10_000);

    c.bench_function("filter_stats_by_team", |b| {
        b.iter(|| {
            let filtered = filters::filter_stats(
                black_box(&rows),
                "2024/25",
                Some("Regular Season"),
                "Team 7",
            );
            black_box(filtered.len());
        })
    });
}

fn bench_group_standings(c: &mut Criterion) {
    let rows = sample::standings();

    c.bench_function("group_standings", |b| {
        b.iter(|| {
            let groups = group_standings(black_box(&rows));
            black_box(groups.len());
        })
    });
}

criterion_group!(
    perf,
    bench_rank_by,
    bench_page_slice,
    bench_filter_stats,
    bench_group_standings
);
criterion_main!(perf);
