//! Shelf benchmarks

use bookshelf_core::{Book, Shelf};
use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};

fn large_shelf(size: usize) -> Shelf {
    let first = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    let books: Vec<Book> = (0..size)
        .map(|i| {
            Book::new(
                format!("Book {}", i),
                "Author",
                first + Duration::days(i as i64),
            )
        })
        .collect();

    let mut shelf = Shelf::new();
    shelf.add(&books).unwrap();
    shelf
}

fn search_benchmark(c: &mut Criterion) {
    let shelf = large_shelf(10_000);
    let start = NaiveDate::from_ymd_opt(1960, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(1965, 12, 31).unwrap();

    c.bench_function("find_by_title_or_published_date_range", |b| {
        b.iter(|| {
            std::hint::black_box(shelf.find_by_title_or_published_date_range(
                "Book 42",
                start,
                end,
            ))
        })
    });

    c.bench_function("progress", |b| {
        b.iter(|| std::hint::black_box(shelf.progress()))
    });
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
