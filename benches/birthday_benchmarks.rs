//! Performance benchmarks for the birthday recurrence engine.
//!
//! These benchmarks measure the upcoming-birthday query over books of
//! different sizes, with birthdays spread evenly across the year.

use chrono::{Duration, NaiveDate};
use contact_assistant::{AddressBook, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a book of `size` contacts whose birthdays cycle through 1980-1983.
fn create_test_book(size: usize) -> AddressBook {
    let start = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact {}", i)).unwrap();
        record.add_phone(format!("{:010}", i)).unwrap();
        record.set_birthday(start + Duration::days((i % 1461) as i64));
        book.add_record(record).unwrap();
    }
    book
}

/// Benchmark the weekly query with different book sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2005, 12, 28).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| black_box(book.get_upcoming_birthdays(black_box(today))));
        });
    }

    group.finish();
}

/// Benchmark name lookups in a large book.
fn bench_find(c: &mut Criterion) {
    let book = create_test_book(10_000);

    c.bench_function("find_existing", |b| {
        b.iter(|| black_box(book.find(black_box("Contact 5000"))));
    });

    c.bench_function("find_missing", |b| {
        b.iter(|| black_box(book.find(black_box("Nobody"))));
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_find);
criterion_main!(benches);
