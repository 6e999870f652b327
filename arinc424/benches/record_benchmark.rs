// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::hint::black_box;

use arinc424::records::{Airport, Procedure, RecordKind, Records, Runway, VhfNavaid, Waypoint};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const AIRPORT: &'static [u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
const WAYPOINT: &'static [u8] = b"SEURPCEDDHED W1    ED0    V     N53341894E009404512                                 WGE           WHISKEY1                 122922407";
const RUNWAY: &'static [u8] = b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";
const VORTAC: &'static [u8] = b"SUSAD        ABQ   K2111320VTHW N35023760W106480980ABQ N35023760W106480980E013005740      NARALBUQUERQUE                   123452313";
const SID: &'static [u8] = b"SUSAP KABQK2DABQ1  5RW08  010ALISSK2PC1E  FR   CF ABQ K2      0800012007940050D   + 07000          210               -     123492313";

/// Benchmark individual record parsing
fn bench_records(c: &mut Criterion) {
    c.bench_function("airport", |b| {
        b.iter(|| Airport::try_from(black_box(AIRPORT)))
    });

    c.bench_function("waypoint", |b| {
        b.iter(|| Waypoint::try_from(black_box(WAYPOINT)))
    });

    c.bench_function("runway", |b| b.iter(|| Runway::try_from(black_box(RUNWAY))));

    c.bench_function("vhf navaid", |b| {
        b.iter(|| VhfNavaid::try_from(black_box(VORTAC)))
    });

    c.bench_function("procedure", |b| {
        b.iter(|| Procedure::try_from(black_box(SID)))
    });
}

/// Benchmark the record classification that drives the loader
fn bench_classify(c: &mut Criterion) {
    let records = [AIRPORT, WAYPOINT, RUNWAY, VORTAC, SID];

    c.bench_function("kind_of", |b| {
        b.iter(|| {
            records
                .iter()
                .filter_map(|record| Records::kind_of(black_box(record)))
                .count()
        })
    });

    c.bench_function("runway length", |b| {
        b.iter(|| {
            Runway::try_from(black_box(RUNWAY)).and_then(|rwy| rwy.runway_length.as_u32())
        })
    });
}

/// Benchmark parsing the FAA CIFP if it is present in the working directory
fn bench_faa_cifp(c: &mut Criterion) {
    let Ok(data) = fs::read("FAACIFP18") else {
        return;
    };
    let mut group = c.benchmark_group("FAA CIFP");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("baseline", |b| {
        b.iter(|| {
            let count = Records::new(&data).count();
            black_box(count)
        })
    });

    group.bench_function("procedures", |b| {
        b.iter(|| {
            let count = Records::new(&data)
                .filter(|(kind, _)| {
                    matches!(kind, RecordKind::SID | RecordKind::STAR | RecordKind::Approach)
                })
                .filter(|(_, bytes)| Procedure::try_from(*bytes).is_ok())
                .count();
            black_box(count)
        })
    });

    group.bench_function("runways", |b| {
        b.iter(|| {
            let count = Records::new(&data)
                .filter(|(kind, _)| *kind == RecordKind::Runway)
                .filter(|(_, bytes)| Runway::try_from(*bytes).is_ok())
                .count();
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_classify, bench_faa_cifp);
criterion_main!(benches);
