//! Benchmarks for the mtf2json parser.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mtf2json::parse_mech;

/// Build a structurally complete stat block with every section kind.
fn full_stat_block() -> String {
    let mut doc = String::new();

    doc.push_str("Version:1.0\r\nAtlas\r\nAS7-D\r\n\r\n");
    doc.push_str("Config:Biped\r\nTechBase:Inner Sphere\r\nEra:2755\r\nRules Level:1\r\n\r\n");
    doc.push_str("Mass:100\r\nEngine:300 Fusion Engine\r\nStructure:Standard\r\nMyomer:Standard\r\n\r\n");
    doc.push_str("Heat Sinks:20 Single\r\nWalk MP:3\r\nJump MP:0\r\n\r\n");
    doc.push_str("Armor:Standard(Inner Sphere)\r\n");
    for label in [
        "LA", "RA", "LT", "RT", "CT", "HD", "LL", "RL", "RTL", "RTR", "RTC",
    ] {
        doc.push_str(&format!("{} Armor:30\r\n", label));
    }
    doc.push_str("\r\nWeapons:4\r\n");
    doc.push_str("AC/20, Right Torso, Ammo:15\r\n");
    doc.push_str("LRM 20, Left Torso, Ammo:12\r\n");
    doc.push_str("2 Medium Laser, Left Arm\r\n");
    doc.push_str("SRM 6, Left Torso, Ammo:15\r\n\r\n");
    for location in [
        "Left Arm", "Right Arm", "Left Torso", "Right Torso", "Center Torso", "Head", "Left Leg",
        "Right Leg",
    ] {
        doc.push_str(&format!("{}:\r\n", location));
        for slot in 0..12 {
            if slot % 4 == 3 {
                doc.push_str("-Empty-\r\n");
            } else {
                doc.push_str(&format!("Equipment {}\r\n", slot));
            }
        }
        doc.push_str("\r\n");
    }

    doc
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = "Version:1.0\r\nLocust\r\nLCT-1V\r\n\r\nMass:20\r\n";
    let full = full_stat_block();

    group.bench_function("parse_mech_small", |b| {
        b.iter(|| parse_mech(black_box(small)))
    });

    group.bench_function("parse_mech_full", |b| {
        b.iter(|| parse_mech(black_box(&full)))
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let mech = parse_mech(&full_stat_block());

    group.bench_function("to_json_pretty", |b| {
        b.iter(|| serde_json::to_string_pretty(black_box(&mech)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_serialization);
criterion_main!(benches);
