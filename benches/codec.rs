use bytes::BytesMut;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use gsx::messages::{
    CatchNpc, LoadNetModule, Packet, SmartTextMessage, TextModule, TweakItem, UnknownMessage,
};
use gsx::protocol::{Color, Direction, Frames, NetworkText};

fn sample_packets() -> Vec<(&'static str, Packet, Direction)> {
    let mut tweak = TweakItem::new(12);
    tweak.damage = Some(40);
    tweak.scale = Some(1.5);
    tweak.not_ammo = Some(true);

    let nested = NetworkText::formatted(
        "{0} was slain by {1}",
        vec![
            NetworkText::literal("Ann"),
            NetworkText::localized("NPCName.Zombie", vec![]),
        ],
    );

    vec![
        (
            "catch_npc",
            CatchNpc {
                npc_index: 7,
                player_index: 1,
            }
            .into(),
            Direction::ServerBound,
        ),
        ("tweak_item", tweak.into(), Direction::ClientBound),
        (
            "smart_text",
            SmartTextMessage::new(Color::new(255, 25, 25), nested).into(),
            Direction::ClientBound,
        ),
        (
            "chat_module",
            LoadNetModule::new(TextModule::chat("Say", "hello there")).into(),
            Direction::ServerBound,
        ),
        (
            "unknown_1kb",
            UnknownMessage::new(200, vec![0u8; 1024]).into(),
            Direction::ClientBound,
        ),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for (name, packet, direction) in sample_packets() {
        let len = gsx::encode(&packet, direction).unwrap().len();
        group.throughput(Throughput::Bytes(len as u64));
        let mut buf = BytesMut::with_capacity(len);
        group.bench_function(format!("encode_{name}"), |b| {
            b.iter(|| {
                buf.clear();
                black_box(gsx::encode_into(&packet, direction, &mut buf).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for (name, packet, direction) in sample_packets() {
        let encoded = gsx::encode(&packet, direction).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_function(format!("decode_{name}"), |b| {
            b.iter(|| {
                black_box(gsx::decode(&encoded, direction).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let mut stream = BytesMut::new();
    for npc_index in 0..1000u16 {
        let packet = Packet::from(CatchNpc {
            npc_index,
            player_index: 0,
        });
        gsx::encode_into(&packet, Direction::ServerBound, &mut stream).unwrap();
    }
    group.throughput(Throughput::Bytes(stream.len() as u64));
    group.bench_function("frames_1000", |b| {
        b.iter(|| {
            let count = Frames::new(&stream, Direction::ServerBound)
                .filter(Result::is_ok)
                .count();
            black_box(count);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_stream);
criterion_main!(benches);
