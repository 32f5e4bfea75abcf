use criterion::{criterion_group, criterion_main, Criterion};
use tinydns_proto::MessageIter;

// A hand-built response: one question (www.example.com A), one answer
// record pointing its name back at the question via compression.
fn response_packet() -> Vec<u8> {
    let mut buf = [0u8; 128];
    let mut writer = tinydns_proto::Writer::new(&mut buf);
    tinydns_proto::Header {
        id: 1,
        flags: tinydns_proto::Flags {
            qr: true,
            rd: true,
            ra: true,
            ..Default::default()
        },
        qdcount: 1,
        ancount: 1,
        nscount: 0,
        arcount: 0,
    }
    .write(&mut writer)
    .unwrap();
    tinydns_proto::Question::new(
        tinydns_proto::Name::from_dotted("www.example.com").unwrap(),
        tinydns_proto::QueryType::A,
    )
    .write(&mut writer)
    .unwrap();
    writer.put(&[0xC0, 0x0C]).unwrap();
    writer.put_u16(1).unwrap();
    writer.put_u16(1).unwrap();
    writer.put_u32(300).unwrap();
    writer.put_u16(4).unwrap();
    writer.put(&[93, 184, 216, 34]).unwrap();
    let written = writer.written();
    buf[..written].to_vec()
}

fn decoding(packet: &[u8]) {
    let mut iter = MessageIter::new(packet).unwrap();
    while iter.next_rr().unwrap().is_some() {}
}

fn criterion_benchmark(c: &mut Criterion) {
    let packet = response_packet();
    c.bench_function("iterate response records", |b| {
        b.iter(|| decoding(&packet))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
