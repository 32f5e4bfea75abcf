#![no_main]

use tinydns_proto::fuzzing::QueryInput;
use tinydns_proto::{build_query, QueryType};

libfuzzer_sys::fuzz_target!(|input: QueryInput| {
    let mut buf = [0u8; 512];
    let _ = build_query(&mut buf, input.id, &input.name, QueryType::from_code(input.qtype_code));
});
