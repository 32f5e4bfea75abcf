#![no_main]

use tinydns_proto::MessageIter;

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    if let Ok(mut iter) = MessageIter::new(data) {
        let _ = iter.for_each(|_, _| {});
    }
});
