use tinydns_proto::{Rdata, ResourceRecord, Section};

/// Human-readable label for a message section, mirroring the source's
/// per-section headings in its record dump.
pub fn section_label(section: Section) -> &'static str {
    match section {
        Section::Answer => "ANSWER",
        Section::Authority => "AUTHORITY",
        Section::Additional => "ADDITIONAL",
    }
}

/// A `xxd`-style hexdump, 16 bytes per line, used as the fallback
/// presentation for rdata this CLI doesn't render more specifically (TXT
/// and any unrecognised record type).
pub fn hexdump(data: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in data.chunks(16).enumerate() {
        out.push_str(&format!("{:08x}  ", i * 16));
        for byte in chunk {
            out.push_str(&format!("{byte:02x} "));
        }
        out.push_str("  ");
        for byte in chunk {
            let c = *byte as char;
            out.push(if c.is_ascii_graphic() { c } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Renders one resource record the way the CLI prints it to stdout.
pub fn format_record(section: Section, rr: &ResourceRecord<'_>) -> String {
    let label = section_label(section);
    match &rr.rdata {
        Rdata::A(addr) => format!("{label}\t{}\tA\t{addr}", rr.name),
        Rdata::Aaaa(addr) => format!("{label}\t{}\tAAAA\t{addr}", rr.name),
        Rdata::Cname(target) => format!("{label}\t{}\tCNAME\t{target}", rr.name),
        Rdata::Txt(bytes) => format!("{label}\t{}\tTXT\n{}", rr.name, hexdump(bytes)),
        Rdata::Srv {
            priority,
            weight,
            port,
            target,
        } => format!(
            "{label}\t{}\tSRV\t{priority} {weight} {port} {target}",
            rr.name
        ),
        Rdata::Unknown { rtype, data } => format!(
            "{label}\t{}\tTYPE{rtype}\n{}",
            rr.name,
            hexdump(data)
        ),
    }
}
