use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rnmap::filter::{self, HostFilter, PortFilter};
use rnmap::options::*;
use rnmap::{parse_xml, Scanner};
use std::sync::Arc;
use std::time::Duration;

const LOCALHOST_XML: &[u8] = include_bytes!("../tests/fixtures/localhost.xml");

fn scanner_build_benchmark(c: &mut Criterion) {
    c.bench_function("scanner_build", |b| {
        b.iter(|| {
            let scanner = Scanner::new(vec![
                with_syn_scan(),
                with_ports("1-1024"),
                with_service_info(),
                with_version_intensity(7),
                with_timing_template(Timing::Aggressive),
                with_script_arguments([("http.useragent", "rnmap"), ("smbdomain", "corp")]),
                with_timeout(Duration::from_secs(60)),
                with_targets(["10.0.0.0/24", "192.168.1.1"]),
            ]);
            black_box(scanner)
        })
    });
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_xml", |b| {
        b.iter(|| parse_xml(black_box(LOCALHOST_XML)))
    });
}

fn filter_benchmark(c: &mut Criterion) {
    let run = match parse_xml(LOCALHOST_XML) {
        Ok(run) => run,
        Err(e) => panic!("fixture does not parse: {}", e),
    };
    let hosts: Vec<HostFilter> = vec![Arc::new(filter::host_is_up)];
    let ports: Vec<PortFilter> = vec![Arc::new(filter::port_is_open)];

    c.bench_function("filter_apply", |b| {
        b.iter(|| {
            let mut run = run.clone();
            filter::apply(&mut run, &hosts, &ports);
            black_box(run)
        })
    });
}

criterion_group!(
    benches,
    scanner_build_benchmark,
    parse_benchmark,
    filter_benchmark
);
criterion_main!(benches);
