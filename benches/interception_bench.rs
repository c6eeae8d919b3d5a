// benches/interception_bench.rs
//! Proxy hot-path and codec benchmarks
//!
//! The proxy sits on every service call for the life of the process, so
//! the pass-through and matched paths both need to stay allocation-light.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sigshim::interception::{ProxyConfig, SigningProxy};
use sigshim::service::registry::PackageEntry;
use sigshim::{
    Certificate, PackageRegistry, PackageService, SignatureBundle, GET_SIGNING_CERTIFICATES,
};
use std::sync::Arc;

const TARGET: &str = "com.example.app";
const OTHER: &str = "com.example.other";

fn build_proxy() -> SigningProxy {
    let registry = PackageRegistry::new();
    for (name, uid) in [(TARGET, 10042), (OTHER, 10001)] {
        registry.insert(
            name,
            PackageEntry {
                version_code: 1,
                uid,
                installer: None,
                signing_certificates: vec![Certificate::new(vec![0xAB; 1024])],
            },
        );
    }

    let bundle = SignatureBundle::new(vec![vec![0xCD; 1024]]).unwrap();
    let config = ProxyConfig::new(TARGET, GET_SIGNING_CERTIFICATES, bundle);
    SigningProxy::new(Arc::new(registry), Arc::new(config))
}

fn bench_proxy(c: &mut Criterion) {
    let proxy = build_proxy();

    c.bench_function("matched_identity_query", |b| {
        b.iter(|| {
            proxy
                .package_record(black_box(TARGET), black_box(GET_SIGNING_CERTIFICATES))
                .unwrap()
        })
    });

    c.bench_function("passthrough_identity_query", |b| {
        b.iter(|| {
            proxy
                .package_record(black_box(OTHER), black_box(GET_SIGNING_CERTIFICATES))
                .unwrap()
        })
    });

    c.bench_function("passthrough_uid_lookup", |b| {
        b.iter(|| proxy.uid_for_package(black_box(OTHER)).unwrap())
    });
}

fn bench_codec(c: &mut Criterion) {
    let bundle = SignatureBundle::new(vec![vec![0xEF; 1024]; 3]).unwrap();
    let encoded = bundle.encode();

    c.bench_function("bundle_decode", |b| {
        b.iter(|| SignatureBundle::decode(black_box(&encoded)).unwrap())
    });

    c.bench_function("bundle_encode", |b| b.iter(|| black_box(&bundle).encode()));
}

criterion_group!(benches, bench_proxy, bench_codec);
criterion_main!(benches);
