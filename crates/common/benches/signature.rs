use criterion::{black_box, criterion_group, criterion_main, Criterion};
use verify_sdk_common::request_signing::{
    build_signed_parameters_at, compute_signature, response_signature, ClientIdentity,
    ParameterSet, SharedSecret,
};

fn sample_params() -> ParameterSet {
    [
        ("device_id", "fq_7le_qTzY:APA91bEm38BfOBh4hDEWHyKe0FdNJPpyJ86hX9VX_0Zq6clsrhPm0ZKkI2ZlxTw4DToTFF768rS-"),
        ("source_ip_address", "127.0.0.1"),
        ("number", "+521111111111"),
        ("token", "a&b=c,d-0123456789abcdef"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn bench_compute_signature(c: &mut Criterion) {
    let params = sample_params();
    let secret = SharedSecret::from("f3ac8cc9b1ddde5");
    c.bench_function("signing/compute_signature", |b| {
        b.iter(|| black_box(compute_signature(black_box(&params), &secret)));
    });
}

fn bench_build_signed_parameters(c: &mut Criterion) {
    let params = sample_params();
    let identity = ClientIdentity::new("aa6215a6-2c00-4625-85e9-6426bb377027", "f3ac8cc9b1ddde5");
    c.bench_function("signing/build_signed_parameters", |b| {
        b.iter(|| {
            black_box(build_signed_parameters_at(
                black_box(&params),
                &identity,
                1_465_215_221,
            ))
        });
    });
}

fn bench_response_signature(c: &mut Criterion) {
    let body = br#"{"result_code":0,"result_message":"OK","timestamp":"1465215221","user_status":"unknown"}"#;
    let secret = SharedSecret::from("f3ac8cc9b1ddde5");
    c.bench_function("signing/response_signature", |b| {
        b.iter(|| black_box(response_signature(black_box(body), &secret)));
    });
}

criterion_group!(
    benches,
    bench_compute_signature,
    bench_build_signed_parameters,
    bench_response_signature
);
criterion_main!(benches);
