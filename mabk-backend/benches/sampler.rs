use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mabk_backend::{LocalSimulatorBackend, LocalSimulatorConfig, Sampler};
use mabk_core::{Circuit, QubitId};
use mabk_gates::standard::{CNot, Hadamard, RotationZ};
use std::sync::Arc;

fn ghz_chain(num_qubits: usize, theta: f64) -> Circuit {
    let mut circuit = Circuit::new(num_qubits);
    circuit
        .add_gate(Arc::new(Hadamard), &[QubitId::new(0)])
        .unwrap();
    for i in 1..num_qubits {
        circuit
            .add_gate(Arc::new(CNot), &[QubitId::new(i - 1), QubitId::new(i)])
            .unwrap();
    }
    for i in 0..num_qubits {
        circuit
            .add_gate(Arc::new(RotationZ::new(theta)), &[QubitId::new(i)])
            .unwrap();
    }
    circuit
}

fn bench_single_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_sampler");
    let backend =
        LocalSimulatorBackend::with_config(LocalSimulatorConfig::default().with_seed(42));

    for shots in [1000usize, 8192] {
        let circuit = ghz_chain(3, 0.5);
        group.bench_with_input(BenchmarkId::new("ghz3", shots), &shots, |b, &shots| {
            b.iter(|| backend.run_one(black_box(&circuit), shots).unwrap());
        });
    }

    group.finish();
}

fn bench_sweep_batch(c: &mut Criterion) {
    let backend =
        LocalSimulatorBackend::with_config(LocalSimulatorConfig::default().with_seed(42));
    let batch: Vec<Circuit> = (0..101)
        .map(|i| ghz_chain(3, i as f64 * std::f64::consts::TAU / 100.0))
        .collect();

    c.bench_function("sweep_batch_101x1000", |b| {
        b.iter(|| backend.run(black_box(&batch), 1000).unwrap());
    });
}

criterion_group!(benches, bench_single_circuit, bench_sweep_batch);
criterion_main!(benches);
