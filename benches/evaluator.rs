use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rcalc::{evaluate, InputStateMachine, Token};

/// Build a random expression with `operands` numbers and no division by zero
fn random_expression(rng: &mut ChaCha8Rng, operands: usize) -> String {
    let mut text = String::new();
    for idx in 0..operands {
        if idx > 0 {
            text.push(['+', '-', '*', '/'][rng.gen_range(0..4)]);
        }
        let whole: u32 = rng.gen_range(1..10_000);
        if rng.gen_bool(0.3) {
            text.push_str(&format!("{}.{}", whole, rng.gen_range(0..100)));
        } else {
            text.push_str(&whole.to_string());
        }
    }
    text
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for &operands in &[2usize, 8, 32, 128] {
        let expressions: Vec<String> = (0..64)
            .map(|_| random_expression(&mut rng, operands))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("operands", operands),
            &expressions,
            |b, expressions| {
                b.iter(|| {
                    for expression in expressions {
                        let _ = black_box(evaluate(black_box(expression)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_keystrokes(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let keys = format!("{}=", random_expression(&mut rng, 16));
    let tokens: Vec<Token> = keys.chars().filter_map(Token::from_key_char).collect();

    c.bench_function("keystroke_session_16_operands", |b| {
        b.iter(|| {
            let mut machine = InputStateMachine::new();
            for &token in &tokens {
                black_box(machine.handle(token));
            }
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_keystrokes);
criterion_main!(benches);
