use prime_directive::{PrimeFactorSequence, Reach};

/// Walk every composite under 100 to a prime, allowing primes up to 10^6 on the way.
fn main() {
    let seq = PrimeFactorSequence::new(1_000_000).unwrap();

    for n in 0..100 {
        match seq.path_to(n) {
            Reach::Prime => {}
            Reach::Path(path) => {
                println!("{:>2}: {:<8} -> {}", n, path.to_string(), path.replay(n).unwrap());
            }
            Reach::Unreachable { stuck_at } => {
                println!("{:>2}: gave up at {}", n, stuck_at);
            }
        }
    }
}
