use prime_directive::PrimeFactorSequence;

/// Print the (big) prime omega function Ω(n) and the numbers sharing each value.
/// Reference: <https://en.wikipedia.org/wiki/Prime_omega_function>
fn main() {
    let seq = PrimeFactorSequence::new(99).unwrap();
    let omega = seq.factor_count_sequence();

    println!("Prime omega of numbers from 10 to 99:");
    for i in 10..100 {
        println!("{}: Ω={}", i, omega[i]);
    }

    for m in 1..=6 {
        println!("Ω={}: {:?}", m, seq.numbers_with_exact_factor_count(m));
    }
    println!("Consecutive semiprimes: {:?}", seq.close_adjacent_pairs(2, 1));
}
