//! Prime-constant supplier.
//!
//! The dictionary's hash multiplier is expected to be prime to reduce
//! collision likelihood; the table itself never checks. This module supplies
//! [`generate_multiplier`] plus the primality helpers the CLI uses to warn
//! about a non-prime override.

use once_cell::sync::Lazy;

/// Primes below 1000, built once. Enough trial divisors for any `n` below
/// one million; larger inputs fall back to 6k±1 stepping.
static SMALL_PRIMES: Lazy<Vec<usize>> = Lazy::new(|| primes_up_to(1000));

/// All primes `<= limit`, by Sieve of Eratosthenes.
pub fn primes_up_to(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    for i in 2..=((limit as f64).sqrt() as usize) {
        if is_prime[i] {
            for j in (i * i..=limit).step_by(i) {
                is_prime[j] = false;
            }
        }
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| if p { Some(i) } else { None })
        .collect()
}

/// Trial-division primality test over the small-prime table, continuing
/// with 6k±1 candidates when `n` exceeds the table's square coverage.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        if p * p > n {
            return true;
        }
        if n % p == 0 {
            return n == p;
        }
    }
    let mut d = SMALL_PRIMES.last().unwrap() + 2;
    // Resume past the table; 997 is prime so d starts on an odd number
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// The smallest prime strictly greater than `n`.
pub fn next_prime_after(n: usize) -> usize {
    let mut candidate = n + 1;
    loop {
        if is_prime(candidate) {
            return candidate;
        }
        candidate += 1;
    }
}

/// Produces the hash multiplier: 31, the conventional polynomial-hash prime.
///
/// The dictionary treats this value as an opaque constant and does not
/// require primality to function.
pub fn generate_multiplier() -> isize {
    next_prime_after(30) as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sieve_matches_known_primes() {
        assert_eq!(primes_up_to(1), Vec::<usize>::new());
        assert_eq!(primes_up_to(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn is_prime_agrees_with_sieve() {
        let primes = primes_up_to(2000);
        for n in 0..=2000 {
            assert_eq!(is_prime(n), primes.contains(&n), "n = {}", n);
        }
    }

    #[test]
    fn is_prime_handles_values_past_the_table() {
        // 1_000_003 is prime; 1_000_007 = 29 * 34483
        assert!(is_prime(1_000_003));
        assert!(!is_prime(1_000_007));
        assert!(!is_prime(997 * 997));
    }

    #[test]
    fn next_prime_after_steps_over_composites() {
        assert_eq!(next_prime_after(30), 31);
        assert_eq!(next_prime_after(31), 37);
        assert_eq!(next_prime_after(0), 2);
    }

    #[test]
    fn generated_multiplier_is_prime_and_positive() {
        let m = generate_multiplier();
        assert!(m > 0);
        assert!(is_prime(m as usize));
    }
}
