// Arithmetic modulo 10^9 + 7.
//
// Every product is reduced before the next step so intermediates stay well
// inside u64: doubling peaks at (MOD - 1) * 2 and squaring at (MOD - 1)^2 < 2^60.

use std::fmt;
use std::str::FromStr;

pub const MOD: u64 = 1_000_000_007;

/// How 2^n mod MOD is computed. Both produce identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Repeated doubling, n steps.
    Linear,
    /// Exponentiation by squaring, log2(n) steps.
    #[default]
    Squaring,
}

impl Strategy {
    pub fn pow2_mod(self, n: u64) -> u64 {
        match self {
            Strategy::Linear => pow2_mod(n),
            Strategy::Squaring => pow2_mod_fast(n),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Linear => write!(f, "linear"),
            Strategy::Squaring => write!(f, "squaring"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Strategy::Linear),
            "squaring" => Ok(Strategy::Squaring),
            other => Err(format!(
                "unknown strategy '{}', expected 'linear' or 'squaring'",
                other
            )),
        }
    }
}

/// 2^n mod MOD by doubling an accumulator n times.
pub fn pow2_mod(n: u64) -> u64 {
    let mut ans = 1;
    for _ in 0..n {
        ans = (ans * 2) % MOD;
    }
    ans
}

/// 2^n mod MOD in O(log n).
pub fn pow2_mod_fast(n: u64) -> u64 {
    pow_mod(2, n)
}

fn pow_mod(mut base: u64, mut exp: u64) -> u64 {
    let mut result = 1;
    base %= MOD;
    while exp > 0 {
        if exp & 1 == 1 {
            result = (result * base) % MOD;
        }
        base = (base * base) % MOD;
        exp >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(n: u64) -> u64 {
        ((1u128 << n) % MOD as u128) as u64
    }

    #[test]
    fn test_small_exponents_match_exact_powers() {
        for n in 0..=62 {
            assert_eq!(pow2_mod(n), reference(n), "linear, n = {}", n);
            assert_eq!(pow2_mod_fast(n), reference(n), "squaring, n = {}", n);
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(pow2_mod(0), 1);
        assert_eq!(pow2_mod(1), 2);
        assert_eq!(pow2_mod(30), 73_741_817);
        assert_eq!(pow2_mod_fast(30), 73_741_817);
    }

    #[test]
    fn test_pure() {
        assert_eq!(pow2_mod(1000), pow2_mod(1000));
        assert_eq!(pow2_mod_fast(1000), pow2_mod_fast(1000));
    }

    #[test]
    fn test_each_step_doubles() {
        let mut prev = pow2_mod_fast(0);
        for n in 1..2000 {
            let next = pow2_mod_fast(n);
            assert_eq!(next, (2 * prev) % MOD);
            prev = next;
        }
    }

    #[test]
    fn test_large_exponent_stays_in_range() {
        let linear = pow2_mod(1_000_000);
        assert!(linear < MOD);
        assert_eq!(linear, 235_042_059);
        assert_eq!(linear, pow2_mod_fast(1_000_000));
    }

    #[test]
    fn test_strategies_agree() {
        for n in [0, 1, 2, 31, 32, 63, 64, 65, 1_000, 123_456] {
            assert_eq!(Strategy::Linear.pow2_mod(n), Strategy::Squaring.pow2_mod(n));
        }
    }

    #[test]
    fn test_fermat_cycle() {
        // MOD is prime, so 2^(MOD-1) == 1.
        assert_eq!(pow2_mod_fast(MOD - 1), 1);
        assert_eq!(pow2_mod_fast(u64::MAX), pow2_mod_fast(u64::MAX % (MOD - 1)));
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("linear".parse::<Strategy>(), Ok(Strategy::Linear));
        assert_eq!("squaring".parse::<Strategy>(), Ok(Strategy::Squaring));
        assert!("cubic".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::Squaring);
    }
}
