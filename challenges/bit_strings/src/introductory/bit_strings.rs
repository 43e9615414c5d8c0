//https://cses.fi/problemset/task/1617
use std::io;

use log::debug;

use crate::modular::Strategy;
use crate::{Scanner, Writer};

// * every one of the n positions is independently 0 or 1, so there are 2^n strings
// * the answer is reported modulo 10^9 + 7
pub fn solve(strategy: Strategy, input: &mut Scanner, out: &mut Writer) -> io::Result<()> {
    let n: i64 = input.parse()?;
    let n = exponent(n)?;
    debug!("computing 2^{} mod 1e9+7 with {} strategy", n, strategy);

    out.println(strategy.pow2_mod(n));
    Ok(())
}

fn exponent(n: i64) -> io::Result<u64> {
    u64::try_from(n).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("exponent must be non-negative, got {}", n),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(strategy: Strategy, input: &str) -> io::Result<String> {
        let mut scanner = Scanner::new(Cursor::new(input.to_string()));
        let mut writer = Writer::new();
        solve(strategy, &mut scanner, &mut writer)?;
        Ok(writer.into_string().expect("utf8 output"))
    }

    #[test]
    fn test_example() {
        assert_eq!(run(Strategy::Squaring, "3\n").unwrap(), "8\n");
        assert_eq!(run(Strategy::Linear, "3\n").unwrap(), "8\n");
    }

    #[test]
    fn test_zero() {
        assert_eq!(run(Strategy::default(), "0").unwrap(), "1\n");
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(run(Strategy::default(), "\n\n   30  \n").unwrap(), "73741817\n");
    }

    #[test]
    fn test_negative_rejected() {
        let err = run(Strategy::default(), "-3").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_garbage_rejected() {
        let err = run(Strategy::default(), "ten").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_empty_input() {
        let err = run(Strategy::default(), "").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_data_files() {
        for strategy in [Strategy::Linear, Strategy::Squaring] {
            crate::testing::verify_all_tests("introductory", "bit_strings", |input, out| {
                solve(strategy, input, out)
            });
        }
    }
}
