use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::{debug, info};

pub mod introductory;
pub mod modular;

use modular::Strategy;

/// A solution entry point: read the problem input, write the answer.
pub type SolveFn = fn(Strategy, &mut Scanner, &mut Writer) -> io::Result<()>;

/// Whitespace-token input reader for competitive programming
pub struct Scanner {
    reader: Box<dyn BufRead>,
    tokens: VecDeque<String>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            tokens: VecDeque::new(),
        }
    }

    /// Reads the rest of the current line, trimmed. Tokens already buffered by
    /// `next_token` are returned first. Returns an empty string at end of input.
    pub fn next_line(&mut self) -> io::Result<String> {
        if !self.tokens.is_empty() {
            let rest: Vec<String> = self.tokens.drain(..).collect();
            return Ok(rest.join(" "));
        }
        let mut input = String::new();
        self.reader.read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Next whitespace-delimited token, skipping blank lines.
    pub fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "expected a token, found end of input",
                ));
            }
            self.tokens
                .extend(line.split_ascii_whitespace().map(str::to_string));
        }
    }

    pub fn parse<T: FromStr>(&mut self) -> io::Result<T> {
        let token = self.next_token()?;
        token.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid token {:?}", token),
            )
        })
    }
}

/// Fast output writer for competitive programming (writes to memory buffer)
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        // Writing into a Vec<u8> cannot fail.
        let _ = write!(self.0, "{}", value);
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        let _ = writeln!(self.0, "{}", value);
    }

    /// Copies the buffered output to `sink` and flushes it.
    pub fn flush_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.0)?;
        sink.flush()
    }

    pub fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Named solutions of one problem category, dispatched by the CLI.
pub struct TaskGroup {
    category: &'static str,
    strategy: Strategy,
    tasks: Vec<(&'static str, SolveFn)>,
}

impl TaskGroup {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            strategy: Strategy::default(),
            tasks: Vec::new(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn add(mut self, name: &'static str, solve: SolveFn) -> Self {
        self.tasks.push((name, solve));
        self
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|(name, _)| *name).collect()
    }

    fn find(&self, name: &str) -> io::Result<SolveFn> {
        self.tasks
            .iter()
            .find(|(task, _)| *task == name)
            .map(|(_, solve)| *solve)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!(
                        "unknown {} task '{}', available: {}",
                        self.category,
                        name,
                        self.names().join(", ")
                    ),
                )
            })
    }

    /// Runs a task against `input`, writing its answer to `output`.
    pub fn run<W: Write>(
        &self,
        name: &str,
        input: impl BufRead + 'static,
        output: &mut W,
    ) -> io::Result<()> {
        let solve = self.find(name)?;
        debug!("running {}/{} ({})", self.category, name, self.strategy);

        let mut scanner = Scanner::new(input);
        let mut writer = Writer::new();
        solve(self.strategy, &mut scanner, &mut writer)?;
        writer.flush_to(output)
    }

    /// Runs the bundled data-file cases of a task. Returns true when all pass.
    pub fn verify(&self, name: &str) -> io::Result<bool> {
        let solve = self.find(name)?;
        info!("verifying {}/{} ({})", self.category, name, self.strategy);
        let strategy = self.strategy;
        Ok(testing::run_all_tests(self.category, name, |input, out| {
            solve(strategy, input, out)
        }))
    }
}

/// Test utilities for running and verifying test cases
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::{self, Cursor};
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn test_dir(category: &str, problem_name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join(category)
            .join(problem_name)
    }

    /// Discover all test case numbers for a given problem
    pub fn discover_tests(category: &str, problem_name: &str) -> Vec<usize> {
        let test_dir = test_dir(category, problem_name);

        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&test_dir) {
            for entry in entries.flatten() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if let Some(num_str) = file_name.strip_suffix(".in") {
                        if let Ok(num) = num_str.parse::<usize>() {
                            test_numbers.push(num);
                        }
                    }
                }
            }
        }

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single test case and return (expected, actual, duration) output
    pub fn run_test_case<F>(
        category: &str,
        problem_name: &str,
        test_num: usize,
        solve_fn: F,
    ) -> Result<(String, String, Duration), String>
    where
        F: FnOnce(&mut Scanner, &mut Writer) -> io::Result<()>,
    {
        let test_dir = test_dir(category, problem_name);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer).map_err(|e| format!("Solution failed: {}", e))?;
        let duration = start.elapsed();

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((
            expected.trim().to_string(),
            actual.trim().to_string(),
            duration,
        ))
    }

    /// Verify all test cases for a problem
    pub fn verify_all_tests<F>(category: &str, problem_name: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> io::Result<()>,
    {
        let test_cases = discover_tests(category, problem_name);
        assert!(
            !test_cases.is_empty(),
            "No test cases found for {}/{}",
            category,
            problem_name
        );

        let mut total_duration = Duration::ZERO;

        for test_num in test_cases {
            match run_test_case(category, problem_name, test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    assert_eq!(
                        actual,
                        expected,
                        "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        test_num,
                        duration.as_secs_f64(),
                        expected,
                        actual
                    );
                }
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }

        println!("Total time: {:.2}s", total_duration.as_secs_f64());
    }

    /// Run all test cases and print results (for CLI usage). Returns true when none failed.
    pub fn run_all_tests<F>(category: &str, problem_name: &str, solve_fn: F) -> bool
    where
        F: Fn(&mut Scanner, &mut Writer) -> io::Result<()>,
    {
        let test_cases = discover_tests(category, problem_name);
        if test_cases.is_empty() {
            println!("No test cases found for {}/{}", category, problem_name);
            return true;
        }

        println!(
            "Running {} test cases for {}/{}...",
            test_cases.len(),
            category,
            problem_name
        );

        let mut passed = 0;
        let mut failed = 0;
        let mut total_duration = Duration::ZERO;

        for test_num in &test_cases {
            match run_test_case(category, problem_name, *test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    if actual == expected {
                        println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                        passed += 1;
                    } else {
                        println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Test case {}: ERROR - {}", test_num, e);
                    failed += 1;
                }
            }
        }

        println!("\nResults: {} passed, {} failed", passed, failed);
        println!("Total time: {:.2}s", total_duration.as_secs_f64());
        failed == 0
    }
}
