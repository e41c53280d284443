//! Declarative macros for CLI parsing tests.
//!
//! Each subcommand's `cli_tests.rs` lists argument vectors and the fields
//! they should produce; the macros expand them into `rstest` functions.

/// Parse `tablewright <args...>` the way `main` does.
#[cfg(test)]
pub fn parse_cli(args: &[&str]) -> Result<crate::cli::Args, clap::Error> {
    use clap::Parser;

    crate::cli::Args::try_parse_from(std::iter::once("tablewright").chain(args.iter().copied()))
}

/// Generate a test asserting that an argument vector parses into the given
/// subcommand variant with the listed field values.
///
/// # Example
///
/// ```ignore
/// cli_parse_test! {
///     test_name: test_generate_defaults,
///     args: ["generate", "-d", "a blog"],
///     variant: Generate,
///     expect: { dry_run: false, generator_cmd: None },
/// }
/// ```
#[macro_export]
macro_rules! cli_parse_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+ $(,)?],
        variant: $variant:ident,
        expect: { $($field:ident : $expected:expr),+ $(,)? } $(,)?
    ) => {
        #[rstest::rstest]
        fn $test_name() {
            let args = $crate::test_macros::parse_cli(&[$($arg),+])
                .unwrap_or_else(|e| panic!("arguments should parse: {}", e));
            let $crate::commands::Command::$variant(cmd) = args.command else {
                panic!(concat!("Expected ", stringify!($variant), " command"));
            };
            $(
                assert_eq!(cmd.$field, $expected, concat!("field `", stringify!($field), "`"));
            )+
        }
    };
}

/// Generate a test asserting that an argument vector is rejected, optionally
/// with an error message naming `mentions`.
///
/// # Example
///
/// ```ignore
/// cli_rejects_test! {
///     test_name: test_compile_requires_file,
///     args: ["compile"],
///     mentions: "--file",
/// }
/// ```
#[macro_export]
macro_rules! cli_rejects_test {
    (
        test_name: $test_name:ident,
        args: [$($arg:literal),+ $(,)?]
        $(, mentions: $mention:literal)? $(,)?
    ) => {
        #[rstest::rstest]
        fn $test_name() {
            let err = match $crate::test_macros::parse_cli(&[$($arg),+]) {
                Ok(args) => panic!("arguments should be rejected, parsed {:?}", args.command),
                Err(e) => e.to_string(),
            };
            assert!(!err.is_empty(), "rejection should carry a message");
            $(
                assert!(err.contains($mention), "error should mention {}: {}", $mention, err);
            )?
        }
    };
}
