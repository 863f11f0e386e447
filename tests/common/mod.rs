/// Runs a program through the library and asserts on the captured output.
/// The expected lines are joined with newlines; no lines means no output.
#[macro_export]
macro_rules! expect_output {
    ($name:ident, $source:expr $(, $expected:expr)* $(,)?) => {
        #[test]
        fn $name() {
            let mut expected: Vec<&str> = vec![$($expected),*];

            // Every printed line ends with a newline.
            if !expected.is_empty() {
                expected.push("");
            }
            let expected = expected.join("\n");

            let mut output = Vec::new();
            let mut plox = plox::Plox::new(&mut output);
            let code = plox.run_source($source);

            // End the borrow on `output` before reading it back.
            drop(plox);

            assert_eq!(0, code);
            assert_eq!(expected, std::str::from_utf8(&output).unwrap());
        }
    };
}

/// Runs a program through the compiled binary and asserts on the exit code
/// and the exact stderr text.
#[macro_export]
macro_rules! expect_error {
    ($name:ident, $source:expr, $code:expr $(, $expected:expr)+ $(,)?) => {
        #[test]
        fn $name() {
            use std::io::Write;

            let expected = vec![$($expected),+].join("\n");

            let mut script = tempfile::NamedTempFile::new().unwrap();
            script.write_all($source.as_bytes()).unwrap();

            assert_cmd::Command::cargo_bin("plox").unwrap()
                .arg(script.path())
                .assert()
                .code($code)
                .stderr(format!("{expected}\n"));
        }
    };
}
