#[macro_use]
mod common;

expect_output! {
    strings_print_raw,
    "print \"hello world\";",
    "hello world"
}

expect_output! {
    empty_string,
    "print \"\" + \"a\";",
    "a"
}

expect_output! {
    strings_may_span_lines,
    "var a = \"one\ntwo\";\nprint a;",
    "one",
    "two"
}

expect_error! {
    unterminated_string,
    "print \"abc;",
    65,
    "[line 1] Error: Unterminated string.",
    "[line 1] Error at end: Expect expression."
}
