#[macro_use]
mod common;

expect_output! {
    counts_down,
    "var n = 3;\nwhile (n > 0) {\n  print n;\n  n = n - 1;\n}",
    "3",
    "2",
    "1"
}

expect_output! {
    false_condition_skips_the_body,
    "while (false) print \"never\";\nprint \"after\";",
    "after"
}

expect_output! {
    condition_is_reevaluated,
    "var n = 0;\nwhile (n < 2) n = n + 1;\nprint n;",
    "2"
}

expect_output! {
    return_exits_a_loop,
    "fun first() {\n  var n = 0;\n  while (true) {\n    if (n >= 5) return n;\n    n = n + 1;\n  }\n}\nprint first();",
    "5"
}
