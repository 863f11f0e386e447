#[macro_use]
mod common;

expect_output! {
    counts_up,
    "for (var i = 0; i < 3; i = i + 1) print i;",
    "0",
    "1",
    "2"
}

expect_output! {
    initializer_may_be_an_expression,
    "var i;\nfor (i = 5; i > 3; i = i - 1) print i;",
    "5",
    "4"
}

expect_output! {
    clauses_are_optional,
    "var i = 0;\nfor (; i < 2;) {\n  print i;\n  i = i + 1;\n}",
    "0",
    "1"
}

expect_output! {
    empty_clauses_loop_until_return,
    "fun spin() {\n  var n = 0;\n  for (;;) {\n    if (n == 3) return \"done\";\n    n = n + 1;\n  }\n}\nprint spin();",
    "done"
}

expect_output! {
    loop_variable_is_scoped_to_the_loop,
    "var i = \"outer\";\nfor (var i = 0; i < 1; i = i + 1) print i;\nprint i;",
    "0",
    "outer"
}
