#[macro_use]
mod common;

expect_output! {
    or_returns_the_first_truthy_operand,
    "print 1 or 2;\nprint nil or \"yes\";\nprint false or false;",
    "1",
    "yes",
    "false"
}

expect_output! {
    and_returns_the_first_falsey_operand,
    "print nil and 1;\nprint 1 and 2;\nprint false and true;",
    "nil",
    "2",
    "false"
}

expect_output! {
    and_short_circuits,
    "fun side() { print \"evaluated\"; return true; }\nprint false and side();",
    "false"
}

expect_output! {
    or_short_circuits,
    "fun side() { print \"evaluated\"; return true; }\nprint 1 or side();",
    "1"
}

expect_output! {
    chained_logicals,
    "print nil or false or 3;\nprint 1 and 2 and nil;",
    "3",
    "nil"
}
