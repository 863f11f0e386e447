#[macro_use]
mod common;

expect_output! {
    multiplication_before_addition,
    "print 1 + 2 * 3;",
    "7"
}

expect_output! {
    grouping_changes_precedence,
    "print (1 + 2) * 3;",
    "9"
}

expect_output! {
    division_produces_fractions,
    "print 10 / 4;",
    "2.5"
}

expect_output! {
    subtraction_and_negation,
    "print 5 - 8;\nprint -(-2);",
    "-3",
    "2"
}

expect_output! {
    negative_zero,
    "print -0;",
    "-0"
}

expect_output! {
    comparison_operators,
    "print 1 < 2;\nprint 2 <= 2;\nprint 3 > 4;\nprint 4 >= 4;",
    "true",
    "true",
    "false",
    "true"
}

expect_output! {
    equality_within_kinds,
    "print 1 == 1;\nprint 1 == 2;\nprint \"a\" == \"a\";\nprint \"a\" == \"b\";",
    "true",
    "false",
    "true",
    "false"
}

expect_output! {
    equality_across_kinds_is_false,
    "print nil == nil;\nprint nil == false;\nprint true == 1;\nprint \"1\" == 1;",
    "true",
    "false",
    "false",
    "false"
}

expect_output! {
    not_operator_uses_truthiness,
    "print !true;\nprint !nil;\nprint !0;\nprint !\"\";",
    "false",
    "true",
    "false",
    "false"
}

expect_output! {
    string_concatenation,
    "print \"foo\" + \"bar\";",
    "foobar"
}

expect_error! {
    adding_mixed_operands,
    "\"a\" + 1;",
    70,
    "Operands must be two numbers or two strings.",
    "[line 1]"
}

expect_error! {
    comparing_strings,
    "1 < \"a\";",
    70,
    "Operands must be numbers.",
    "[line 1]"
}

expect_error! {
    negating_a_string,
    "-\"a\";",
    70,
    "Operand must be a number.",
    "[line 1]"
}

expect_error! {
    division_by_zero,
    "print 1/0;",
    70,
    "Cannot divide by zero.",
    "[line 1]"
}
