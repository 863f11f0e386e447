#[macro_use]
mod common;

expect_output! {
    return_produces_the_call_result,
    "fun three() { return 3; }\nprint three();",
    "3"
}

expect_output! {
    bare_return_yields_nil,
    "fun nothing() { return; }\nprint nothing();",
    "nil"
}

expect_output! {
    falling_off_the_end_yields_nil,
    "fun nothing() {}\nprint nothing();",
    "nil"
}

expect_output! {
    return_skips_the_rest_of_the_body,
    "fun f() {\n  print \"before\";\n  return;\n  print \"after\";\n}\nf();",
    "before"
}

expect_output! {
    return_unwinds_nested_blocks,
    "fun f() {\n  {\n    {\n      return \"deep\";\n    }\n  }\n}\nprint f();",
    "deep"
}

expect_error! {
    return_at_top_level,
    "return;",
    65,
    "[line 1] Error at 'return': Can't return from top-level code."
}

expect_error! {
    return_inside_a_block_at_top_level,
    "{\n  return \"nope\";\n}",
    65,
    "[line 2] Error at 'return': Can't return from top-level code."
}
