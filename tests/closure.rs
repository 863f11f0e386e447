#[macro_use]
mod common;

expect_output! {
    closures_capture_and_mutate_their_environment,
    "fun make(n) {\n  fun inc() {\n    n = n + 1;\n    return n;\n  }\n  return inc;\n}\nvar c = make(10);\nprint c();\nprint c();",
    "11",
    "12"
}

expect_output! {
    sibling_closures_share_one_environment,
    "fun counter() {\n  var n = 0;\n  fun up() { n = n + 1; print n; }\n  fun down() { n = n - 1; print n; }\n  up();\n  up();\n  down();\n}\ncounter();",
    "1",
    "2",
    "1"
}

expect_output! {
    separate_calls_get_separate_environments,
    "fun make() {\n  var n = 0;\n  fun inc() {\n    n = n + 1;\n    return n;\n  }\n  return inc;\n}\nvar a = make();\nvar b = make();\nprint a();\nprint a();\nprint b();",
    "1",
    "2",
    "1"
}

expect_output! {
    closures_capture_bindings_not_names,
    "var a = \"global\";\n{\n  fun show() { print a; }\n  show();\n  var a = \"block\";\n  show();\n}",
    "global",
    "global"
}

expect_output! {
    parentheses_do_not_change_the_result,
    "fun make(n) {\n  fun get() { return ((n)); }\n  return get;\n}\nprint (make(7))();",
    "7"
}
