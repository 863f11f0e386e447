#[macro_use]
mod common;

expect_output! {
    uninitialized_variable_is_nil,
    "var x;\nprint x;",
    "nil"
}

expect_output! {
    define_and_read,
    "var a = 1;\nvar b = 2;\nprint a + b;",
    "3"
}

expect_output! {
    globals_may_be_redefined,
    "var a = 1;\nvar a = 2;\nprint a;",
    "2"
}

expect_output! {
    blocks_shadow_outer_scopes,
    "var a = \"hi\";\n{ var a = \"bye\"; print a; }\nprint a;",
    "bye",
    "hi"
}

expect_output! {
    globals_resolve_late,
    "fun f() { print g; }\nvar g = 3;\nf();",
    "3"
}

expect_error! {
    reading_an_undefined_variable,
    "print x;",
    70,
    "Undefined variable 'x'.",
    "[line 1]"
}

expect_error! {
    assigning_an_undefined_variable,
    "x = 1;",
    70,
    "Undefined variable 'x'.",
    "[line 1]"
}

expect_error! {
    duplicate_local_declaration,
    "{\n  var a = 1;\n  var a = 2;\n}",
    65,
    "[line 3] Error at 'a': Already a variable with this name in this scope."
}

expect_error! {
    reading_a_local_in_its_own_initializer,
    "var a = \"outer\";\n{\n  var a = a;\n}",
    65,
    "[line 3] Error at 'a': Can't read local variable in its own initializer."
}
