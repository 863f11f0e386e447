#[macro_use]
mod common;

expect_output! {
    this_is_the_receiving_instance,
    "class Egotist {\n  speak() { print this; }\n}\nEgotist().speak();",
    "Egotist instance"
}

expect_output! {
    this_distinguishes_instances,
    "class Named {\n  init(name) { this.name = name; }\n  say() { print this.name; }\n}\nNamed(\"a\").say();\nNamed(\"b\").say();",
    "a",
    "b"
}

expect_error! {
    this_at_top_level,
    "print this;",
    65,
    "[line 1] Error at 'this': Can't use 'this' outside of a class."
}

expect_error! {
    this_in_a_top_level_function,
    "fun f() {\n  print this;\n}",
    65,
    "[line 2] Error at 'this': Can't use 'this' outside of a class."
}
