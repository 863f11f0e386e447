#[macro_use]
mod common;

expect_output! {
    set_then_get,
    "class Box {}\nvar box = Box();\nbox.value = 3;\nprint box.value;",
    "3"
}

expect_output! {
    set_is_an_expression,
    "class Box {}\nvar box = Box();\nprint box.value = \"stored\";",
    "stored"
}

expect_output! {
    fields_are_per_instance,
    "class Box {}\nvar a = Box();\nvar b = Box();\na.value = 1;\nb.value = 2;\nprint a.value;\nprint b.value;",
    "1",
    "2"
}

expect_output! {
    fields_shadow_methods,
    "class Box {\n  value() { return \"method\"; }\n}\nvar box = Box();\nprint box.value();\nbox.value = \"field\";\nprint box.value;",
    "method",
    "field"
}

expect_output! {
    fields_may_hold_functions,
    "fun greet() { print \"hi\"; }\nclass Box {}\nvar box = Box();\nbox.action = greet;\nbox.action();",
    "hi"
}

expect_output! {
    fields_update_in_place,
    "class Box {}\nvar box = Box();\nbox.n = 1;\nbox.n = box.n + 1;\nprint box.n;",
    "2"
}
