#[macro_use]
mod common;

expect_output! {
    methods_read_fields_through_this,
    "class Person {\n  greet() { print \"hi \" + this.name; }\n}\nvar p = Person();\np.name = \"lou\";\np.greet();",
    "hi lou"
}

expect_output! {
    methods_bind_when_extracted,
    "class Person {\n  greet() { print this.name; }\n}\nvar p = Person();\np.name = \"bound\";\nvar m = p.greet;\nm();",
    "bound"
}

expect_output! {
    bound_methods_survive_reassignment,
    "class Cake {\n  taste() { print this.flavor; }\n}\nvar cake = Cake();\ncake.flavor = \"chocolate\";\nvar taste = cake.taste;\ncake.flavor = \"vanilla\";\ntaste();",
    "vanilla"
}

expect_output! {
    methods_may_call_each_other,
    "class Counter {\n  twice() { return this.once() + this.once(); }\n  once() { return 1; }\n}\nprint Counter().twice();",
    "2"
}

expect_output! {
    methods_close_over_this,
    "class Thing {\n  getter() {\n    fun inner() { return this.label; }\n    return inner();\n  }\n}\nvar t = Thing();\nt.label = \"inner this\";\nprint t.getter();",
    "inner this"
}
