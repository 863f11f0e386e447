#[macro_use]
mod common;

expect_output! {
    arguments_bind_to_parameters,
    "fun add(a, b) { print a + b; }\nadd(1, 2);",
    "3"
}

expect_output! {
    arguments_evaluate_left_to_right,
    "fun note(label) { print label; return label; }\nfun pair(a, b) {}\npair(note(\"first\"), note(\"second\"));",
    "first",
    "second"
}

expect_output! {
    functions_print_with_their_name,
    "fun f() {}\nprint f;",
    "<fn f>"
}

expect_output! {
    natives_print_as_native,
    "print clock;",
    "<native fn>"
}

expect_output! {
    clock_returns_a_number,
    "print clock() > 0;",
    "true"
}

expect_output! {
    recursion,
    "fun fib(n) {\n  if (n < 2) return n;\n  return fib(n - 1) + fib(n - 2);\n}\nprint fib(10);",
    "55"
}

expect_output! {
    functions_are_values,
    "fun shout(s) { print s + \"!\"; }\nvar f = shout;\nf(\"hey\");",
    "hey!"
}

expect_error! {
    too_few_arguments,
    "fun f(a) {}\nf();",
    70,
    "Expected 1 arguments but got 0.",
    "[line 2]"
}

expect_error! {
    too_many_arguments,
    "fun f() {}\nf(1, 2);",
    70,
    "Expected 0 arguments but got 2.",
    "[line 2]"
}

#[test]
fn exactly_255_parameters_and_arguments_are_accepted() {
    let params: Vec<String> = (0..255).map(|i| format!("p{i}")).collect();
    let args = vec!["7"; 255].join(", ");
    let source = format!("fun f({}) {{ return p0; }}\nprint f({args});", params.join(", "));

    let mut output = Vec::new();
    let mut plox = plox::Plox::new(&mut output);
    let code = plox.run_source(&source);
    drop(plox);

    assert_eq!(0, code);
    assert_eq!("7\n", std::str::from_utf8(&output).unwrap());
}

#[test]
fn more_than_255_arguments_is_a_static_error() {
    let args = vec!["0"; 256].join(", ");
    let source = format!("fun f() {{}}\nf({args});");

    let mut output: Vec<u8> = Vec::new();
    let mut plox = plox::Plox::new(&mut output);

    assert_eq!(65, plox.run_source(&source));
}

#[test]
fn more_than_255_parameters_is_a_static_error() {
    let params: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
    let source = format!("fun f({}) {{}}", params.join(", "));

    let mut output: Vec<u8> = Vec::new();
    let mut plox = plox::Plox::new(&mut output);

    assert_eq!(65, plox.run_source(&source));
}

expect_error! {
    calling_a_string,
    "\"not a function\"();",
    70,
    "Can only call functions and classes.",
    "[line 1]"
}

expect_error! {
    calling_a_number,
    "123();",
    70,
    "Can only call functions and classes.",
    "[line 1]"
}
