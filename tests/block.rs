#[macro_use]
mod common;

expect_output! {
    blocks_nest,
    "var a = \"global\";\n{\n  var a = \"outer\";\n  {\n    var a = \"inner\";\n    print a;\n  }\n  print a;\n}\nprint a;",
    "inner",
    "outer",
    "global"
}

expect_output! {
    empty_block,
    "{}\nprint \"ok\";",
    "ok"
}

expect_output! {
    block_scope_ends_at_the_brace,
    "{\n  var a = 1;\n}\nvar a = 2;\nprint a;",
    "2"
}
