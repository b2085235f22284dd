#[test]
fn argyle_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass.rs");
    t.compile_fail("tests/ui/missing_context.rs");
    t.compile_fail("tests/ui/bad_context_type.rs");
    t.compile_fail("tests/ui/tuple_variant.rs");
    t.compile_fail("tests/ui/not_an_enum.rs");
}
