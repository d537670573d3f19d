use std::fs;

use multiop::{Interpreter, Token, scan, tokenize};

fn run(src: &str) -> String {
    Interpreter::new().execute(src)
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(run(src), expected, "for script:\n{src}");
}

fn assert_error(src: &str, fragment: &str) {
    let output = run(src);
    assert!(output.starts_with("Error:"),
            "expected an error for script:\n{src}\ngot: {output}");
    assert!(output.contains(fragment),
            "expected error containing {fragment:?} for script:\n{src}\ngot: {output}");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("let x = 2 + 3 * 4\nprint x", "14");
}

#[test]
fn parentheses_override_precedence() {
    assert_output("print (2 + 3) * 4", "20");
}

#[test]
fn string_concatenation_coerces_numbers() {
    assert_output("print \"a\" + 1", "a1");
    assert_output("print 1 + \"a\"", "1a");
    assert_output("let msg = \"Hello\"\nprint msg + \" world\"", "Hello world");
}

#[test]
fn division_is_true_division() {
    assert_output("print 10 / 2", "5.0");
    assert_output("print 10 / 4", "2.5");
}

#[test]
fn division_by_zero_discards_prior_output() {
    assert_output("print 1\nprint 1 / 0", "Error: Division by zero");
}

#[test]
fn comparisons_and_logic() {
    assert_output("print 1 < 2", "true");
    assert_output("print 2 < 1", "false");
    assert_output("print 2 > 1 and 1 == 1", "true");
    assert_output("print 1 > 2 or 3 > 2", "true");
    assert_output("print not 0", "true");
    assert_output("print 1 == 2 / 2", "true");
}

#[test]
fn undefined_variable_is_an_error() {
    assert_error("print foo", "Undefined variable 'foo'");
}

#[test]
fn string_literal_is_not_an_identifier() {
    // A quoted name prints fine even when no such variable exists.
    assert_output("print \"foo\"", "foo");
    assert_error("let foo = 1\nprint foo + bar", "Undefined variable 'bar'");
}

#[test]
fn if_runs_body_once_when_truthy() {
    assert_output("let x = 5\nif x > 0\n    print x", "5");
    assert_output("let x = 0\nif x > 0\n    print x\nprint \"after\"", "after");
}

#[test]
fn if_body_mutations_are_visible_afterwards() {
    assert_output("let x = 1\nif x\n    let x = 2\nprint x", "2");
}

#[test]
fn while_counts_down() {
    assert_output("let x = 3\nwhile x > 0\n    print x\n    let x = x - 1",
                  "3\n2\n1");
}

#[test]
fn nested_blocks() {
    let src = "let i = 0\nwhile i < 3\n    if i > 0\n        print i\n    let i = i + 1";
    assert_output(src, "1\n2");
}

#[test]
fn function_call_binds_parameters_positionally() {
    assert_output("def add(a, b)\n    print a + b\nadd(3, 4)", "7");
}

#[test]
fn function_mutations_roll_back_on_return() {
    let src = "let x = 1\ndef f()\n    let x = 99\nf()\nprint x";
    assert_output(src, "1");
}

#[test]
fn function_output_survives_the_rollback() {
    let src = "let x = 1\ndef f()\n    let x = 99\n    print x\nf()\nprint x";
    assert_output(src, "99\n1");
}

#[test]
fn arguments_are_evaluated_in_the_callers_environment() {
    let src = "let x = 10\ndef show(v)\n    print v\nshow(x + 1)";
    assert_output(src, "11");
}

#[test]
fn surplus_arguments_are_ignored() {
    assert_output("def one(a)\n    print a\none(1, 2, 3)", "1");
}

#[test]
fn missing_arguments_leave_parameters_unbound() {
    assert_error("def two(a, b)\n    print b\ntwo(1)",
                 "Undefined variable 'b'");
}

#[test]
fn redefinition_silently_replaces() {
    let src = "def f()\n    print \"old\"\ndef f()\n    print \"new\"\nf()";
    assert_output(src, "new");
}

#[test]
fn unknown_function_is_an_error() {
    assert_error("nope(1)", "Unknown function 'nope'");
}

#[test]
fn list_indexing() {
    assert_output("let lst = [10, 20, 30]\nprint lst[1]", "20");
    assert_output("let lst = [10, 20, 30]\nprint lst[0] + lst[2]", "40");
}

#[test]
fn index_out_of_range_halts_output() {
    assert_output("let lst = [10, 20, 30]\nprint lst[0]\nprint lst[5]",
                  "Error: Index 5 is out of range for a list of length 3");
}

#[test]
fn indexing_a_non_list_is_a_type_error() {
    assert_error("let n = 3\nprint n[0]", "Type error");
}

#[test]
fn lists_render_with_brackets() {
    assert_output("print [1, 2, 3]", "[1, 2, 3]");
    assert_output("print []", "[]");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = "# leading comment\n\
               \n\
               let x = 1  # trailing comment\n\
               \n\
               print x";
    assert_output(src, "1");
}

#[test]
fn empty_input_is_invalid_code() {
    assert_output("", "Error: Invalid code");
    assert_output("   \n\n# only a comment\n", "Error: Invalid code");
}

#[test]
fn syntax_errors_report_the_line() {
    assert_error("let x = 1\nlet = 2", "Line 2");
    assert_error("print )", "unexpected token");
}

#[test]
fn unrecognized_character_reports_the_line() {
    assert_error("let x = 1\nlet y = 2 ; 3", "Line 2");
}

#[test]
fn dedent_mismatch_is_reported() {
    assert_error("if 1\n        print 1\n    print 2", "indentation");
}

#[test]
fn environment_persists_across_calls() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.execute("let x = 41"), "");
    assert_eq!(interpreter.execute("print x + 1"), "42");
}

#[test]
fn reset_makes_execution_idempotent() {
    let src = "let n = 2\nprint n * n";
    let mut interpreter = Interpreter::new();
    let first = interpreter.execute(src);
    interpreter.reset();
    let second = interpreter.execute(src);
    assert_eq!(first, second);
    assert_eq!(first, "4");
}

#[test]
fn step_limit_stops_runaway_loops() {
    let mut interpreter = Interpreter::with_step_limit(10_000);
    let output = interpreter.execute("let x = 1\nwhile x > 0\n    let x = x + 1");
    assert!(output.contains("budget"), "got: {output}");
}

#[test]
fn step_limit_leaves_ordinary_programs_alone() {
    let mut interpreter = Interpreter::with_step_limit(10_000);
    assert_eq!(interpreter.execute("print 1 + 1"), "2");
}

#[test]
fn dedents_match_indents() {
    let tokens = tokenize("if a\n    if b\n        print c\nprint d").unwrap();
    let indents = tokens.iter()
                        .filter(|(t, _)| matches!(t, Token::Indent(_)))
                        .count();
    let dedents = tokens.iter()
                        .filter(|(t, _)| matches!(t, Token::Dedent(_)))
                        .count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);
}

#[test]
fn scan_tolerates_buffers_that_do_not_parse() {
    // Mid-edit buffer: stray '?' and an unfinished statement.
    let tokens = scan("let ? = print [");
    assert!(tokens.iter().any(|(t, _)| *t == Token::Let));
    assert!(tokens.iter().any(|(t, _)| *t == Token::Print));
}

#[test]
fn example_script_runs() {
    let script = fs::read_to_string("tests/example.mo").expect("missing file");
    assert_output(&script, "15\nhello, world\n9\nbig");
}
