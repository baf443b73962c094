use ob_core::Predeclared;
use ob_lang::{compile, CompileOptions, Compilation, Error};
use pretty_assertions::assert_eq;

fn compile_source(source: &str) -> Result<Compilation, Error> {
    let predeclared = Predeclared::shared()?;
    compile(source, predeclared, &CompileOptions::default())
}

const HEADER: &str = "target triple = \"x86_64-pc-linux-gnu\"\n\n";

#[test]
fn integer_procedure_mangles_under_its_module() {
    let compiled = compile_source(
        "MODULE T; PROCEDURE P*(): INTEGER; BEGIN RETURN 7 END P; BEGIN END T.",
    )
    .unwrap();

    let expected = format!(
        "{HEADER}\
         define i32 @T_P() {{\nentry:\n\tret i32 7\n}}\n\n\
         define void @T__init() {{\nentry:\n\tret void\n}}\n\n"
    );
    assert_eq!(compiled.ir.as_str(), expected);
    assert_eq!(compiled.table[compiled.module].name(), "T");
}

#[test]
fn answer_function_for_the_c_harness() {
    let source = "\
MODULE FnTest;

PROCEDURE Answer*(): INTEGER;
BEGIN
    RETURN 42
END Answer;

END FnTest.
";
    let compiled = compile_source(source).unwrap();
    let ir = compiled.ir.as_str();
    assert!(ir.contains("define i32 @FnTest_Answer() {\nentry:\n\tret i32 42\n}\n"));
    assert!(ir.contains("define void @FnTest__init()"));
}

#[test]
fn void_procedure_with_bare_return() {
    let compiled =
        compile_source("MODULE M; PROCEDURE Run*; BEGIN RETURN END Run; END M.").unwrap();
    assert!(compiled
        .ir
        .as_str()
        .contains("define void @M_Run() {\nentry:\n\tret void\n}\n"));
}

#[test]
fn procedure_without_body_returns_void() {
    let compiled = compile_source("MODULE M; PROCEDURE Nop*(); END Nop; END M.").unwrap();
    assert!(compiled.ir.as_str().contains("define void @M_Nop()"));
}

#[test]
fn integer_procedure_without_return_value_fails() {
    let err =
        compile_source("MODULE M; PROCEDURE P*(): INTEGER; BEGIN END P; END M.").unwrap_err();
    assert_eq!(
        err,
        Error::MissingReturnValue {
            procedure: "P".into(),
            ty: "INTEGER".into()
        }
    );

    let err = compile_source("MODULE M; PROCEDURE P*(): INTEGER; RETURN END P; END M.")
        .unwrap_err();
    assert!(matches!(err, Error::MissingReturnValue { .. }));
}

#[test]
fn void_procedure_cannot_return_an_integer() {
    let err = compile_source("MODULE M; PROCEDURE P*; RETURN 5 END P; END M.").unwrap_err();
    assert_eq!(err, Error::WrongReturnType("P".into()));
}

#[test]
fn initializer_cannot_return_an_integer() {
    let err = compile_source("MODULE M; BEGIN RETURN 1 END M.").unwrap_err();
    assert_eq!(err, Error::WrongReturnType("_init".into()));
}

#[test]
fn module_end_name_must_match() {
    let err = compile_source("MODULE T; BEGIN END U.").unwrap_err();
    assert_eq!(
        err,
        Error::NameMismatch {
            kind: "module",
            expected: "T".into(),
            found: "U".into()
        }
    );
    let message = err.to_string();
    assert!(message.contains("'T'"));
    assert!(message.contains("'U'"));
}

#[test]
fn procedure_end_name_must_match() {
    let err = compile_source("MODULE T; PROCEDURE P*; END Q; END T.").unwrap_err();
    assert_eq!(
        err,
        Error::NameMismatch {
            kind: "procedure",
            expected: "P".into(),
            found: "Q".into()
        }
    );
}

#[test]
fn unexported_procedures_are_unsupported() {
    let err = compile_source("MODULE T; PROCEDURE P; END P; END T.").unwrap_err();
    assert_eq!(err, Error::UnsupportedUnexported("P".into()));
}

#[test]
fn duplicate_procedures_are_rejected() {
    let err = compile_source("MODULE T; PROCEDURE P*; END P; PROCEDURE P*; END P; END T.")
        .unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateName {
            name: "P".into(),
            scope: "T".into()
        }
    );
}

#[test]
fn qualified_return_type_through_system() {
    let compiled = compile_source(
        "MODULE T; PROCEDURE P*(): SYSTEM.INTEGER; BEGIN RETURN 1 END P; END T.",
    )
    .unwrap();
    assert!(compiled.ir.as_str().contains("define i32 @T_P()"));
}

#[test]
fn qualified_lookup_does_not_fall_back_to_enclosing_scopes() {
    // INTEGER is visible from T, but not as a member of T.
    let err = compile_source("MODULE T; PROCEDURE P*(): T.INTEGER; RETURN 1 END P; END T.")
        .unwrap_err();
    assert_eq!(
        err,
        Error::NotFoundInModule {
            name: "INTEGER".into(),
            module: "T".into()
        }
    );
}

#[test]
fn unknown_return_type() {
    let err = compile_source("MODULE T; PROCEDURE P*(): REAL; END P; END T.").unwrap_err();
    assert_eq!(err, Error::NotFound("REAL".into()));
}

#[test]
fn return_type_must_be_a_type() {
    let err = compile_source("MODULE T; PROCEDURE P*(): T; END P; END T.").unwrap_err();
    assert_eq!(err, Error::NotAType("T".into()));

    let err = compile_source("MODULE T; PROCEDURE P*; END P; PROCEDURE Q*(): P; END Q; END T.")
        .unwrap_err();
    assert_eq!(err, Error::NotAType("P".into()));
}

#[test]
fn lexical_errors_abort_compilation() {
    assert_eq!(
        compile_source("MODULE T; BEGIN RETURN 3000000000 END T.").unwrap_err(),
        Error::NumericOverflow("3000000000".into())
    );
    assert_eq!(
        compile_source("MODULE T; BEGIN END T!").unwrap_err(),
        Error::UnknownCharacter('!')
    );
}

#[test]
fn syntax_errors_quote_the_token() {
    assert_eq!(
        compile_source("MODULE T BEGIN END T.").unwrap_err(),
        Error::UnexpectedToken("BEGIN".into())
    );
    assert_eq!(
        compile_source("MODULE T; BEGIN END T").unwrap_err(),
        Error::UnexpectedToken("end of input".into())
    );
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(
        compile_source("MODULE T; END T. extra").unwrap_err(),
        Error::UnexpectedToken("extra".into())
    );
}

#[test]
fn compilations_are_isolated_from_each_other() {
    let source = "MODULE Twice; PROCEDURE P*; END P; END Twice.";
    let first = compile_source(source).unwrap();
    let second = compile_source(source).unwrap();
    assert_eq!(first.ir, second.ir);

    let predeclared = Predeclared::shared().unwrap();
    assert_eq!(
        predeclared
            .table()
            .lookup(predeclared.system(), "Twice")
            .unwrap(),
        None
    );
}

#[test]
fn custom_target_triple() {
    let predeclared = Predeclared::new().unwrap();
    let options = CompileOptions {
        target_triple: "aarch64-apple-darwin".into(),
    };
    let compiled = compile("MODULE T; END T.", &predeclared, &options).unwrap();
    assert!(compiled
        .ir
        .as_str()
        .starts_with("target triple = \"aarch64-apple-darwin\"\n\n"));
}
