use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, Node, logger, run};

fn project() -> Result<CliTest> {
    CliTest::with_go_file(
        "main",
        vec![
            logger(
                "Info",
                vec![
                    Node::Str("user signed in"),
                    Node::Zap("String", vec![Node::Str("userID"), Node::Var("id")]),
                ],
            ),
            logger(
                "Warn",
                vec![
                    Node::Str("slow request"),
                    Node::Zap("Duration", vec![Node::Str("Elapsed Time"), Node::Var("d")]),
                ],
            ),
        ],
    )
}

#[test]
fn test_fix_dry_run() -> Result<()> {
    let test = project()?;
    let before = test.read_file("main.go")?;

    let (code, stdout, _) = run(&mut test.fix_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("--> main.go:4:43"));
    assert!(stdout.contains("- \tlogger.Info(\"user signed in\", zap.String(\"userID\", id))"));
    assert!(stdout.contains("+ \tlogger.Info(\"user signed in\", zap.String(\"user_id\", id))"));
    assert!(stdout.contains("Would fix 2 key(s) in 1 file(s)."));
    assert!(stdout.contains("Run with --apply to rewrite these keys."));

    // Dry run leaves the source untouched
    assert_eq!(test.read_file("main.go")?, before);

    Ok(())
}

#[test]
fn test_fix_apply() -> Result<()> {
    let test = project()?;

    let (code, stdout, _) = run(test.fix_command().arg("--apply"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Fixed 2 key(s) in 1 file(s) (processed 2 issue(s))."));

    let source = test.read_file("main.go")?;
    assert!(source.contains("zap.String(\"user_id\", id)"));
    assert!(source.contains("zap.Duration(\"elapsed_time\", d)"));

    Ok(())
}

#[test]
fn test_fix_nothing_to_fix() -> Result<()> {
    let test = CliTest::with_go_file(
        "main",
        vec![logger(
            "Info",
            vec![
                Node::Str("user signed in"),
                Node::Zap("String", vec![Node::Str("user_id"), Node::Var("id")]),
            ],
        )],
    )?;

    let (code, stdout, _) = run(&mut test.fix_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Checked 1 file(s) - nothing to fix\n");

    Ok(())
}

#[test]
fn test_fix_respects_naming_case_flag() -> Result<()> {
    let test = project()?;

    let (code, _, _) = run(
        test.fix_command()
            .arg("--apply")
            .arg("--key-naming-case=kebab"),
    )?;

    assert_eq!(code, 0);
    let source = test.read_file("main.go")?;
    assert!(source.contains("zap.String(\"user-id\", id)"));
    assert!(source.contains("zap.Duration(\"elapsed-time\", d)"));

    Ok(())
}

#[test]
fn test_fix_apply_skips_keys_moved_since_dump() -> Result<()> {
    let test = project()?;
    let edited = test
        .read_file("main.go")?
        .replace("zap.String(\"userID\"", "zap.String(\"x\", \"userID\"");
    test.write_file("main.go", &edited)?;

    let (code, stdout, _) = run(test.fix_command().arg("--apply"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Fixed 1 key(s) in 1 file(s) (processed 2 issue(s))."));
    assert!(stdout.contains("skipped: 1 edit(s)"));

    let source = test.read_file("main.go")?;
    assert!(source.contains("zap.String(\"x\", \"userID\", id)"));
    assert!(source.contains("zap.Duration(\"elapsed_time\", d)"));

    Ok(())
}
