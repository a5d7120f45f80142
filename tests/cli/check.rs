use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, Node, logger, run, split, sugar};

fn global_info(msg: &'static str) -> Node {
    Node::Method {
        recv: Box::new(Node::Zap("L", vec![])),
        type_name: "Logger",
        method: "Info",
        args: vec![Node::Str(msg)],
        split: false,
    }
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_go_file(
        "main",
        vec![logger(
            "Info",
            vec![
                Node::Str("server started"),
                Node::Zap("Int", vec![Node::Str("port"), Node::Int("8080")]),
            ],
        )],
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Checked 1 file - no issues found\n");

    Ok(())
}

#[test]
fn test_multiple_issues() -> Result<()> {
    let test = CliTest::with_go_file(
        "main",
        vec![
            global_info("ready"),
            logger(
                "Info",
                vec![
                    Node::Str("Failed to connect"),
                    Node::Zap("String", vec![Node::Str("userID"), Node::Str("123")]),
                ],
            ),
        ],
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: global logger should not be used  no-global"));
    assert!(stdout.contains("--> main.go:4:6"));
    assert!(stdout.contains("warning: message should be lowercased  msg-style"));
    assert!(stdout.contains("--> main.go:5:14"));
    assert!(stdout.contains("warning: keys should be written in snake_case  key-naming-case"));
    assert!(stdout.contains("--> main.go:5:46"));
    assert!(stdout.contains("= help: Change to \"user_id\""));
    assert!(stdout.contains("3 problems (1 error, 2 warnings)"));

    let global = stdout.find("main.go:4:6").unwrap();
    let style = stdout.find("main.go:5:14").unwrap();
    let key = stdout.find("main.go:5:46").unwrap();
    assert!(global < style && style < key);

    Ok(())
}

#[test]
fn test_source_line_and_caret() -> Result<()> {
    let test = CliTest::with_go_file("main", vec![global_info("ready")])?;

    let (_, stdout, _) = run(&mut test.check_command())?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[1], "  --> main.go:4:6");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "4 | \tzap.L().Info(\"ready\")");
    assert_eq!(lines[4], "  | \t    ^");

    Ok(())
}

#[test]
fn test_sugared_chain_reported_once() -> Result<()> {
    let chain = Node::Method {
        recv: Box::new(sugar("With", vec![Node::Str("request_id"), Node::Int("1")])),
        type_name: "SugaredLogger",
        method: "Infow",
        args: vec![Node::Str("done")],
        split: false,
    };
    let test = CliTest::with_go_file("main", vec![chain])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert_eq!(stdout.matches("no-sugar").count(), 1);
    assert!(stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_config_file_disables_rules() -> Result<()> {
    let test = CliTest::with_go_file("main", vec![global_info("ready")])?;
    test.write_file(".zaplintrc.json", r#"{ "noGlobal": false }"#)?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_cli_flags_override_config() -> Result<()> {
    let test = CliTest::with_go_file(
        "main",
        vec![logger(
            "Info",
            vec![
                Node::Str("request served"),
                Node::Zap("String", vec![Node::Str("userID"), Node::Str("123")]),
            ],
        )],
    )?;
    test.write_file(".zaplintrc.json", r#"{ "keyNamingCase": "snake" }"#)?;

    let (code, stdout, _) = run(
        test.check_command()
            .arg("--no-raw-keys")
            .arg("--key-naming-case="),
    )?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: raw keys should not be used  no-raw-keys"));
    assert!(!stdout.contains("key-naming-case"));

    Ok(())
}

#[test]
fn test_forbidden_keys_flag() -> Result<()> {
    let test = CliTest::with_go_file(
        "main",
        vec![logger(
            "Info",
            vec![
                Node::Str("login"),
                Node::Zap("String", vec![Node::Str("password"), Node::Var("pw")]),
            ],
        )],
    )?;

    let (code, stdout, _) = run(test.check_command().arg("--forbidden-keys=token,password"))?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"password\" key is forbidden and should not be used"));

    Ok(())
}

#[test]
fn test_args_on_separate_lines() -> Result<()> {
    let call = || {
        logger(
            "Info",
            vec![
                Node::Str("request served"),
                Node::Zap("Int", vec![Node::Str("status"), Node::Int("200")]),
                Node::Zap("Int", vec![Node::Str("bytes"), Node::Int("512")]),
            ],
        )
    };
    let test = CliTest::with_go_file("main", vec![call()])?;
    test.write_go_file("split", vec![split(call())])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("warning: arguments should be put on separate lines  args-on-sep-lines"));
    assert!(stdout.contains("--> main.go:4:2"));
    assert!(!stdout.contains("split.go"));

    Ok(())
}

#[test]
fn test_explicit_paths() -> Result<()> {
    let test = CliTest::with_go_file("main", vec![global_info("ready")])?;
    test.write_go_file(
        "clean",
        vec![logger("Info", vec![Node::Str("server started")])],
    )?;

    let (code, stdout, _) = run(test.check_command().arg("clean.ast.json"))?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Checked 1 file - no issues found\n");

    Ok(())
}

#[test]
fn test_unparsable_dump() -> Result<()> {
    let test = CliTest::with_go_file("main", vec![global_info("ready")])?;
    test.write_file("broken.ast.json", "{ \"file\": ")?;

    let (code, stdout, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 2);
    assert!(stdout.contains("error: syntax dump could not be parsed  parse-error"));
    assert!(stdout.contains("--> ./broken.ast.json"));
    assert!(stdout.contains("no-global"));
    assert!(stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_invalid_option_value() -> Result<()> {
    let test = CliTest::with_go_file("main", vec![global_info("ready")])?;
    test.write_file(".zaplintrc.json", r#"{ "msgStyle": "shouting" }"#)?;

    let (code, stdout, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("msgStyle"));

    Ok(())
}

#[test]
fn test_missing_go_source_still_reports() -> Result<()> {
    let test = CliTest::with_go_file("main", vec![global_info("ready")])?;
    std::fs::remove_file(test.root().join("main.go"))?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("--> main.go:4:6"));
    assert!(!stdout.contains("  |"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(&mut test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("check"));
    assert!(stdout.contains("fix"));
    assert!(stdout.contains("init"));

    Ok(())
}
