use anyhow::{Context, Result};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, Node, logger, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .zaplintrc.json with the default rule preset\n");

    let content = test.read_file(".zaplintrc.json")?;
    let _: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_snapshot!(content, @r#"
    {
      "noGlobal": true,
      "noSugar": true,
      "staticMsg": true,
      "msgStyle": "lowercased",
      "noRawKeys": false,
      "keyNamingCase": "snake",
      "forbiddenKeys": [],
      "argsOnSepLines": true,
      "includes": [
        "."
      ],
      "ignores": []
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".zaplintrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"))?;

    assert_eq!(code, 1);
    assert!(stderr.contains(".zaplintrc.json already exists"));
    assert_eq!(test.read_file(".zaplintrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    run(test.command().arg("init"))?;

    test.write_go_file(
        "main",
        vec![logger("Info", vec![Node::Str("server started")])],
    )?;

    let (code, stdout, stderr) = run(&mut test.check_command())?;
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("no issues found"));

    Ok(())
}
