use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let status = test.command().arg("init").status()?;
    assert!(status.success());

    let config = test.read_file(".trichrc.json")?;
    assert!(config.contains("\"extensions\""));
    assert!(config.contains("\"excludes\""));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trichrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "got: {stderr}");

    Ok(())
}
