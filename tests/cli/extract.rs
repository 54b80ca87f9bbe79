use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_self_keyed_literal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/app.tsx",
        "export const App = () => <p>Xin chào</p>;\n",
    )?;

    let status = test.extract_command("web").status()?;
    assert!(status.success());

    let catalog = test.read_catalog()?;
    assert_eq!(catalog["Xin chào"], "Xin chào");

    let rewritten = test.read_file("out/app.tsx")?;
    assert!(rewritten.starts_with("import { t } from './i18n';\n"));
    assert!(rewritten.contains(r#"<p>{t("Xin chào")}</p>"#), "got: {rewritten}");

    Ok(())
}

#[test]
fn test_synthetic_keys_per_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/pages/home.tsx",
        "export const a = 'nội dung thứ nhất dài hơn mười từ một hai ba bốn';\n\
         export const b = 'nội dung thứ hai cũng dài hơn mười từ năm sáu bảy';\n",
    )?;

    let status = test.extract_command("web").status()?;
    assert!(status.success());

    let catalog = test.read_catalog()?;
    assert_eq!(
        catalog["pages.home.0"],
        "nội dung thứ nhất dài hơn mười từ một hai ba bốn"
    );
    assert_eq!(
        catalog["pages.home.1"],
        "nội dung thứ hai cũng dài hơn mười từ năm sáu bảy"
    );

    let rewritten = test.read_file("out/pages/home.tsx")?;
    assert!(rewritten.starts_with("import { t } from '../i18n';\n"));
    assert!(rewritten.contains(r#"t("pages.home.0")"#));
    assert!(rewritten.contains(r#"t("pages.home.1")"#));

    Ok(())
}

#[test]
fn test_template_placeholders() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/greeting.ts",
        "export const greet = (user: { name: string }) => `Xin chào ${user.name}`;\n",
    )?;

    let status = test.extract_command("web").status()?;
    assert!(status.success());

    let catalog = test.read_catalog()?;
    assert_eq!(catalog["Xin chào {{UserName}}"], "Xin chào {{UserName}}");

    let rewritten = test.read_file("out/greeting.ts")?;
    assert!(
        rewritten.contains(r#"t("Xin chào {{UserName}}""#),
        "got: {rewritten}"
    );
    assert!(rewritten.contains(r#""UserName": user.name"#), "got: {rewritten}");

    Ok(())
}

#[test]
fn test_untouched_file_round_trips_byte_identical() -> Result<()> {
    let test = CliTest::new()?;
    let code = "export const App = () => <p>plain english</p>;   // quirky   spacing\n";
    test.write_file("src/app.tsx", code)?;

    let status = test.extract_command("web").status()?;
    assert!(status.success());

    assert_eq!(test.read_file("out/app.tsx")?, code);
    assert_eq!(test.read_catalog()?, serde_json::json!({}));

    Ok(())
}

#[test]
fn test_excluded_paths_are_never_visited() -> Result<()> {
    let test = CliTest::new()?;
    let vietnamese = "export const T = () => <p>Tiếng Việt</p>;\n";
    test.write_file("src/app.test.tsx", vietnamese)?;
    test.write_file("src/button.stories.tsx", vietnamese)?;
    test.write_file("src/__mocks__/api.ts", "export const msg = 'Chào';\n")?;

    let status = test.extract_command("web").status()?;
    assert!(status.success());

    assert_eq!(test.read_catalog()?, serde_json::json!({}));
    assert!(!test.root().join("out/app.test.tsx").exists());
    assert!(!test.root().join("out/button.stories.tsx").exists());
    assert!(!test.root().join("out/__mocks__").exists());

    Ok(())
}

#[test]
fn test_runtime_scaffold_is_generated() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.tsx", "export const App = () => <p>ok</p>;\n")?;

    let status = test.extract_command("landing").status()?;
    assert!(status.success());

    let scaffold = test.read_file("out/i18n.ts")?;
    assert!(scaffold.contains("export const NAMESPACE = 'landing';"));
    assert!(scaffold.contains("i18next.t(keys, {...options, ns: NAMESPACE})"));

    Ok(())
}

#[test]
fn test_parse_failure_fails_that_file_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.tsx", "const = ;\n")?;
    test.write_file("src/ok.tsx", "export const Ok = () => <p>Tốt</p>;\n")?;

    let output = test.extract_command("web").output()?;

    // failures are reported and exit code 1 is returned, but every
    // successful output is still written
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.tsx"), "got: {stderr}");

    let catalog = test.read_catalog()?;
    assert_eq!(catalog["Tốt"], "Tốt");
    assert!(test.root().join("out/ok.tsx").exists());
    assert!(!test.root().join("out/broken.tsx").exists());

    Ok(())
}

#[test]
fn test_missing_source_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command("web").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "got: {stderr}");

    Ok(())
}

#[test]
fn test_config_file_overrides_excludes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trichrc.json", r#"{ "excludes": ["__generated__"] }"#)?;
    test.write_file("src/__generated__/gen.tsx", "export const G = () => <p>Sinh ra</p>;\n")?;
    // default markers no longer apply once the config overrides them
    test.write_file("src/app.test.tsx", "export const T = () => <p>Kiểm tra</p>;\n")?;

    let status = test.extract_command("web").status()?;
    assert!(status.success());

    let catalog = test.read_catalog()?;
    assert_eq!(catalog["Kiểm tra"], "Kiểm tra");
    assert!(catalog.get("Sinh ra").is_none());

    Ok(())
}

#[test]
fn test_rerun_on_output_tree_is_stable() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/pages/home.tsx",
        "export const a = 'nội dung thứ nhất dài hơn mười từ một hai ba bốn';\n",
    )?;

    assert!(test.extract_command("web").status()?.success());

    // extract again, reading the rewritten tree
    let mut second = test.command();
    second.arg("extract").arg("out").arg("out2").arg("web");
    assert!(second.status()?.success());

    let catalog = test.read_file("out2/translation.json")?;
    assert_eq!(catalog, "{}\n");
    assert_eq!(
        test.read_file("out/pages/home.tsx")?,
        test.read_file("out2/pages/home.tsx")?
    );

    Ok(())
}
