mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn configs_lists_builtin_catalog_without_settings_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("configs")
        .assert()
        .success()
        .stdout(predicate::str::contains("hdfs.address (required)"))
        .stdout(predicate::str::contains("slider.security.enabled (optional) = false"))
        .stdout(predicate::str::contains(
            "view.kerberos.principal.keytab (required when slider.security.enabled is true)",
        ));
}

#[test]
fn configs_alias_reads_settings_records() {
    let ctx = TestContext::new();
    ctx.write_settings(
        r#"[[configs]]
id = 7
view_config_name = "slider.user"
value = "yarn"
"#,
    );

    ctx.cli()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("slider.user (optional) = yarn"))
        .stdout(predicate::str::contains("hdfs.address").not());
}
