use assert_cmd::Command;

pub fn yamltag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("yamltag").unwrap();
    cmd.env_remove("YAMLTAG_SCHEMA");
    cmd.env_remove("YAMLTAG_LOG");
    cmd
}
