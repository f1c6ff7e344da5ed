use assert_cmd::Command;
use std::path::Path;

/// Build a `trackdeck` invocation pinned to an offline snapshot file, with
/// ambient configuration stripped so tests stay hermetic.
pub fn trackdeck(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trackdeck").unwrap();
    cmd.arg("--data").arg(data);
    cmd.env_remove("TRACKDECK_API_BASE");
    cmd.env_remove("TRACKDECK_DATA");
    cmd
}
