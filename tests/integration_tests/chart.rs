// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of the chart subcommand that never reach the network.

use tempfile::TempDir;

use crate::{finderchart, get_cmd_output, write_target_list};

#[test]
fn test_chart_dry_run() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(
        tmp_dir.path(),
        "targets.txt",
        "M31\nNGC 253  00:47:33  -25:17:18\n",
    );
    let out_dir = tmp_dir.path().join("charts");

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            "--targets", &format!("{}", list.display()),
            "--output-dir", &format!("{}", out_dir.display()),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "chart --dry-run failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("2 target(s) to chart"), "{stdout}");
    assert!(stdout.contains("Dry run"), "{stdout}");
    // A dry run must leave the filesystem untouched.
    assert!(!out_dir.exists());
}

#[test]
fn test_chart_unrecognised_survey() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(tmp_dir.path(), "targets.txt", "M31\n");

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            "--targets", &format!("{}", list.display()),
            "--survey", "dss3-color",
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Unrecognised survey 'dss3-color'"), "{stderr}");
}

#[test]
fn test_chart_no_targets() {
    let cmd = finderchart().args(["chart", "--dry-run"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No targets were specified"), "{stderr}");
}

#[test]
fn test_chart_single_name_with_coords() {
    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            "--targets", "M31",
            "--coords",
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("single target name"), "{stderr}");
}

#[test]
fn test_chart_rejects_two_column_lists() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(tmp_dir.path(), "targets.txt", "M31  00:42:44.3\n");

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            "--targets", &format!("{}", list.display()),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("line 1"), "{stderr}");
    assert!(stderr.contains("no Dec column"), "{stderr}");
}
