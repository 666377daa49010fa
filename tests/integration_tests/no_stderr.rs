// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::{finderchart, get_cmd_output, write_target_list};

#[test]
fn test_chart_dry_run_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(
        tmp_dir.path(),
        "targets.txt",
        "M31\nNGC 253  00:47:33  -25:17:18\n",
    );

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            "--targets", &format!("{}", list.display()),
            "--dry-run",
            "--no-progress-bars",
        ])
        .ok();
    assert!(
        cmd.is_ok(),
        "chart --dry-run failed on a simple target list: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_targets_verify_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(tmp_dir.path(), "targets.txt", "M31\n");

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "targets-verify",
            &format!("{}", list.display()),
        ])
        .ok();
    assert!(
        cmd.is_ok(),
        "targets-verify failed on a simple target list: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
