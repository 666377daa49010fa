// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of argument files and `--save-toml`.

use std::fs::File;
use std::io::Write;

use tempfile::TempDir;

use crate::{finderchart, get_cmd_output, write_target_list};

#[test]
fn test_chart_from_toml_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(tmp_dir.path(), "targets.txt", "M31\nM33\n");

    let arg_file = tmp_dir.path().join("chart.toml");
    let mut f = File::create(&arg_file).expect("couldn't make arg file");
    write!(
        &mut f,
        "targets = {:?}\nsurvey = \"2mass-j\"\nfov = 12.5\n",
        list.display().to_string()
    )
    .unwrap();
    drop(f);

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            &format!("{}", arg_file.display()),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "chart from toml failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("2mass-j"), "{stdout}");
    assert!(stdout.contains("Field of view: 12.5 arcmin"), "{stdout}");
}

#[test]
fn test_chart_from_json_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(tmp_dir.path(), "targets.txt", "M31\n");

    let arg_file = tmp_dir.path().join("chart.json");
    let mut f = File::create(&arg_file).expect("couldn't make arg file");
    write!(
        &mut f,
        "{{\"targets\": {:?}, \"size\": 512}}",
        list.display().to_string()
    )
    .unwrap();
    drop(f);

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            &format!("{}", arg_file.display()),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "chart from json failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("512 x 512 pixels"), "{stdout}");
}

#[test]
fn test_cli_args_override_the_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(tmp_dir.path(), "targets.txt", "M31\n");

    let arg_file = tmp_dir.path().join("chart.toml");
    let mut f = File::create(&arg_file).expect("couldn't make arg file");
    write!(
        &mut f,
        "targets = {:?}\nfov = 12.5\n",
        list.display().to_string()
    )
    .unwrap();
    drop(f);

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            &format!("{}", arg_file.display()),
            "--fov", "30",
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "chart failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Field of view: 30 arcmin"), "{stdout}");
}

#[test]
fn test_save_toml_round_trip() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let list = write_target_list(tmp_dir.path(), "targets.txt", "M31\n");
    let saved = tmp_dir.path().join("saved.toml");

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            "--targets", &format!("{}", list.display()),
            "--fov", "30",
            "--size", "512",
            "--save-toml", &format!("{}", saved.display()),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "chart --save-toml failed: {}", cmd.err().unwrap());
    assert!(saved.exists());

    // The saved file reproduces the original run.
    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            &format!("{}", saved.display()),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "chart from saved toml failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Field of view: 30 arcmin"), "{stdout}");
    assert!(stdout.contains("512 x 512 pixels"), "{stdout}");
}

#[test]
fn test_unknown_arg_file_extension() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let arg_file = tmp_dir.path().join("chart.yaml");
    std::fs::write(&arg_file, "targets = \"targets.txt\"\n").unwrap();

    #[rustfmt::skip]
    let cmd = finderchart()
        .args([
            "chart",
            &format!("{}", arg_file.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("recognised file extension"), "{stderr}");
}
