use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use rs_pairforce::apis::{run_job, JobConfig};
use rs_pairforce::forces::net_forces;
use rs_pairforce::io::{generate_point_set, read_positions, write_point_set, Delimiter, GenerateConfig};
use rs_pairforce::utils::ForceConstants;
use tempfile::tempdir;

#[test]
fn job_output_matches_single_pass_for_any_worker_count() {
    let dir = tempdir().expect("Failed to create temp dir");
    let points = generate_point_set(&GenerateConfig { count: 40, seed: 99, ..GenerateConfig::default() })
        .expect("Failed to generate points");
    let positions = dir.path().join("positions.txt");
    let masses = dir.path().join("masses.txt");
    write_point_set(&points, &positions, &masses, Delimiter::Space).expect("Failed to write inputs");

    let constants = ForceConstants::new(Some(6.674e-11));
    let expected = net_forces(&points, &constants);

    for workers in [1, 3, 7, 42] {
        let output = dir.path().join(format!("forces-{}.txt", workers));
        let mut config = JobConfig::new(&positions, &masses, &output);
        config.workers = workers;
        config.constants = constants;

        run_job(&config).expect("Job failed");
        let written = read_positions(&output, Delimiter::Tab).expect("Failed to read output");
        assert_eq!(written, expected, "W={}", workers);
    }
}

#[test]
fn binary_exits_non_zero_on_missing_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let status = Command::new(env!("CARGO_BIN_EXE_rs_pairforce"))
        .arg("run")
        .arg(dir.path().join("missing-r.txt"))
        .arg(dir.path().join("missing-m.txt"))
        .arg(dir.path().join("out.txt"))
        .status()
        .expect("Failed to launch binary");

    assert!(!status.success());
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn binary_generates_and_runs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let positions = dir.path().join("r.csv");
    let masses = dir.path().join("m.csv");
    let output = dir.path().join("result").join("f.csv");

    let status = Command::new(env!("CARGO_BIN_EXE_rs_pairforce"))
        .args(["generate", "-n", "12", "--seed", "5", "-d", "comma"])
        .arg(&positions)
        .arg(&masses)
        .status()
        .expect("Failed to launch binary");
    assert!(status.success());

    let status = Command::new(env!("CARGO_BIN_EXE_rs_pairforce"))
        .arg("run")
        .arg(&positions)
        .arg(&masses)
        .arg(&output)
        .args(["--workers", "5", "--delimiter", "comma", "--output-delimiter", "comma"])
        .status()
        .expect("Failed to launch binary");
    assert!(status.success());

    let rows = fs::read_to_string(&output).expect("Output was not written");
    assert_eq!(rows.lines().count(), 12);
    assert!(rows.lines().all(|row| row.split(',').count() == 3));
}

fn write_small_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let positions = dir.join("r.txt");
    let masses = dir.join("m.txt");
    fs::write(&positions, "0 0 0\n0 0 1\n0 2 0\n3 0 0\n").expect("Failed to write positions");
    fs::write(&masses, "2\n1\n1\n1\n").expect("Failed to write masses");
    (positions, masses)
}

fn single_log_file(dir: &Path) -> String {
    let files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Log directory was not created")
        .map(|entry| entry.expect("Failed to read log directory").path())
        .collect();
    assert_eq!(files.len(), 1, "log files: {:?}", files);
    let name = files[0].file_name().and_then(|n| n.to_str()).expect("Log file name is not UTF-8");
    assert!(name.ends_with("-main.log"), "unexpected log file {}", name);
    assert!(name.trim_end_matches("-main.log").parse::<u64>().is_ok(), "unexpected log file {}", name);
    fs::read_to_string(&files[0]).expect("Failed to read log file")
}

#[test]
fn binary_debug_logs_go_to_file_and_stderr() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (positions, masses) = write_small_inputs(dir.path());
    let logs = dir.path().join("logs");

    let output = Command::new(env!("CARGO_BIN_EXE_rs_pairforce"))
        .env_remove("RUST_LOG")
        .arg("--debug")
        .arg("--logs")
        .arg(&logs)
        .arg("run")
        .arg(&positions)
        .arg(&masses)
        .arg(dir.path().join("o.txt"))
        .args(["--workers", "2"])
        .output()
        .expect("Failed to launch binary");
    assert!(output.status.success());

    let log = single_log_file(&logs);
    assert!(log.lines().any(|line| line.contains("\tDEBUG\trank = 0, net force [0]")), "{}", log);
    assert!(log.lines().any(|line| line.contains("\tDEBUG\trank = 1, net force [2]")), "{}", log);
    assert!(
        log.lines().any(|line| line.contains("\tINFO\t") && line.contains("completion gather parts")),
        "{}",
        log
    );
    // Every line comes from a rank and carries its tag.
    assert!(log.lines().all(|line| line.split('\t').count() == 3 && line.contains("\trank = ")), "{}", log);
    assert!(log.contains("rank = 0, load positions from"));
    assert!(log.contains("rank = 0, save results to"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("completion gather parts"));
}

#[test]
fn binary_without_debug_logs_info_only() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (positions, masses) = write_small_inputs(dir.path());
    let logs = dir.path().join("logs");

    let status = Command::new(env!("CARGO_BIN_EXE_rs_pairforce"))
        .env_remove("RUST_LOG")
        .arg("--logs")
        .arg(&logs)
        .arg("run")
        .arg(&positions)
        .arg(&masses)
        .arg(dir.path().join("o.txt"))
        .args(["--workers", "2"])
        .status()
        .expect("Failed to launch binary");
    assert!(status.success());

    let log = single_log_file(&logs);
    assert!(log.contains("\tINFO\trank = 0, completion gather parts: 4 rows from 2 workers"), "{}", log);
    assert!(!log.contains("\tDEBUG\t"), "{}", log);
}
