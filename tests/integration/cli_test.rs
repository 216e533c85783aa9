use anyhow::Result;
use std::process::Command;

#[path = "../common/mod.rs"]
mod common;
use common::create_trace_file;

fn vmsh() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vmsh"))
}

/// Test that the CLI reports the memory layout
#[test]
fn test_cli_info_command() -> Result<()> {
    let output = vmsh()
        .args(["--segments", "code,data", "--policy", "lru", "info"])
        .output()?;

    assert!(output.status.success(), "CLI info command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Virtual Memory Information:"));
    assert!(output_str.contains("Replacement policy: LRU"));
    assert!(output_str.contains("1: data: Base = 512, Limit = 512"));

    Ok(())
}

/// Test a single translation from the command line
#[test]
fn test_cli_access_command() -> Result<()> {
    let output = vmsh()
        .args(["--memory-size", "1024", "--page-size", "256", "access", "1", "10"])
        .output()?;

    assert!(output.status.success(), "CLI access command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Page fault occurred! Loaded page 2 into memory."));
    assert!(output_str.contains("Logical Address: 522 (Segment 1, Offset 10)"));
    assert!(output_str.contains("Physical Address: 10 (Frame 0, Offset 10)"));

    Ok(())
}

/// Test that an out-of-range offset is reported as an error
#[test]
fn test_cli_access_out_of_bounds() -> Result<()> {
    let output = vmsh().args(["access", "0", "512"]).output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("out of bounds"), "unexpected stderr: {}", stderr);

    Ok(())
}

/// Test that a misaligned configuration is rejected at startup
#[test]
fn test_cli_rejects_bad_config() -> Result<()> {
    let output = vmsh().args(["--page-size", "300", "info"]).output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to initialize translation engine"));

    Ok(())
}

/// Test that more frames than pages is rejected instead of allocated
#[test]
fn test_cli_rejects_oversized_frame_count() -> Result<()> {
    let output = vmsh()
        .args(["--frames", "18446744073709551615", "info"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to initialize translation engine"));
    assert!(stderr.contains("frames requested"), "unexpected stderr: {}", stderr);

    Ok(())
}

/// Test replaying a trace file with eviction
#[test]
fn test_cli_trace_command() -> Result<()> {
    let trace = create_trace_file("0 0\n0 256\n0 512\n0 768\n0 1024\n0 9999\n")?;
    let path = trace.path().to_string_lossy().to_string();

    let output = vmsh()
        .args(["--memory-size", "2048", "--segments", "main", "--frames", "4", "trace", &path])
        .output()?;

    assert!(output.status.success(), "CLI trace command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Loaded page 4 into memory (evicted page 0)."));
    assert!(output_str.contains("Error (0 9999)"));
    assert!(output_str.contains("Frame 0 -> Page 4"));
    assert!(output_str.contains("Page faults: 5"));
    assert!(output_str.contains("Page fault rate: 100.00%"));

    Ok(())
}

/// Test the interactive menu with piped input
#[test]
fn test_cli_shell_menu() -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let temp_dir = tempfile::tempdir()?;
    let mut child = vmsh()
        .current_dir(temp_dir.path())
        .arg("shell")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(b"4\n1\n10\n5\n0\n")?;
    }

    let output = child.wait_with_output()?;
    assert!(output.status.success(), "CLI shell failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Physical Address: 10 (Frame 0, Offset 10)"));
    assert!(output_str.contains("Total accesses: 1"));
    assert!(output_str.contains("Exiting..."));

    Ok(())
}
