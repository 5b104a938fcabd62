mod common;

use std::path::PathBuf;
use std::process::Command;

use common::{data, hex_file, EOF};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("i8052-mkrom-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn mkrom() -> Command {
    Command::new(env!("CARGO_BIN_EXE_i8052-mkrom"))
}

#[test]
fn writes_default_output_in_working_dir() {
    let dir = scratch_dir("ok");
    std::fs::write(dir.join("prog.hex"), hex_file(&[data(0, &[0x02, 0x00, 0x03]), EOF.to_string()])).unwrap();

    let status = mkrom().arg("prog.hex").current_dir(&dir).status().unwrap();
    assert!(status.success());

    let vhd = std::fs::read_to_string(dir.join("i8052_rom.vhd")).unwrap();
    assert!(vhd.starts_with("-- prog.hex\n"));
    assert!(vhd.contains("array (0 to 4) of UNSIGNED"));
    assert!(vhd.contains("conv_integer(addr) < 5)"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn capacity_error_leaves_no_output() {
    let dir = scratch_dir("big");
    std::fs::write(dir.join("big.hex"), hex_file(&[data(0x0FFE, &[1, 2]), EOF.to_string()])).unwrap();

    let out = mkrom().arg("big.hex").current_dir(&dir).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("program too large"));
    assert!(!dir.join("i8052_rom.vhd").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_and_bad_usage_fail() {
    let dir = scratch_dir("usage");
    assert!(!mkrom().current_dir(&dir).status().unwrap().success());
    assert!(!mkrom().args(["a.hex", "b.hex"]).current_dir(&dir).status().unwrap().success());
    assert!(!mkrom().arg("nope.hex").current_dir(&dir).status().unwrap().success());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn output_flag_overrides_path() {
    let dir = scratch_dir("flag");
    std::fs::write(dir.join("p.hex"), hex_file(&[data(0, &[0x00]), EOF.to_string()])).unwrap();
    let status = mkrom().args(["p.hex", "--output", "rom.vhd"]).current_dir(&dir).status().unwrap();
    assert!(status.success());
    assert!(dir.join("rom.vhd").exists());
    assert!(!dir.join("i8052_rom.vhd").exists());
    let _ = std::fs::remove_dir_all(&dir);
}
