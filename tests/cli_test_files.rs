use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::Command; // Run programs
use std::path::Path;
use tempfile;

type STDRESULT = Result<(),Box<dyn std::error::Error>>;

#[test]
fn encode_from_file() -> STDRESULT {
    let mut cmd = Command::cargo_bin("morse")?;
    cmd.arg("-ef").arg(Path::new("tests").join("data").join("hello.txt"))
        .assert()
        .success()
        .stdout(predicate::eq(".... . .-.. .-.. --- / .-- --- .-. .-.. -..\n"));
    Ok(())
}

#[test]
fn decode_from_file() -> STDRESULT {
    let mut cmd = Command::cargo_bin("morse")?;
    cmd.arg("-df").arg(Path::new("tests").join("data").join("hello.morse"))
        .assert()
        .success()
        .stdout(predicate::eq("HELLO WORLD\n"));
    Ok(())
}

#[test]
fn encode_to_file() -> STDRESULT {
    let mut cmd = Command::cargo_bin("morse")?;
    let dir = tempfile::tempdir()?;
    let out_path = dir.path().join("sos.morse");
    std::fs::write(&out_path,"this will be truncated, it is long enough to notice\n")?;
    cmd.arg("-eo").arg(&out_path).arg("SOS")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let actual = String::from_utf8(std::fs::read(&out_path)?)?;
    assert_eq!(&actual,"... --- ...\n");
    Ok(())
}

#[test]
fn decode_to_file() -> STDRESULT {
    let mut cmd = Command::cargo_bin("morse")?;
    let dir = tempfile::tempdir()?;
    let out_path = dir.path().join("sos.txt");
    cmd.arg("-do").arg(&out_path).arg("... --- ...")
        .assert()
        .success();
    let actual = String::from_utf8(std::fs::read(&out_path)?)?;
    assert_eq!(&actual,"SOS\n");
    Ok(())
}

#[test]
fn file_to_file_round_trip() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let morse_path = dir.path().join("hello.morse");
    let text_path = dir.path().join("hello.txt");
    let mut cmd = Command::cargo_bin("morse")?;
    cmd.arg("encode")
        .arg("-f").arg(Path::new("tests").join("data").join("hello.txt"))
        .arg("-o").arg(&morse_path)
        .assert()
        .success();
    cmd = Command::cargo_bin("morse")?;
    cmd.arg("decode")
        .arg("-f").arg(&morse_path)
        .arg("-o").arg(&text_path)
        .assert()
        .success();
    let actual = String::from_utf8(std::fs::read(&text_path)?)?;
    assert_eq!(&actual,"HELLO WORLD\n");
    Ok(())
}

#[test]
fn missing_input_file() -> STDRESULT {
    let mut cmd = Command::cargo_bin("morse")?;
    let dir = tempfile::tempdir()?;
    cmd.arg("-ef").arg(dir.path().join("nothing.txt"))
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error opening file"))
        .stderr(predicate::str::contains("nothing.txt"));
    Ok(())
}

#[test]
fn unwritable_output_file() -> STDRESULT {
    let mut cmd = Command::cargo_bin("morse")?;
    let dir = tempfile::tempdir()?;
    let out_path = dir.path().join("no_such_dir").join("out.morse");
    cmd.arg("-eo").arg(&out_path).arg("SOS")
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot open output file"));
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn text_and_file_conflict() -> STDRESULT {
    let mut cmd = Command::cargo_bin("morse")?;
    cmd.arg("encode")
        .arg("-f").arg(Path::new("tests").join("data").join("hello.txt"))
        .arg("SOS")
        .assert()
        .failure()
        .code(1);
    Ok(())
}

#[test]
fn decode_from_file_clustered_with_long_names() -> STDRESULT {
    // the clustered form and the long form read the same file the same way
    let path = Path::new("tests").join("data").join("hello.morse");
    let mut cmd = Command::cargo_bin("morse")?;
    cmd.arg("-df").arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("HELLO WORLD\n"));
    cmd = Command::cargo_bin("morse")?;
    cmd.arg("decode").arg("--file").arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("HELLO WORLD\n"));
    Ok(())
}

#[test]
fn decode_to_file_leading_dash() -> STDRESULT {
    let mut cmd = Command::cargo_bin("morse")?;
    let dir = tempfile::tempdir()?;
    let out_path = dir.path().join("test.txt");
    cmd.arg("-do").arg(&out_path).arg("- . ... -")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let actual = String::from_utf8(std::fs::read(&out_path)?)?;
    assert_eq!(&actual,"TEST\n");
    Ok(())
}
