use std::{
    fs::{self, DirBuilder},
    path::Path,
    process::Command,
};

/// Flags every golden test runs the compiler with.
pub const FLAGS: [&str; 2] = ["--tokens", "--ast"];

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Write,
    Compare,
}

/// Run the compiler binary at `bin` on the source file `file` and check its output against
/// `tests/expected/<stem>.out`, or overwrite that file in `Mode::Write`.
pub fn run_test(bin: &str, file: &str, mode: Mode) {
    let path = Path::new(file);
    // Panic if the file doesn't exist.
    fs::metadata(path).unwrap();
    let file_stem = path.file_stem().unwrap().to_str().unwrap();
    let child = Command::new(bin)
        .args(FLAGS)
        .arg(file)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(
        child.status.success(),
        "`{file}` exited with {}",
        child.status
    );

    DirBuilder::new()
        .recursive(true)
        .create("tests/expected")
        .unwrap();
    let output_path = &format!("tests/expected/{}.out", file_stem);
    let output: Vec<_> = b"----STDOUT----\n"
        .iter()
        .chain(child.stdout.iter())
        .chain(b"\n----STDERR----\n".iter())
        .chain(child.stderr.iter())
        .copied()
        .collect();

    match mode {
        Mode::Write => fs::write(output_path, output).unwrap(),
        Mode::Compare => {
            let expected = fs::read(output_path).unwrap();
            if output != expected {
                println!("==============EXPECTED==============");
                println!(
                    "{expected}",
                    expected = String::from_utf8_lossy(&expected)
                );
                println!("===============ACTUAL===============");
                println!("{output}", output = String::from_utf8_lossy(&output));
                panic!("program `{file}` did not match its expected output!");
            }
        }
    }
}
