use clap::Parser;
use std::path::Path;
use test_utils::{run_test, Mode};

const BIN: &str = env!("CARGO_BIN_EXE_sprigc");

#[derive(Parser)]
struct Config {
    /// Write the output of a specific test case or all test cases.
    #[clap(short, long)]
    write: Option<Option<String>>,
}

fn main() {
    if let Some(to_write) = Config::parse().write {
        match to_write {
            Some(file) => {
                let file = format!("tests/src/{file}.sp");
                let file = Path::new(&file);
                let file_path = file.to_str().expect("test path is valid unicode");
                let file_stem = file.file_stem().and_then(|s| s.to_str());
                let file_stem = file_stem.unwrap_or_else(|| panic!("`{file_path}` has no name"));
                run_test(BIN, file_path, Mode::Write);
                println!("Updated expected output for test case `{file_stem}`")
            }
            None => {
                std::fs::read_dir("tests/src")
                    .expect("`tests/src` is readable")
                    .map(|file| {
                        let file = file.expect("`tests/src` entry is readable").path();
                        let file_path = file
                            .to_str()
                            .expect("test path is valid unicode")
                            .to_owned();
                        let handle = std::thread::spawn({
                            let file_path = file_path.clone();
                            move || run_test(BIN, &file_path, Mode::Write)
                        });
                        (file_path, handle)
                    })
                    .collect::<Vec<_>>()
                    .into_iter()
                    .for_each(|(file_path, t)| {
                        t.join()
                            .unwrap_or_else(|_| panic!("writing `{file_path}` failed"));
                        println!("Updated expected output for `{file_path}`");
                    });
            }
        }
    }
}
