use proc_macro::TokenStream;
use quote::{format_ident, quote};
use std::{env, fs, path::Path};

/// Expand to one `#[test]` per source file in `tests/src`, each comparing the compiler's output
/// with the file's expected output.
#[proc_macro]
pub fn integration_tests(_: TokenStream) -> TokenStream {
    let root = env::var("CARGO_MANIFEST_DIR").unwrap();
    let mut files: Vec<_> = fs::read_dir(Path::new(&root).join("tests/src"))
        .unwrap()
        .map(|f| f.unwrap().path())
        .collect();
    files.sort();

    let tests = files
        .into_iter()
        .map(|test_path| {
            let file_stem = test_path.file_stem().unwrap().to_str().unwrap();
            let test_name = format_ident!("r#{}", file_stem);
            let file_name = test_path.file_name().unwrap().to_str().unwrap();
            let test_path = format!("tests/src/{file_name}");
            quote! {
                #[test]
                fn #test_name() {
                    ::test_utils::run_test(
                        env!("CARGO_BIN_EXE_sprigc"),
                        #test_path,
                        ::test_utils::Mode::Compare,
                    );
                }
            }
        })
        .map(TokenStream::from);

    TokenStream::from_iter(tests)
}
