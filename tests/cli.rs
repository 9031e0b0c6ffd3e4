extern crate assert_cli;

#[cfg(test)]
mod integration {
    use assert_cli;
    use tempfile::TempDir;

    #[test]
    fn nsexport_wo_args_is_a_silent_noop() {
        nsexport()
            .succeeds()
            .and()
            .stdout()
            .is("")
            .and()
            .stderr()
            .is("")
            .unwrap()
    }

    #[test]
    fn nsexport_writes_the_output_file() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("out.conf");

        nsexport()
            .with_args(&[path.to_str().expect("path is not valid UTF-8")])
            .succeeds()
            .and()
            .stdout()
            .is("")
            .and()
            .stderr()
            .is("")
            .unwrap();

        // The file exists even if the host reported no resolver addresses.
        assert!(path.exists());
    }

    #[test]
    fn nsexport_swallows_an_unwritable_destination() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("no").join("such").join("dir").join("out.conf");

        nsexport()
            .with_args(&[path.to_str().expect("path is not valid UTF-8")])
            .succeeds()
            .and()
            .stdout()
            .is("")
            .and()
            .stderr()
            .is("")
            .unwrap();
    }

    #[test]
    fn nsexport_ignores_additional_arguments() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("out.conf");

        nsexport()
            .with_args(&[path.to_str().expect("path is not valid UTF-8"), "spurious", "arguments"])
            .succeeds()
            .unwrap();

        assert!(path.exists());
    }

    // Since local development uses `cargo test` and CI uses `cargo test --release` we need to distinguish,
    // which binary to call -- `#[cfg(debug_assertions)]` to the rescue.

    #[cfg(debug_assertions)]
    fn nsexport() -> assert_cli::Assert {
        assert_cli::Assert::command(&["./target/debug/nsexport"])
    }

    #[cfg(not(debug_assertions))]
    fn nsexport() -> assert_cli::Assert {
        assert_cli::Assert::command(&["./target/release/nsexport"])
    }
}
