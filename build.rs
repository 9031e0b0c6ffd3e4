// Copyright 2026 nsexport developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::env;
use std::fs;
use std::path::Path;

use clap_complete::generate_to;
use clap_complete::shells::{Bash, Fish, Zsh};

#[allow(dead_code)]
#[path = "src/app/cli_parser.rs"]
mod cli_parser;

fn main() {
    let root_dir = env::var_os("CARGO_MANIFEST_DIR").expect("Cargo output directory environment variable is not set.");
    let output_dir = Path::new(&root_dir).join("contrib").join("shell-completions");
    fs::create_dir_all(&output_dir).expect("failed to create output directory");

    // Create Shell completions
    let mut parser = cli_parser::create_parser();
    generate_to(Bash, &mut parser, "nsexport", &output_dir).expect("failed to generate bash completions");
    generate_to(Fish, &mut parser, "nsexport", &output_dir).expect("failed to generate fish completions");
    generate_to(Zsh, &mut parser, "nsexport", &output_dir).expect("failed to generate zsh completions");
}
