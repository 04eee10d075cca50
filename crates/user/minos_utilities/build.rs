use std::{env, path::PathBuf};

const LINKER_SCRIPT: &str = "user.ld";

fn main() {
    // Host builds (unit tests, tooling) must not pick up the riscv layout.
    if env::var("CARGO_CFG_TARGET_ARCH").as_deref() != Ok("riscv64") {
        return;
    }

    let script = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(LINKER_SCRIPT);
    println!("cargo::rerun-if-changed={}", script.display());
    println!("cargo::rustc-link-arg=-T{}", script.display());
}
