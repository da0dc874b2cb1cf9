use std::env;

fn main() {
    // Re-run build script if these change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MEDIAINFO_LIB_DIR");

    // Only the `native` feature links the real library; everything else
    // builds without MediaInfo installed.
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("MEDIAINFO_LIB_DIR") {
        println!(
            "cargo:rustc-link-search=native={}",
            std::path::PathBuf::from(dir).display()
        );
        println!("cargo:rustc-link-lib=mediainfo");
        return;
    }

    // Use pkg-config to find libmediainfo, falling back to the default
    // linker search path.
    if pkg_config::probe_library("libmediainfo").is_err() {
        println!(
            "cargo:warning=libmediainfo not found via pkg-config. Install the development package:\n\
             Ubuntu/Debian: sudo apt install libmediainfo-dev\n\
             Fedora: sudo dnf install libmediainfo-devel\n\
             macOS: brew install media-info"
        );
        println!("cargo:rustc-link-lib=mediainfo");
    }
}
