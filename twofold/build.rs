use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(tfcp_fma)");
    println!("cargo:rustc-check-cfg=cfg(tfcp_simd, values(\"none\", \"sse\", \"avx\"))");

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let has_feature = |name: &str| target_features.split(',').any(|f| f == name);

    let is_x86 = arch == "x86" || arch == "x86_64";
    let fma = (is_x86 && has_feature("fma")) || arch == "aarch64";

    let simd = if env::var_os("CARGO_FEATURE_NO_SIMD").is_some() || !is_x86 {
        "none"
    } else if has_feature("avx2") && fma {
        "avx"
    } else if has_feature("sse2") {
        "sse"
    } else {
        "none"
    };

    println!("cargo:rustc-cfg=tfcp_simd=\"{simd}\"");
    if fma {
        println!("cargo:rustc-cfg=tfcp_fma");
    }
}
