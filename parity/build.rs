fn main() {
    let mut builder = cc::Build::new();
    builder.warnings(true);

    builder.file("c/legacy.c").compile("some_c_code_legacy");

    println!("cargo:rerun-if-changed=c/legacy.c");
}
